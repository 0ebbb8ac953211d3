//! Resolve effect descriptions in place, without a running store.
//!
//! Reducer tests often need to know which action an async effect would feed
//! back. These helpers drive the effect futures directly and hand the
//! produced actions back to the test, which can then reduce them itself and
//! control exactly when the "completion" lands.

use composable_slice_core::effect::Effect;
use futures::future::join_all;
use std::future::Future;
use std::pin::Pin;

type EffectFuture<A> = Pin<Box<dyn Future<Output = Option<A>> + Send>>;

fn collect_futures<A>(effect: Effect<A>, out: &mut Vec<EffectFuture<A>>) {
    match effect {
        Effect::None => {},
        Effect::Parallel(effects) => {
            for effect in effects {
                collect_futures(effect, out);
            }
        },
        Effect::Future(fut) => out.push(fut),
    }
}

/// Run every future contained in `effects` and return the actions they produced.
///
/// Futures run concurrently; the returned actions keep the order in which the
/// effects were listed. Futures that complete with `None` contribute nothing.
pub async fn resolve_effects<A, I>(effects: I) -> Vec<A>
where
    I: IntoIterator<Item = Effect<A>>,
{
    let mut futures = Vec::new();
    for effect in effects {
        collect_futures(effect, &mut futures);
    }

    join_all(futures).await.into_iter().flatten().collect()
}

/// Count the futures contained in `effects`, looking inside `Parallel`.
#[must_use]
pub fn count_futures<A>(effects: &[Effect<A>]) -> usize {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::None => 0,
            Effect::Parallel(children) => count_futures(children),
            Effect::Future(_) => 1,
        })
        .sum()
}
