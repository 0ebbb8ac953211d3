//! Counter app binary
//!
//! Mounts the counter slice in a host store and drives the panel through a
//! short scripted session, printing the panel after every interaction.
//!
//! # Usage
//!
//! ```bash
//! COUNTER_FETCH_LATENCY_MS=200 cargo run --bin counter-app
//! ```

use counter_app::{AppConfig, CounterPanel, build_store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        fetch_latency_ms = config.fetch_latency_ms,
        amount = %config.initial_amount,
        "Configuration loaded"
    );

    let store = build_store(&config);
    let panel = CounterPanel::mount(store.clone());
    println!("{}", panel.render().await);

    panel.increment().await?;
    panel.increment().await?;
    panel.decrement().await?;
    println!("+ + -        {}", panel.render().await);

    panel.set_amount_text("5").await?;
    panel.add_amount().await?;
    println!("add amount   {}", panel.render().await);

    panel.add_if_odd().await?;
    println!("add if odd   {}", panel.render().await);

    let mut pending = panel.add_async().await?;
    println!("add async    {}", panel.render().await);
    pending.wait_with_timeout(config.fetch_latency() * 4).await?;
    println!("resolved     {}", panel.render().await);

    panel.set_amount_text("five").await?;
    panel.add_amount().await?;
    println!("bad amount   {}", panel.render().await);

    tracing::info!("Shutting down gracefully...");
    store.shutdown(store.config().default_shutdown_timeout).await?;
    Ok(())
}
