use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log to stderr, quiet unless `RUST_LOG` asks for more
pub fn init() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to set up logging: {}", e))?;

    Ok(())
}
