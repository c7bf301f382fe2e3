use anyhow::Result;
use fibonacci_variants::{config::HarnessConfig, harness};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = HarnessConfig::parse();
    let measurements = harness::run(&config)?;
    print!("{}", harness::render(&measurements));
    Ok(())
}
