use clap::Parser as _;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use upoprice::Args;

pub fn main() -> anyhow::Result<()> {
    // The solver logs its search summaries through `tracing`; subscribe so
    // RUST_LOG=debug surfaces them on stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Args::parse().evaluate()
}
