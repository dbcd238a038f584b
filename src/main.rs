mod error;
mod probe;
mod report;
mod util;

use tracing::info;

/// Empty host string, resolved to the IPv4 loopback address.
const TARGET_HOST: &str = "";
const TARGET_PORT: u16 = 2000;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Init tracing on stderr; stdout carries the probe report only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("connection_probe=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let addr = util::resolve_target(TARGET_HOST, TARGET_PORT).await?;
    info!("probing {}", addr);

    probe::run(addr).await?;
    Ok(())
}
