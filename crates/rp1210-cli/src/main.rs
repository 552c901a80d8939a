//! RP1210 Lookup - Main Entry Point

use rp1210_cli::{execute, init_logging, parse_args, LookupConfig};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let config = LookupConfig::load()?;
    init_logging(&config)?;

    info!("rp1210-lookup v{}", env!("CARGO_PKG_VERSION"));
    debug!("Loaded config: {:?}", config);

    let invocation = parse_args(std::env::args().skip(1))?;
    let format = invocation.format_override.unwrap_or(config.format);

    for line in execute(&invocation.request, format)? {
        println!("{}", line);
    }

    Ok(())
}
