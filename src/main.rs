use anyhow::Result;
use clap::Parser;
use escalera::{chain, cli::Cli};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Attach window: external probes hook the step symbols during this sleep.
    // An interrupting signal terminates the process; that is pass-through,
    // not a handled case.
    let delay = args.startup_delay();
    tracing::debug!(delay_secs = delay.as_secs(), "waiting for probes to attach");
    std::thread::sleep(delay);

    tracing::debug!(seed = chain::INT_SEED, "starting dispatch chain");
    chain::step_int(chain::INT_SEED);
    tracing::debug!("dispatch chain returned");

    Ok(())
}
