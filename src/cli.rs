//! CLI argument parsing for Escalera

use clap::Parser;
use std::time::Duration;

use crate::chain;

#[derive(Parser, Debug)]
#[command(name = "escalera")]
#[command(version)]
#[command(about = "Deterministic typed call-chain fixture for probe testsuites", long_about = None)]
pub struct Cli {
    /// Seconds to sleep before the chain fires (attach window for external probes)
    #[arg(
        long = "delay-secs",
        value_name = "SECS",
        default_value_t = chain::STARTUP_DELAY.as_secs()
    )]
    pub delay_secs: u64,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Startup delay as a `Duration`.
    pub fn startup_delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}
