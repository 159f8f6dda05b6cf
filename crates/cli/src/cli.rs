use chrono::{DateTime, Utc};
use clap::Parser;

use expiry_core::PriorityClass;

/// Print the current expiration keys for each priority class.
///
/// Elapsed time is measured from process start unless `--at-ms` or
/// `--since` supplies another reading.
#[derive(Parser, Debug)]
#[command(name = "expiry", version, about = "Quantize deadlines into expiration keys")]
pub struct CliArgs {
    /// Elapsed milliseconds since the epoch to quantize
    #[arg(long, conflicts_with = "since")]
    pub at_ms: Option<u64>,

    /// Wall-clock epoch (RFC 3339); elapsed time is measured from here to now
    #[arg(long)]
    pub since: Option<DateTime<Utc>>,

    /// Only print this class: interactive or async
    #[arg(long, conflicts_with_all = ["offset_ms", "bucket_ms"])]
    pub class: Option<PriorityClass>,

    /// Custom expiration budget in milliseconds (requires --bucket-ms)
    #[arg(long, requires = "bucket_ms")]
    pub offset_ms: Option<i64>,

    /// Custom bucket width in milliseconds (requires --offset-ms)
    #[arg(long, requires = "offset_ms")]
    pub bucket_ms: Option<i64>,

    /// Path to a TOML file with class policies (default: environment)
    #[arg(long, env = "EXPIRY_CONFIG")]
    pub config: Option<String>,

    /// Emit JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}
