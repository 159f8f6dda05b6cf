use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use expiry_core::{
    BucketPolicy, Clock, ExpirationTime, PriorityClass, PriorityTime, Quantizer,
};

use crate::cli::CliArgs;

/// Expiration computed under a policy given on the command line.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CustomExpiration {
    pub policy: BucketPolicy,
    pub expiration: ExpirationTime,
}

/// What one invocation prints.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub elapsed_ms: u64,
    pub current_time: PriorityTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#async: Option<ExpirationTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<ExpirationTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomExpiration>,
}

/// Resolve the elapsed-ms reading: explicit value, then `--since`, then the
/// process clock.
pub fn elapsed_ms(args: &CliArgs, now: DateTime<Utc>, clock: &impl Clock) -> Result<u64> {
    if let Some(ms) = args.at_ms {
        return Ok(ms);
    }
    if let Some(since) = args.since {
        let elapsed = now.signed_duration_since(since).num_milliseconds();
        if elapsed < 0 {
            bail!("--since {} is in the future", since.to_rfc3339());
        }
        return Ok(elapsed as u64);
    }
    Ok(clock.now_ms())
}

pub fn build(quantizer: &Quantizer, args: &CliArgs, elapsed_ms: u64) -> Result<Report> {
    debug!(elapsed_ms, "building report");
    let current_time = quantizer
        .unit_time(elapsed_ms)
        .context("elapsed time does not fit the expiration space")?;

    let mut report = Report {
        elapsed_ms,
        current_time,
        r#async: None,
        interactive: None,
        custom: None,
    };

    if let (Some(offset), Some(bucket)) = (args.offset_ms, args.bucket_ms) {
        let policy = BucketPolicy::new(offset, bucket).context("invalid custom policy")?;
        report.custom = Some(CustomExpiration {
            policy,
            expiration: quantizer.expiration_with(policy, elapsed_ms)?,
        });
        return Ok(report);
    }

    for class in PriorityClass::ALL {
        if args.class.is_some_and(|only| only != class) {
            continue;
        }
        let expiration = quantizer.expiration(class, elapsed_ms)?;
        match class {
            PriorityClass::Interactive => report.interactive = Some(expiration),
            PriorityClass::Async => report.r#async = Some(expiration),
        }
    }
    Ok(report)
}

pub fn render(report: &Report, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("failed to serialize report");
    }
    let mut lines = vec![format!("currentTime {}", report.current_time)];
    if let Some(e) = report.r#async {
        lines.push(format!("async expiration {e}"));
    }
    if let Some(e) = report.interactive {
        lines.push(format!("interactive expiration {e}"));
    }
    if let Some(custom) = report.custom {
        lines.push(format!(
            "expiration ({}ms/{}ms) {}",
            custom.policy.expiration_offset_ms, custom.policy.bucket_size_ms, custom.expiration
        ));
    }
    Ok(lines.join("\n"))
}
