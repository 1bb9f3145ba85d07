//! Period fields in a serde-derived configuration struct.
//!
//! Run with: cargo run --example serde_fields

use serde::Deserialize;
use serde_period::{Period, PeriodValue};

#[derive(Debug, Deserialize)]
struct BackupPolicy {
    name: String,
    every: PeriodValue,
    keep: Period,
    #[serde(default, deserialize_with = "serde_period::de::option::period")]
    grace: Option<Period>,
}

fn main() -> Result<(), serde_json::Error> {
    let json = r#"[
        {"name": "hourly", "every": 3600, "keep": "P2D"},
        {
            "name": "weekly",
            "every": {"periodType":{"name":"Weeks"},"fieldType":{"name":"weeks"},"weeks":1},
            "keep": "P1Y",
            "grace": "PT30M"
        }
    ]"#;

    let policies: Vec<BackupPolicy> = serde_json::from_str(json)?;
    for policy in &policies {
        let fixed = policy
            .keep
            .to_standard_duration()
            .map_or_else(|| "calendar-dependent".to_string(), |d| format!("{}s", d.num_seconds()));
        println!(
            "{}: every {} (unit {:?}), keep {} ({fixed}), grace {:?}",
            policy.name,
            policy.every,
            policy.every.unit(),
            policy.keep,
            policy.grace,
        );
    }
    Ok(())
}
