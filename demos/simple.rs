//! Decoding the three period shapes.
//!
//! Run with: cargo run --example simple
//! Set RUST_LOG=serde_period=trace to see decoder events.

use serde_period::{from_str, from_str_with_options, DecoderOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = [
        r#""P1Y2M3W4DT5H6M7.008S""#,
        "3600",
        r#"{"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":7}"#,
        r#""   ""#,
    ];

    for json in inputs {
        let single = from_str_with_options(json, DecoderOptions::single_unit());
        let composite = from_str(json);
        println!("{json}");
        println!("  single-unit: {single:?}");
        println!("  composite:   {composite:?}");
        if let Ok(Some(value)) = composite {
            println!("  as ISO-8601: {value}");
        }
    }
}
