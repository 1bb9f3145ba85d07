//! Recovering from mismatched input with a custom context.
//!
//! Run with: cargo run --example custom_context

use serde_period::{DecodeContext, DecoderOptions, PeriodDecoder, PeriodValue, Result, Token};

/// Logs mismatches and decodes them as "no period" instead of failing.
struct Forgiving;

impl DecodeContext for Forgiving {
    fn report_mismatch(&self, type_name: &str, unit_family: &str) -> Result<Option<PeriodValue>> {
        tracing::warn!(type_name, unit_family, "ignoring unknown period unit");
        Ok(None)
    }

    fn handle_unexpected_token(
        &self,
        type_name: &str,
        actual: Option<Token>,
        expected: &str,
    ) -> Result<Option<PeriodValue>> {
        tracing::warn!(type_name, ?actual, expected, "ignoring unexpected token");
        Ok(None)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let decoder = PeriodDecoder::with_context(DecoderOptions::single_unit(), Forgiving);
    let inputs = [
        "true",
        "[1, 2, 3]",
        r#"{"periodType":{"name":"Fortnights"},"fieldType":{"name":"fortnights"},"fortnights":2}"#,
        r#"{"periodType":{"name":"Weeks"},"fieldType":{"name":"weeks"},"weeks":2}"#,
    ];

    for json in inputs {
        let value = decoder.decode_str(json)?;
        println!("{json} -> {value:?}");
    }
    Ok(())
}
