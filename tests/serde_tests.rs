use serde::Deserialize;
use serde_period::{Period, PeriodValue};

#[derive(Deserialize, Debug, PartialEq)]
struct Schedule {
    name: String,
    interval: PeriodValue,
    retention: Period,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Optional {
    #[serde(default, deserialize_with = "serde_period::de::option::period")]
    grace: Option<Period>,
    #[serde(default, deserialize_with = "serde_period::de::option::value")]
    retry: Option<PeriodValue>,
}

#[test]
fn test_struct_with_all_shapes() {
    let json = r#"{
        "name": "nightly",
        "interval": {"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":24},
        "retention": "P4W"
    }"#;
    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(
        schedule,
        Schedule {
            name: "nightly".to_string(),
            interval: PeriodValue::Hours(24),
            retention: Period::weeks(4),
        }
    );
}

#[test]
fn test_integer_seconds_in_both_types() {
    let value: PeriodValue = serde_json::from_str("300").unwrap();
    assert_eq!(value, PeriodValue::Seconds(300));

    let period: Period = serde_json::from_str("300").unwrap();
    assert_eq!(period, Period::seconds(300));
}

#[test]
fn test_period_widens_unit_objects() {
    let period: Period = serde_json::from_str(
        r#"{"periodType":{"name":"Months"},"fieldType":{"name":"months"},"months":18}"#,
    )
    .unwrap();
    assert_eq!(period, Period::months(18));
}

#[test]
fn test_unknown_unit_is_an_error() {
    let err = serde_json::from_str::<PeriodValue>(
        r#"{"periodType":{"name":"Fortnights"},"fieldType":{"name":"fortnights"},"fortnights":1}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Fortnights"));
}

#[test]
fn test_unexpected_shapes() {
    for json in ["true", "1.5", "[1]", "null"] {
        let err = serde_json::from_str::<PeriodValue>(json).unwrap_err();
        assert!(
            err.to_string().contains("Number, String, or Object"),
            "{json}: {err}"
        );
    }
}

#[test]
fn test_malformed_and_overflowing_values() {
    assert!(serde_json::from_str::<Period>(r#""P1X""#).is_err());
    assert!(serde_json::from_str::<Period>("4294967296").is_err());
    assert!(serde_json::from_str::<Period>("18446744073709551615").is_err());
}

#[test]
fn test_integer_beyond_u64_overflows() {
    let err = serde_json::from_str::<PeriodValue>("99999999999999999999").unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
    assert!(!err.to_string().contains("floating-point"), "{err}");

    let err = serde_json::from_str::<Period>("-99999999999999999999").unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");

    // a real float is still the wrong kind of token
    let err = serde_json::from_str::<PeriodValue>("2.0").unwrap_err();
    assert!(err.to_string().contains("floating-point"), "{err}");
}

#[test]
fn test_blank_string_required_field() {
    let err = serde_json::from_str::<Period>(r#""  ""#).unwrap_err();
    assert!(err.to_string().contains("non-blank period"));
}

#[test]
fn test_optional_fields() {
    let all: Optional = serde_json::from_str(r#"{"grace": "PT30S", "retry": 5}"#).unwrap();
    assert_eq!(all.grace, Some(Period::seconds(30)));
    assert_eq!(all.retry, Some(PeriodValue::Seconds(5)));

    let blank: Optional = serde_json::from_str(r#"{"grace": "", "retry": null}"#).unwrap();
    assert_eq!(blank, Optional { grace: None, retry: None });

    let missing: Optional = serde_json::from_str("{}").unwrap();
    assert_eq!(missing, Optional { grace: None, retry: None });
}

#[test]
fn test_vec_of_mixed_periods() {
    let values: Vec<PeriodValue> =
        serde_json::from_str(r#"[60, "P1D", {"periodType":{"name":"Years"},"fieldType":{"name":"years"},"years":1}]"#)
            .unwrap();
    assert_eq!(
        values,
        vec![
            PeriodValue::Seconds(60),
            PeriodValue::Composite(Period::days(1)),
            PeriodValue::Years(1),
        ]
    );
}
