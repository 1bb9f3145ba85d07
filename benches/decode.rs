use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_period::{from_str, from_str_with_options, DecoderOptions, PeriodValue};

const ISO: &str = r#""P1Y2M3W4DT5H6M7.008S""#;
const INTEGER: &str = "86400";
const UNIT_OBJECT: &str =
    r#"{"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":7}"#;

fn benchmark_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_shape");

    for (name, json) in [("iso", ISO), ("integer", INTEGER), ("unit_object", UNIT_OBJECT)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), json, |b, json| {
            b.iter(|| from_str(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_contracts(c: &mut Criterion) {
    c.bench_function("decode_unit_object_single_unit", |b| {
        b.iter(|| from_str_with_options(black_box(UNIT_OBJECT), DecoderOptions::single_unit()))
    });

    c.bench_function("decode_unit_object_composite", |b| {
        b.iter(|| from_str_with_options(black_box(UNIT_OBJECT), DecoderOptions::composite()))
    });
}

fn benchmark_serde_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serde_json_array");

    for size in [10, 100, 500].iter() {
        let items: Vec<String> = (0..*size)
            .map(|i| match i % 3 {
                0 => i.to_string(),
                1 => format!("\"PT{i}M\""),
                _ => format!(
                    r#"{{"periodType":{{"name":"Days"}},"fieldType":{{"name":"days"}},"days":{i}}}"#
                ),
            })
            .collect();
        let json = format!("[{}]", items.join(","));

        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| serde_json::from_str::<Vec<PeriodValue>>(black_box(json)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_shapes,
    benchmark_contracts,
    benchmark_serde_array
);
criterion_main!(benches);
