use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_codec::{decode, encode, from_str, to_string, to_value, DecodeOptions, EncodeOptions};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };
    let value = to_value(&user).unwrap();
    let options = EncodeOptions::default();

    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| encode(black_box(&value), &options))
    });
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let toon = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true";
    let options = DecodeOptions::default();

    c.bench_function("decode_simple_struct", |b| {
        b.iter(|| decode(black_box(toon), &options))
    });
}

fn benchmark_serde_roundtrip(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serde_roundtrip_struct", |b| {
        b.iter(|| {
            let text = to_string(black_box(&user)).unwrap();
            from_str::<User>(&text).unwrap()
        })
    });
}

fn benchmark_tabular_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular_array");

    for size in [10, 100, 1000].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU-{:05}", i),
                name: format!("Product {}", i),
                price: 10.0 + i as f64 * 0.5,
                quantity: (i % 50) as u32,
            })
            .collect();
        let value = to_value(&products).unwrap();
        let options = EncodeOptions::default();
        let text = encode(&value, &options);
        let decode_options = DecodeOptions::default();

        group.bench_with_input(BenchmarkId::new("encode", size), &value, |b, value| {
            b.iter(|| encode(black_box(value), &options))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| decode(black_box(text), &decode_options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_decode_simple,
    benchmark_serde_roundtrip,
    benchmark_tabular_arrays
);
criterion_main!(benches);
