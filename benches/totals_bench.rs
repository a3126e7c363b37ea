use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use facturier::core::*;

fn lignes(n: u32) -> Vec<LigneTarifee> {
    (1..=n)
        .map(|i| {
            LigneTarifee::new(i, Decimal::new(i64::from(i) * 1250, 2))
                .avec_remise(Decimal::new(i64::from(i % 20), 0))
        })
        .collect()
}

fn build_facture(n: u32) -> Facture {
    let mut builder = FactureBuilder::new("BENCH-001", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
        .client("cli-0001", "Benchmark SARL");
    for i in 1..=n {
        builder = builder.add_ligne(
            LigneBuilder::new(format!("prod-{i:04}"), format!("Article {i}"), i, dec!(12.5))
                .remise(Decimal::new(i64::from(i % 20), 0))
                .build(),
        );
    }
    builder.build().unwrap()
}

fn bench_totaux(c: &mut Criterion) {
    let dix = lignes(10);
    let cent = lignes(100);

    c.bench_function("calculer_totaux_10_lignes", |b| {
        b.iter(|| calculer_totaux(black_box(&dix), dec!(5), true))
    });

    c.bench_function("calculer_totaux_100_lignes", |b| {
        b.iter(|| calculer_totaux(black_box(&cent), dec!(5), true))
    });
}

fn bench_builder(c: &mut Criterion) {
    c.bench_function("facture_builder_50_lignes", |b| {
        b.iter(|| build_facture(black_box(50)))
    });
}

criterion_group!(benches, bench_totaux, bench_builder);
criterion_main!(benches);
