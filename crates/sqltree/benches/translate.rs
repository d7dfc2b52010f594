use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqltree::qb::{self, StatementBuilder, all, col, eq, gte, num, table, table_col};
use sqltree::{Statement, translate_statement};

/// SELECT col0, col1, ... FROM t JOIN u ON ... WHERE col0 >= 0 AND col1 >= 1 ...
fn build_select(n: usize) -> Statement {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let filters = (0..n).map(|i| gte(col(format!("col{i}")), num(i as f64)));

    let mut qb = qb::select("t", columns).join_eq("u", table_col("t", "id"), table_col("u", "tid"));
    if let Some(cond) = all(filters) {
        qb = qb.and_where(cond);
    }
    qb.statement().unwrap()
}

/// INSERT INTO t (c0, c1, ...) VALUES (...), (...) with `rows` rows of 8 values.
fn build_insert(rows: usize) -> Statement {
    let columns: Vec<String> = (0..8).map(|i| format!("c{i}")).collect();
    let values: Vec<Vec<String>> = (0..rows)
        .map(|r| (0..8).map(|c| (r * 8 + c).to_string()).collect())
        .collect();
    qb::insert(table("t"), columns).values(values).statement().unwrap()
}

fn bench_translate_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate/select");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(translate_statement(stmt)));
        });
    }

    group.finish();
}

fn bench_translate_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate/insert_values");

    for rows in [1, 10, 100, 1000] {
        let stmt = build_insert(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &stmt, |b, stmt| {
            b.iter(|| black_box(translate_statement(stmt)));
        });
    }

    group.finish();
}

fn bench_build_and_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate/build_and_translate");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = build_select(n);
                let _ = black_box(translate_statement(&stmt));
            });
        });
    }

    group.finish();
}

fn bench_json_decode_and_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate/json_decode_and_translate");

    for n in [1, 10, 50] {
        let json = qb::update(table("t"))
            .set("a", num(0))
            .and_where(all((0..n).map(|i| eq(col(format!("k{i}")), num(i as f64)))).unwrap())
            .statement()
            .unwrap()
            .to_json()
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &json, |b, json| {
            b.iter(|| {
                let stmt = Statement::from_json(json).unwrap();
                let _ = black_box(translate_statement(&stmt));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_translate_select,
    bench_translate_insert,
    bench_build_and_translate,
    bench_json_decode_and_translate
);
criterion_main!(benches);
