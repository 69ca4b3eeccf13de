//! Pipeline performance benchmarks.
//!
//! Measures reading and record building across different table sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use destinations::{ColumnMap, Parser, Pipeline, RecordBuilder};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "City,State,Population,Density,Sales Tax,Income,Marijuana,Gifford Score,Climate,Snow,Rain,Gas,COL,Sun,LGBTQ,TechHub";
const STATES: &[&str] = &["TX", "KY", "AZ", "ID", "Tennesee", "New Mexico"];
const GRADES: &[&str] = &["A", "B+", "C-", "D", "F", ""];

/// Generate synthetic location rows.
fn generate_csv_data(rows: usize) -> String {
    let mut data = String::from(HEADER);
    data.push('\n');

    for row in 0..rows {
        data.push_str(&format!(
            "City {row},{state},\"{pop}\",{density},{tax:.2},{income:.1},Medical,{grade},Mild,{snow:.1},{rain:.1},${gas:.2},{col},{sun},{lgbtq},{tech}\n",
            state = STATES[row % STATES.len()],
            pop = (row * 1_237) % 900_000 + 10_000,
            density = (row * 17) % 5_000,
            tax = 4.0 + (row % 50) as f64 / 10.0,
            income = (row % 10) as f64 / 2.0,
            grade = GRADES[row % GRADES.len()],
            snow = (row % 80) as f64 * 0.7,
            rain = (row % 60) as f64 * 0.9,
            gas = 2.5 + (row % 20) as f64 / 10.0,
            col = if row % 7 == 0 { "?".to_string() } else { (80 + row % 60).to_string() },
            sun = 150 + row % 150,
            lgbtq = row % 100,
            tech = if row % 3 == 0 { "Y" } else { "N" },
        ));
    }

    data
}

/// Benchmark record building on an in-memory table.
fn bench_build_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_records");
    let columns = ColumnMap::v2();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows);
        let table = Parser::new().parse_bytes(data.as_bytes(), b',').unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            let builder = RecordBuilder::new(&columns);
            b.iter(|| {
                for row in table.raw_rows() {
                    black_box(builder.build(&row));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark the full read + build + sort path from a file.
fn bench_process_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_file");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(Pipeline::new().process(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_records, bench_process_file);
criterion_main!(benches);
