use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

/// Task kinds with a typical duration range in seconds.
const TASKS: &[(&str, f64, f64)] = &[
    ("Value added", 40.0, 90.0),
    ("Non value added", 5.0, 25.0),
    ("Walking", 3.0, 15.0),
    ("Waiting", 0.0, 20.0),
];

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let mut stations: Vec<String> = Vec::new();
    let mut times: Vec<f64> = Vec::new();
    let mut categories: Vec<String> = Vec::new();

    // Station 5 is deliberately overloaded so the board shows a bottleneck.
    for station in 1..=8 {
        let load = if station == 5 { 1.6 } else { 1.0 };
        for &(category, low, high) in TASKS {
            let steps = 1 + (rng.next_u64() % 3) as usize;
            for _ in 0..steps {
                stations.push(format!("Station {station}"));
                times.push((rng.uniform(low, high) * load * 10.0).round() / 10.0);
                categories.push(category.to_lowercase());
            }
        }
    }

    // Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("Estacao", DataType::Utf8, false),
        Field::new("Tempo", DataType::Float64, false),
        Field::new("Categoria", DataType::Utf8, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(stations.clone())),
            Arc::new(Float64Array::from(times.clone())),
            Arc::new(StringArray::from(categories.clone())),
        ],
    )
    .context("building record batch")?;

    let parquet_path = "sample_tasks.parquet";
    let file = std::fs::File::create(parquet_path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;

    // CSV
    let csv_path = "sample_tasks.csv";
    let mut csv = csv::Writer::from_path(csv_path).context("creating CSV file")?;
    csv.write_record(["Estacao", "Tempo", "Categoria"])?;
    for ((station, time), category) in stations.iter().zip(&times).zip(&categories) {
        let time = time.to_string();
        csv.write_record([station.as_str(), time.as_str(), category.as_str()])?;
    }
    csv.flush()?;

    println!(
        "Wrote {} tasks to {parquet_path} and {csv_path}",
        stations.len()
    );
    Ok(())
}
