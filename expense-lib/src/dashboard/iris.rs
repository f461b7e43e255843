use anyhow::Context;
use serde::{Deserialize, Serialize};

const IRIS_CSV: &str = include_str!("iris.csv");

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct IrisSample {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: String,
}

/// Parses the bundled iris measurements.
pub fn load_samples() -> Result<Vec<IrisSample>, anyhow::Error> {
    let mut reader = csv::Reader::from_reader(IRIS_CSV.as_bytes());
    reader
        .deserialize::<IrisSample>()
        .enumerate()
        .map(|(row, sample)| {
            sample.with_context(|| format!("Invalid iris sample on row {}", row + 1))
        })
        .collect()
}
