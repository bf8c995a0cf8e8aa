pub mod inputs;
pub mod runner;

pub use inputs::{QuoteInput, SyntheticInputs};
pub use runner::{BenchmarkReport, BenchmarkRunner, BenchmarkRunnerBuilder, DefaultBenchmarkRunner};
