#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(unused_must_use)]
pub mod benchmark;
pub mod quoter;
pub mod types;
pub mod utils;
