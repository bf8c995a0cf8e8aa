use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Insufficient reserves: reserve_in={reserve_in}, reserve_out={reserve_out}, amount={amount}")]
    InsufficientReserves {
        reserve_in: String,
        reserve_out: String,
        amount: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Benchmark worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;

impl QuoteError {
    pub fn insufficient_reserves(
        reserve_in: impl ToString,
        reserve_out: impl ToString,
        amount: impl ToString,
    ) -> Self {
        Self::InsufficientReserves {
            reserve_in: reserve_in.to_string(),
            reserve_out: reserve_out.to_string(),
            amount: amount.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for QuoteError {
    fn from(err: tokio::task::JoinError) -> Self {
        QuoteError::Worker(err.to_string())
    }
}
