use thiserror::Error;

/// Errors raised while building or loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be strictly positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("`{field}` range is empty: min {min} > max {max}")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("`degree_step` must be within 1..=360 (got {0})")]
    DegreeStep(u32),

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
