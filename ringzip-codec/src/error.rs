use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("literal stream exhausted: miss flag needs literal #{index}, only {available} present")]
    LiteralUnderrun { index: usize, available: usize },
    #[error("cannot split stream: {pad_bits} padding bits in the last flag byte")]
    InvalidPadding { pad_bits: usize },
    #[error("unknown match rule {0:?} (expected \"exact\" or \"tolerant\")")]
    UnknownMatchRule(String),
    #[error("error threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}
