// Formatter library root

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod locale;

pub use error::FormatError;
pub use format::{format_idr, AmountFormatter};
pub use shared::models::{Amount, FormattedAmount, FormatterConfig, InvalidAmountPolicy};
