use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity of whole currency units as handed over by display code.
pub type Amount = f64;

/// Label-prefixed, grouped rendering of an [`Amount`], e.g. `"IDR 1.234.567"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedAmount(String);

impl FormattedAmount {
    pub fn new(text: impl Into<String>) -> Self {
        FormattedAmount(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedAmount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FormattedAmount {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for FormattedAmount {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl From<FormattedAmount> for String {
    fn from(amount: FormattedAmount) -> Self {
        amount.0
    }
}

/// What to do with NaN and infinite amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidAmountPolicy {
    /// Fail with an error.
    #[default]
    Reject,
    /// Render the locale's NaN / infinity symbols, like a browser would.
    Passthrough,
}

/// How an amount formatter renders: locale, label, fraction digits and the
/// policy for non-finite input. Missing fields deserialize to the IDR defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Locale tag, e.g. "id" or "id-ID".
    pub locale: String,
    pub currency_label: String,
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
    pub invalid_amount: InvalidAmountPolicy,
}

impl FormatterConfig {
    pub const IDR_LOCALE: &'static str = "id";
    pub const IDR_LABEL: &'static str = "IDR";

    /// Storefront prices: Indonesian grouping, whole rupiah, strict input.
    pub fn idr() -> Self {
        FormatterConfig {
            locale: Self::IDR_LOCALE.to_string(),
            currency_label: Self::IDR_LABEL.to_string(),
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            invalid_amount: InvalidAmountPolicy::Reject,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_currency_label(mut self, label: impl Into<String>) -> Self {
        self.currency_label = label.into();
        self
    }

    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    pub fn with_invalid_amount(mut self, policy: InvalidAmountPolicy) -> Self {
        self.invalid_amount = policy;
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::idr()
    }
}
