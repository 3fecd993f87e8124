// Localized amount formatting
pub mod grouping;
pub mod rounding;

use crate::error::FormatError;
use crate::locale::resolve_locale;
use grouping::{cluster_sizes, group_digits};
use num_format::{Locale, ToFormattedString};
use rounding::round_half_up;
use shared::models::{Amount, FormattedAmount, FormatterConfig, InvalidAmountPolicy};
use shared::utils::parse_localized_decimal;

/// Upper bound for `max_fraction_digits`.
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Renders amounts as `"<label> <grouped number>"` for one locale.
///
/// Built once from a [`FormatterConfig`] and then reused; it holds no mutable
/// state and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    config: FormatterConfig,
    locale: Locale,
}

impl AmountFormatter {
    pub fn new(config: FormatterConfig) -> Result<Self, FormatError> {
        if config.min_fraction_digits > config.max_fraction_digits {
            return Err(FormatError::InvalidConfig(format!(
                "min_fraction_digits ({}) exceeds max_fraction_digits ({})",
                config.min_fraction_digits, config.max_fraction_digits
            )));
        }
        if config.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidConfig(format!(
                "max_fraction_digits ({}) exceeds {}",
                config.max_fraction_digits, MAX_FRACTION_DIGITS
            )));
        }
        let locale = resolve_locale(&config.locale)?;
        tracing::debug!(
            locale = locale.name(),
            label = %config.currency_label,
            min_fraction_digits = config.min_fraction_digits,
            max_fraction_digits = config.max_fraction_digits,
            policy = ?config.invalid_amount,
            "Built amount formatter"
        );
        Ok(AmountFormatter { config, locale })
    }

    /// Storefront formatter: Indonesian grouping, "IDR" label, whole units.
    pub fn idr() -> Self {
        AmountFormatter {
            config: FormatterConfig::idr(),
            locale: Locale::id,
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format(&self, amount: Amount) -> Result<FormattedAmount, FormatError> {
        let number = if amount.is_finite() {
            self.render_finite(amount)
        } else {
            match self.config.invalid_amount {
                InvalidAmountPolicy::Reject => return Err(FormatError::InvalidAmount(amount)),
                InvalidAmountPolicy::Passthrough => {
                    tracing::warn!(amount = %amount, "Formatting non-finite amount");
                    self.render_non_finite(amount)
                }
            }
        };
        Ok(FormattedAmount::new(format!("{} {}", self.config.currency_label, number)))
    }

    /// Reads back an amount written in this formatter's locale, with or without
    /// the currency label in front ("IDR 1.234.567", "1.234.567", "-1.000").
    pub fn parse(&self, text: &str) -> Result<Amount, FormatError> {
        let trimmed = text.trim();
        let label = self.config.currency_label.as_str();
        let number = if label.is_empty() {
            trimmed
        } else {
            trimmed.strip_prefix(label).unwrap_or(trimmed)
        };

        let minus = self.locale.minus_sign();
        let number = if minus != "-" { number.replace(minus, "-") } else { number.to_string() };

        parse_localized_decimal(
            &number,
            self.locale.separator(),
            self.locale.decimal(),
            cluster_sizes(self.locale.grouping()),
        )
        .map_err(|source| FormatError::Parse {
            input: text.to_string(),
            source,
        })
    }

    fn render_finite(&self, amount: Amount) -> String {
        let max = usize::from(self.config.max_fraction_digits);
        let min = usize::from(self.config.min_fraction_digits);
        let (int_digits, mut frac_digits) = round_half_up(amount.abs(), max);

        let is_zero = int_digits.bytes().chain(frac_digits.bytes()).all(|b| b == b'0');

        while frac_digits.len() > min && frac_digits.ends_with('0') {
            frac_digits.pop();
        }

        let mut out = String::new();
        if amount < 0.0 && !is_zero {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&self.group_integer(&int_digits));
        if !frac_digits.is_empty() {
            out.push_str(self.locale.decimal());
            out.push_str(&frac_digits);
        }
        out
    }

    // num-format covers anything that fits a u128; wider values are clustered by hand.
    fn group_integer(&self, int_digits: &str) -> String {
        match int_digits.parse::<u128>() {
            Ok(value) => value.to_formatted_string(&self.locale),
            Err(_) => group_digits(int_digits, self.locale.separator(), self.locale.grouping()),
        }
    }

    fn render_non_finite(&self, amount: Amount) -> String {
        if amount.is_nan() {
            self.locale.nan().to_string()
        } else if amount.is_sign_negative() {
            format!("{}{}", self.locale.minus_sign(), self.locale.infinity())
        } else {
            self.locale.infinity().to_string()
        }
    }
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::idr()
    }
}

/// Formats a storefront price or total, e.g. `1234567.0` as `"IDR 1.234.567"`.
pub fn format_idr(amount: Amount) -> Result<FormattedAmount, FormatError> {
    AmountFormatter::idr().format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient_idr() -> AmountFormatter {
        AmountFormatter::new(FormatterConfig::idr().with_invalid_amount(InvalidAmountPolicy::Passthrough)).unwrap()
    }

    #[test]
    fn test_format_idr_whole_amounts() {
        assert_eq!(format_idr(0.0).unwrap(), "IDR 0");
        assert_eq!(format_idr(999.0).unwrap(), "IDR 999");
        assert_eq!(format_idr(1000.0).unwrap(), "IDR 1.000");
        assert_eq!(format_idr(1234567.0).unwrap(), "IDR 1.234.567");
        assert_eq!(format_idr(1_000_000_000.0).unwrap(), "IDR 1.000.000.000");
    }

    #[test]
    fn test_format_idr_groups_every_integer_by_threes() {
        for n in [1u64, 12, 123, 1234, 12345, 123456, 9_876_543_210] {
            let digits = n.to_string();
            let expected = format!("IDR {}", group_digits(&digits, ".", num_format::Grouping::Standard));
            assert_eq!(format_idr(n as f64).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_format_idr_rounds_half_away_from_zero() {
        assert_eq!(format_idr(1500.6).unwrap(), "IDR 1.501");
        assert_eq!(format_idr(1500.5).unwrap(), "IDR 1.501");
        assert_eq!(format_idr(1500.4).unwrap(), "IDR 1.500");
        assert_eq!(format_idr(0.5).unwrap(), "IDR 1");
        assert_eq!(format_idr(2.5).unwrap(), "IDR 3");
        assert_eq!(format_idr(-1500.5).unwrap(), "IDR -1.501");
    }

    #[test]
    fn test_format_idr_negative() {
        assert_eq!(format_idr(-1000.0).unwrap(), "IDR -1.000");
        assert_eq!(format_idr(-1.0).unwrap(), "IDR -1");
    }

    #[test]
    fn test_format_idr_negative_zero_has_no_sign() {
        assert_eq!(format_idr(-0.0).unwrap(), "IDR 0");
        assert_eq!(format_idr(-0.4).unwrap(), "IDR 0");
    }

    #[test]
    fn test_format_idr_huge_value_is_rendered_fully() {
        assert_eq!(format_idr(1e21).unwrap(), "IDR 1.000.000.000.000.000.000.000");
    }

    #[test]
    fn test_format_idr_beyond_u128_is_rendered_fully() {
        let expected = format!("IDR 10{}", ".000".repeat(13));
        assert_eq!(format_idr(1e40).unwrap().as_str(), expected);
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = AmountFormatter::idr();
        let first = formatter.format(7_654_321.49).unwrap();
        for _ in 0..10 {
            assert_eq!(formatter.format(7_654_321.49).unwrap(), first);
        }
        assert_eq!(first, "IDR 7.654.321");
    }

    #[test]
    fn test_non_finite_rejected_by_default() {
        assert!(matches!(format_idr(f64::NAN), Err(FormatError::InvalidAmount(a)) if a.is_nan()));
        assert!(matches!(format_idr(f64::INFINITY), Err(FormatError::InvalidAmount(_))));
        assert!(matches!(format_idr(f64::NEG_INFINITY), Err(FormatError::InvalidAmount(_))));
    }

    #[test]
    fn test_non_finite_passthrough() {
        let formatter = lenient_idr();
        assert_eq!(formatter.format(f64::NAN).unwrap(), "IDR NaN");
        assert_eq!(formatter.format(f64::INFINITY).unwrap(), "IDR ∞");
        assert_eq!(formatter.format(f64::NEG_INFINITY).unwrap(), "IDR -∞");
        assert_eq!(formatter.format(1000.0).unwrap(), "IDR 1.000");
    }

    #[test]
    fn test_new_with_idr_config_matches_idr() {
        let built = AmountFormatter::new(FormatterConfig::idr()).unwrap();
        let preset = AmountFormatter::idr();
        assert_eq!(built.locale(), preset.locale());
        assert_eq!(built.config(), preset.config());
        assert_eq!(built.format(1234567.0).unwrap(), preset.format(1234567.0).unwrap());
    }

    #[test]
    fn test_region_tag_accepted() {
        let formatter = AmountFormatter::new(FormatterConfig::idr().with_locale("id-ID")).unwrap();
        assert_eq!(formatter.format(1234567.0).unwrap(), "IDR 1.234.567");
    }

    #[test]
    fn test_english_with_cents() {
        let config = FormatterConfig::idr()
            .with_locale("en")
            .with_currency_label("USD")
            .with_fraction_digits(2, 2);
        let formatter = AmountFormatter::new(config).unwrap();
        assert_eq!(formatter.format(1234.5).unwrap(), "USD 1,234.50");
        assert_eq!(formatter.format(1234.567).unwrap(), "USD 1,234.57");
        assert_eq!(formatter.format(0.125).unwrap(), "USD 0.13");
        assert_eq!(formatter.format(-0.001).unwrap(), "USD 0.00");
        assert_eq!(formatter.format(-12.3).unwrap(), "USD -12.30");
    }

    #[test]
    fn test_optional_fraction_digits_are_trimmed() {
        let config = FormatterConfig::idr().with_fraction_digits(0, 2);
        let formatter = AmountFormatter::new(config).unwrap();
        assert_eq!(formatter.format(1500.0).unwrap(), "IDR 1.500");
        assert_eq!(formatter.format(1500.5).unwrap(), "IDR 1.500,5");
        assert_eq!(formatter.format(1500.25).unwrap(), "IDR 1.500,25");
        assert_eq!(formatter.format(1e20).unwrap(), "IDR 100.000.000.000.000.000.000");
    }

    #[test]
    fn test_written_ties_round_away_from_zero() {
        let formatter = AmountFormatter::new(FormatterConfig::idr().with_fraction_digits(0, 2)).unwrap();
        assert_eq!(formatter.format(1.005).unwrap(), "IDR 1,01");
        assert_eq!(formatter.format(8.345).unwrap(), "IDR 8,35");
        assert_eq!(formatter.format(-1.005).unwrap(), "IDR -1,01");
        assert_eq!(formatter.format(9.995).unwrap(), "IDR 10");
    }

    #[test]
    fn test_invalid_fraction_bounds() {
        let inverted = FormatterConfig::idr().with_fraction_digits(3, 1);
        assert!(matches!(AmountFormatter::new(inverted), Err(FormatError::InvalidConfig(_))));

        let too_many = FormatterConfig::idr().with_fraction_digits(0, MAX_FRACTION_DIGITS + 1);
        assert!(matches!(AmountFormatter::new(too_many), Err(FormatError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let config = FormatterConfig::idr().with_locale("xx");
        assert!(matches!(AmountFormatter::new(config), Err(FormatError::UnknownLocale(_))));
    }

    #[test]
    fn test_parse_with_and_without_label() {
        let formatter = AmountFormatter::idr();
        assert_eq!(formatter.parse("IDR 1.234.567").unwrap(), 1234567.0);
        assert_eq!(formatter.parse("1.234.567").unwrap(), 1234567.0);
        assert_eq!(formatter.parse("1234567").unwrap(), 1234567.0);
        assert_eq!(formatter.parse("-1.000").unwrap(), -1000.0);
        assert_eq!(formatter.parse("1.500,75").unwrap(), 1500.75);
    }

    #[test]
    fn test_parse_reads_back_formatted_output() {
        let formatter = AmountFormatter::idr();
        for amount in [0.0, 999.0, 1500.6, -1000.0, 1234567.0] {
            let formatted = formatter.format(amount).unwrap();
            assert_eq!(formatter.parse(formatted.as_str()).unwrap(), amount.round());
        }
    }

    #[test]
    fn test_parse_rejects_misplaced_group_separators() {
        let formatter = AmountFormatter::idr();
        for text in ["1.5", "1.2.3", "1500.6", "12.34.567", "1.000.00"] {
            assert!(
                matches!(formatter.parse(text), Err(FormatError::Parse { .. })),
                "'{}' should not parse",
                text
            );
        }
    }

    #[test]
    fn test_parse_error_keeps_input() {
        let err = AmountFormatter::idr().parse("IDR lots").unwrap_err();
        match err {
            FormatError::Parse { input, .. } => assert_eq!(input, "IDR lots"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_formatter_is_shareable_across_threads() {
        let formatter = std::sync::Arc::new(AmountFormatter::idr());
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let formatter = formatter.clone();
                std::thread::spawn(move || formatter.format(1000.0 * f64::from(i)).unwrap())
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap().into_inner()).collect();
        assert_eq!(results, vec!["IDR 0", "IDR 1.000", "IDR 2.000", "IDR 3.000"]);
    }
}
