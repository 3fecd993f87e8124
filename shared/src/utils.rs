// Helpers for reading back numbers written in a regional convention.
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("amount text is empty")]
    Empty,

    #[error("'{text}' is not a number: {reason}")]
    Malformed { text: String, reason: String },
}

/// Digit cluster sizes as `(lowest, every higher)`: `(3, 3)` for thousands, `(3, 2)` for lakh/crore.
pub type GroupSizes = (usize, usize);

// Parses decimals like "1.234,56" (group ".", decimal ",") or "1,234.56" (group ",", decimal ".") into f64.
// Group separators are only accepted between clusters of the sizes given; `None` accepts no separators.
pub fn parse_localized_decimal(
    text: &str,
    group_separator: &str,
    decimal_separator: &str,
    group_sizes: Option<GroupSizes>,
) -> Result<f64, ParseAmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    let malformed = |reason: &str| ParseAmountError::Malformed {
        text: text.to_string(),
        reason: reason.to_string(),
    };

    let (int_part, frac_part) = match trimmed.split_once(decimal_separator) {
        Some((int_part, frac_part)) if !decimal_separator.is_empty() => (int_part, Some(frac_part)),
        _ => (trimmed, None),
    };

    let mut normalized = String::with_capacity(trimmed.len());
    if group_separator.is_empty() || !int_part.contains(group_separator) {
        normalized.push_str(int_part);
    } else {
        let (lowest, higher) = group_sizes.ok_or_else(|| malformed("digit grouping is not used here"))?;
        let unsigned = int_part.trim_start_matches(&['-', '+'][..]);
        normalized.push_str(&int_part[..int_part.len() - unsigned.len()]);

        let clusters: Vec<&str> = unsigned.split(group_separator).collect();
        let last = clusters.len() - 1;
        for (i, cluster) in clusters.iter().enumerate() {
            let fits = match i {
                0 => (1..=higher).contains(&cluster.len()),
                i if i == last => cluster.len() == lowest,
                _ => cluster.len() == higher,
            };
            if !fits {
                return Err(malformed("misplaced digit group separator"));
            }
            normalized.push_str(cluster);
        }
    }
    if let Some(frac_part) = frac_part {
        if !group_separator.is_empty() && frac_part.contains(group_separator) {
            return Err(malformed("digit group separator after the decimal mark"));
        }
        normalized.push('.');
        normalized.push_str(frac_part);
    }

    // f64::from_str accepts "inf" and "NaN", which are never valid prices
    if !normalized.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+') {
        return Err(malformed("unexpected character"));
    }

    f64::from_str(&normalized).map_err(|e| malformed(&e.to_string()))
}
