// Digit clustering for the integer part of an amount
use num_format::Grouping;

/// Inserts `separator` between digit clusters of `digits` (ASCII digits only,
/// most significant first).
///
/// Standard grouping clusters by three; Indian grouping takes three for the
/// lowest cluster and two for every cluster above it. POSIX leaves the digits
/// untouched.
pub fn group_digits(digits: &str, separator: &str, grouping: Grouping) -> String {
    let Some((lowest, higher)) = cluster_sizes(grouping) else {
        return digits.to_string();
    };
    if digits.len() <= lowest || separator.is_empty() {
        return digits.to_string();
    }

    let mut clusters: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut size = lowest;
    while end > size {
        clusters.push(&digits[end - size..end]);
        end -= size;
        size = higher;
    }
    clusters.push(&digits[..end]);
    clusters.reverse();
    clusters.join(separator)
}

/// Cluster sizes as `(lowest, every higher)`; `None` when digits are not grouped.
pub fn cluster_sizes(grouping: Grouping) -> Option<(usize, usize)> {
    match grouping {
        Grouping::Standard => Some((3, 3)),
        Grouping::Indian => Some((3, 2)),
        _ => None, // Posix
    }
}
