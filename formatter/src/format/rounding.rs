// Decimal rounding on the shortest text form of an f64

/// Rounds a non-negative finite `value` to `places` fractional digits,
/// half away from zero, and returns `(integer digits, fractional digits)`.
///
/// Works on the shortest decimal text that reads back as `value`, so `1.005`
/// is rounded as the five it is written with, not as `1.00499...`.
pub fn round_half_up(value: f64, places: usize) -> (String, String) {
    // Display never switches to exponent notation for f64.
    let shortest = format!("{}", value);
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    if frac_part.len() <= places {
        return (int_part.to_string(), format!("{:0<width$}", frac_part, width = places));
    }

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part[..places].bytes()).collect();
    if frac_part.as_bytes()[places] >= b'5' {
        carry_one(&mut digits);
    }

    let split = digits.len() - places;
    let int_digits = digits[..split].iter().map(|&b| char::from(b)).collect();
    let frac_digits = digits[split..].iter().map(|&b| char::from(b)).collect();
    (int_digits, frac_digits)
}

fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
