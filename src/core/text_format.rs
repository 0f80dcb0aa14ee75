// C-style "%g" rendering for binary64 values. Rust's `Display` for f64 never
// switches to exponential notation, so the drivers' output format is built
// here from the language's scientific rendering instead.

/// `printf("%g")` semantics: six significant digits, trailing zeros stripped,
/// exponential notation when the decimal exponent is < -4 or >= 6.
pub fn format_g(value: f64) -> String {
    format_with_significant_digits(value, Some(6))
}

/// Full-precision counterpart used for results: the minimum number of
/// significant digits that round-trips the binary64 value, with the
/// fixed/exponential switch at exponent 17 (the role `%.17g` plays in C).
pub fn format_g_full(value: f64) -> String {
    format_with_significant_digits(value, None)
}

fn format_with_significant_digits(value: f64, significant_digits: Option<usize>) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    // Rust's scientific rendering carries the decimal exponent directly;
    // `{:e}` with no precision emits the shortest round-trip digit string.
    let rendered = match significant_digits {
        Some(count) => format!("{:.*e}", count - 1, value),
        None => format!("{:e}", value),
    };
    let (negative, mut digits, exponent) = split_scientific(&rendered);
    trim_trailing_zeros(&mut digits);
    let exponent_threshold = significant_digits.unwrap_or(17) as i32;
    assemble(negative, &digits, exponent, exponent_threshold)
}

fn split_scientific(rendered: &str) -> (bool, String, i32) {
    let mut parts = rendered.splitn(2, 'e');
    let mantissa = parts.next().expect("scientific rendering of a finite value");
    let exponent = parts.next().expect("scientific rendering of a finite value");
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let exponent: i32 = exponent.parse().expect("decimal exponent");
    (negative, digits, exponent)
}

fn trim_trailing_zeros(digits: &mut String) {
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
}

fn assemble(negative: bool, digits: &str, exponent: i32, exponent_threshold: i32) -> String {
    let sign = if negative { "-" } else { "" };
    if exponent < -4 || exponent >= exponent_threshold {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits.to_owned()
        };
        // C pads the exponent field to two digits and always signs it.
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exponent_sign, exponent.abs())
    } else {
        let point = exponent + 1; // digits left of the decimal point
        if point <= 0 {
            format!("{}0.{}{}", sign, "0".repeat((-point) as usize), digits)
        } else if point as usize >= digits.len() {
            format!("{}{}{}", sign, digits, "0".repeat(point as usize - digits.len()))
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{}{}.{}", sign, whole, fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_g, format_g_full};

    #[test]
    fn test_format_g_demo_inputs() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(2.0), "2");
        assert_eq!(format_g(9.0), "9");
        assert_eq!(format_g(0.25), "0.25");
        assert_eq!(format_g(1e-12), "1e-12");
        assert_eq!(format_g(1e12), "1e+12");
        assert_eq!(format_g(-4.0), "-4");
    }

    #[test]
    fn test_format_g_fixed_exponential_switch() {
        // fixed up to six significant digits, exponential beyond
        assert_eq!(format_g(123456.0), "123456");
        assert_eq!(format_g(1234567.0), "1.23457e+06");
        // fixed down to exponent -4, exponential below
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(0.00001), "1e-05");
        assert_eq!(format_g(1.5e-7), "1.5e-07");
    }

    #[test]
    fn test_format_g_general_values() {
        assert_eq!(format_g(123.456), "123.456");
        assert_eq!(format_g(0.1), "0.1");
        assert_eq!(format_g(-0.5), "-0.5");
        assert_eq!(format_g(1e100), "1e+100");
    }

    #[test]
    fn test_format_g_full_round_trips_shortest_digits() {
        assert_eq!(format_g_full(1.414213562373095), "1.414213562373095");
        assert_eq!(format_g_full(1.9999999999999996), "1.9999999999999996");
        assert_eq!(format_g_full(3.0), "3");
        assert_eq!(format_g_full(0.5), "0.5");
        assert_eq!(format_g_full(12345.6789), "12345.6789");
        assert_eq!(format_g_full(-2.5), "-2.5");
    }

    #[test]
    fn test_format_g_full_exponent_switch() {
        assert_eq!(format_g_full(1000000.0), "1000000");
        assert_eq!(format_g_full(1e12), "1000000000000");
        assert_eq!(format_g_full(1e17), "1e+17");
        assert_eq!(
            format_g_full(1.0000000000000052e-06),
            "1.0000000000000052e-06"
        );
        assert_eq!(
            format_g_full(1.0000000000000105e-12),
            "1.0000000000000105e-12"
        );
    }
}
