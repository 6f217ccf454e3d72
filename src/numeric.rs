//! Extraction of a signed magnitude from a formatted number such as
//! `"$1,234.50"` or `"-12 %"`.

/// Parse the numeric value of a display string.
///
/// Every character that isn't an ASCII digit, a minus sign or a decimal point
/// is stripped first. The longest leading number of the remainder (an
/// optional leading `-`, digits and at most one decimal point) is then
/// parsed. Anything that doesn't yield a number evaluates to `0.0`: a
/// direction must always be derivable, and "no movement" is the neutral
/// choice. Digit runs too long for an `f64` saturate to infinity.
///
/// ```
/// use calligraph::parse_magnitude;
///
/// assert_eq!(parse_magnitude("$1,234.50"), 1234.5);
/// assert_eq!(parse_magnitude("-€12"), -12.0);
/// assert_eq!(parse_magnitude("n/a"), 0.0);
/// ```
#[must_use]
pub fn parse_magnitude(text: &str) -> f64 {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    let literal = leading_number(&stripped);
    literal.parse::<f64>().unwrap_or(0.0)
}

/// The longest prefix of `text` shaped like `-?\d*(\.\d*)?` that holds at
/// least one digit, or an empty string when there's none.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digit_count = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        digit_count += fraction_end - fraction_start;
        end = fraction_end;
    }

    if digit_count == 0 { "" } else { &text[..end] }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("42", 42.0 ; "plain integer")]
    #[test_case("$9.00", 9.0 ; "currency")]
    #[test_case("$10.00", 10.0 ; "currency with more digits")]
    #[test_case("1,000,000", 1_000_000.0 ; "thousands separators")]
    #[test_case("-3.5", -3.5 ; "negative")]
    #[test_case("$-3.5", -3.5 ; "negative after symbol")]
    #[test_case(".5", 0.5 ; "leading decimal point")]
    #[test_case("5.", 5.0 ; "trailing decimal point")]
    #[test_case("1.2.3", 1.2 ; "second decimal point ends the number")]
    #[test_case("5-3", 5.0 ; "inner minus ends the number")]
    #[test_case("1e5", 15.0 ; "exponent letters are stripped")]
    #[test_case("", 0.0 ; "empty")]
    #[test_case("-", 0.0 ; "lonely minus")]
    #[test_case(".", 0.0 ; "lonely decimal point")]
    #[test_case("--5", 0.0 ; "double minus")]
    #[test_case("hello", 0.0 ; "no digits")]
    fn test_parse_magnitude(text: &str, expected: f64) {
        assert_eq!(parse_magnitude(text), expected);
    }

    #[test_case(&"9".repeat(400), f64::INFINITY ; "overflow saturates")]
    #[test_case(&format!("-{}", "9".repeat(400)), f64::NEG_INFINITY ; "negative overflow saturates")]
    fn test_parse_overflow(text: &str, expected: f64) {
        assert_eq!(parse_magnitude(text), expected);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("-12.5-3"), "-12.5");
        assert_eq!(leading_number("-.5"), "-.5");
        assert_eq!(leading_number("-."), "");
    }
}
