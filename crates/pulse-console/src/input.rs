//! Reading operands out of text fields.

/// Parse the longest numeric prefix of `raw`, like a browser's
/// `parseFloat`.
///
/// Leading whitespace is skipped and trailing garbage ignored
/// (`"12px"` is `12`). Returns `NaN` when no number starts the string.
pub fn parse_float(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let unsigned = bytes.get(sign_len..).unwrap_or_default();
    if unsigned.starts_with(b"Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(unsigned);
    let mut len = int_digits;
    let mut frac_digits = 0;
    if unsigned.get(len) == Some(&b'.') {
        frac_digits = unsigned.get(len.saturating_add(1)..).map_or(0, count_digits);
        len = len.saturating_add(1).saturating_add(frac_digits);
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(unsigned.get(len), Some(b'e' | b'E')) {
        let exp_start = len.saturating_add(1);
        let exp_sign_len = usize::from(matches!(unsigned.get(exp_start), Some(b'+' | b'-')));
        let digits_start = exp_start.saturating_add(exp_sign_len);
        let exp_digits = unsigned.get(digits_start..).map_or(0, count_digits);
        if exp_digits > 0 {
            len = digits_start.saturating_add(exp_digits);
        }
    }

    text.get(..sign_len.saturating_add(len))
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
