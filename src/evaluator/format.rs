const SIGNIFICANT_DIGITS: usize = 6;

/// Renders a number the way `print` shows it: `%g` with six significant
/// digits.
///
/// Trailing zeros are removed. Exponent form (`1e+06`, `1.5e-07`) is used
/// when the decimal exponent is below -4 or at least six.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Round to the significant digits first so 999999.5 lands on 1e+06
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value))
}

/// Renders the value of an interpolation site. Whole numbers that fit a
/// 32-bit integer print as that integer; everything else as `print` would.
pub fn format_interpolated(value: f64) -> String {
    if value == value.trunc() && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        return format!("{}", value as i32);
    }

    format_number(value)
}

fn trim_fraction(number: &str) -> String {
    if !number.contains('.') {
        return number.to_string();
    }

    number
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
