//! Formatting of numbers for display.

/// Returns true if the given number is small or large enough that it should be formatted in
/// scientific notation.
pub fn should_use_scientific(n: f64) -> bool {
    let abs = n.abs();
    n.is_finite() && n != 0.0 && (abs < 1e-6 || abs >= 1e16)
}

/// Formats a number the way results are shown to the user.
///
/// Integral values have no fractional part (`2`, not `2.0`), very small or very large values are
/// written in scientific notation, and negative zero is written as `0`.
///
/// ```
/// use symcalc_compute::numerical::fmt::fmt_number;
///
/// assert_eq!(fmt_number(2.0), "2");
/// assert_eq!(fmt_number(0.25), "0.25");
/// assert_eq!(fmt_number(-1.5e20), "-1.5e20");
/// ```
pub fn fmt_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        format!("{}inf", if n.is_sign_negative() { "-" } else { "" })
    } else if n == 0.0 {
        "0".to_string()
    } else if should_use_scientific(n) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}
