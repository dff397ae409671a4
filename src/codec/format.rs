use super::CodecSettings;
use crate::algebra::{FloatT, Interval, MpReal, RoundingMode};

// convert a string in LowerExp display format into one that
// 1) uses the exponent marker `e`,
// 2) always has a sign after the exponent, and
// 3) has at least `width` digits in the exponent.
// Strings without an exponent are returned unchanged.

pub(crate) fn exp_str_reformat(thestr: &str, e: char, width: usize) -> String {
    let Some(eidx) = thestr.find(|c| c == 'e' || c == 'E') else {
        return thestr.to_string();
    };
    let (mantissa, exp) = thestr.split_at(eidx);
    let exp = &exp[1..];
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp.strip_prefix('+').unwrap_or(exp)),
    };
    format!("{mantissa}{e}{sign}{digits:0>width$}")
}

pub(crate) fn format_float<T: FloatT>(v: T, settings: &CodecSettings) -> String {
    let digits = settings.float_digits;
    match settings.float_notation {
        super::FloatNotation::Fixed => format!("{v:.digits$}"),
        super::FloatNotation::Scientific => {
            exp_str_reformat(&format!("{v:.digits$e}"), 'E', settings.exponent_width)
        }
    }
}

pub(crate) fn format_mpreal(v: &MpReal, digits: usize, mode: RoundingMode, width: usize) -> String {
    v.to_decimal(digits, mode).to_scientific('E', width)
}

pub(crate) fn format_interval(v: &Interval, settings: &CodecSettings) -> String {
    let digits = settings.interval_digits;
    let width = settings.exponent_width;
    format!(
        "[{} , {}]   width = {}",
        format_mpreal(v.lower(), digits, RoundingMode::Down, width),
        format_mpreal(v.upper(), digits, RoundingMode::Up, width),
        format_mpreal(&v.width(), digits, RoundingMode::Up, width),
    )
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(exp_str_reformat("1.5e0", 'E', 3), "1.5E+000");
    assert_eq!(exp_str_reformat("1.5e-7", 'E', 3), "1.5E-007");
    assert_eq!(exp_str_reformat("-2e123", 'e', 2), "-2e+123");
    assert_eq!(exp_str_reformat("3.25E+4", 'E', 1), "3.25E+4");
    assert_eq!(exp_str_reformat("12.5", 'E', 3), "12.5");
}
