use super::ParseError;
use crate::algebra::{pow10, MpReal, Precision, RoundingMode};
use num_bigint::BigUint;
use num_traits::Zero;
use std::cmp::Ordering;

/// Largest accepted decimal exponent magnitude in a literal.
pub const MAX_DECIMAL_EXPONENT: i64 = 20_000;

/// Exact value of a decimal literal, `(-1)^negative * digits * 10^exponent`.
///
/// Accepted grammar, after trimming surrounding whitespace:
///
/// ```text
/// [+-] digits [ . digits ] [ (e|E) [+-] digits ]
/// [+-] . digits [ (e|E) [+-] digits ]
/// ```
///
/// with at least one mantissa digit.
#[derive(Debug, Clone)]
pub struct ExactDecimal {
    negative: bool,
    digits: BigUint,
    exponent: i64,
}

impl ExactDecimal {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(ParseError::Empty(text.to_string()));
        }
        let invalid = || ParseError::InvalidNumber(text.to_string());
        let bytes = s.as_bytes();
        let mut i = 0;

        let mut negative = false;
        if let Some(&c) = bytes.first() {
            if c == b'+' || c == b'-' {
                negative = c == b'-';
                i += 1;
            }
        }

        let mut mantissa = String::with_capacity(bytes.len());
        let mut frac_digits: i64 = 0;
        let mut seen_point = false;
        while i < bytes.len() {
            match bytes[i] {
                c @ b'0'..=b'9' => {
                    mantissa.push(c as char);
                    if seen_point {
                        frac_digits += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            i += 1;
        }
        if mantissa.is_empty() {
            return Err(invalid());
        }

        let mut exponent: i64 = 0;
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            i += 1;
            let mut exp_negative = false;
            if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
                exp_negative = bytes[i] == b'-';
                i += 1;
            }
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if start == i {
                return Err(invalid());
            }
            let magnitude: i64 = s[start..i]
                .parse()
                .map_err(|_| ParseError::OutOfRange(text.to_string()))?;
            if magnitude > MAX_DECIMAL_EXPONENT {
                return Err(ParseError::OutOfRange(text.to_string()));
            }
            exponent = if exp_negative { -magnitude } else { magnitude };
        }

        if i != bytes.len() {
            return Err(invalid());
        }

        let digits = BigUint::parse_bytes(mantissa.as_bytes(), 10).ok_or_else(invalid)?;
        let negative = negative && !digits.is_zero();

        Ok(Self {
            negative,
            digits,
            exponent: exponent - frac_digits,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// The value rounded to `precision` in direction `mode`.
    pub fn to_mpreal(&self, precision: Precision, mode: RoundingMode) -> MpReal {
        if self.exponent >= 0 {
            let num = &self.digits * pow10(self.exponent as u32);
            MpReal::from_parts(self.negative, num, 0, false, precision, mode)
        } else {
            let den = pow10((-self.exponent) as u32);
            MpReal::from_ratio(self.negative, &self.digits, &den, 0, precision, mode)
        }
    }

    fn cmp_abs(&self, other: &Self) -> Ordering {
        let e = self.exponent.min(other.exponent);
        let a = &self.digits * pow10((self.exponent - e) as u32);
        let b = &other.digits * pow10((other.exponent - e) as u32);
        a.cmp(&b)
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prec() -> Precision {
        Precision::new(53).unwrap()
    }

    #[test]
    fn test_accepts_literals() {
        for s in ["1", "-1.5", "+0.25", ".5", "5.", "1e3", "1.5E-2", "  7  ", "-0"] {
            assert!(ExactDecimal::parse(s).is_ok(), "{s}");
        }
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(
            ExactDecimal::parse("   "),
            Err(ParseError::Empty("   ".to_string()))
        );
        for s in ["1.2.3", "1,5", "abc", "1e", "1e+", "--1", "1x", "inf", "NaN", ".", "-"] {
            assert_eq!(
                ExactDecimal::parse(s),
                Err(ParseError::InvalidNumber(s.to_string())),
                "{s}"
            );
        }
        assert_eq!(
            ExactDecimal::parse("1e99999"),
            Err(ParseError::OutOfRange("1e99999".to_string()))
        );
    }

    #[test]
    fn test_to_mpreal_matches_native() {
        for s in ["0.1", "1.1", "-2.75", "123456789.125", "3e-5", "6.02214076e23"] {
            let d = ExactDecimal::parse(s).unwrap();
            let x = d.to_mpreal(prec(), RoundingMode::Nearest);
            assert_eq!(x.to_f64(), s.parse::<f64>().unwrap(), "{s}");
        }
    }

    #[test]
    fn test_directed_bracket() {
        let d = ExactDecimal::parse("1.1").unwrap();
        let lo = d.to_mpreal(prec(), RoundingMode::Down);
        let hi = d.to_mpreal(prec(), RoundingMode::Up);
        assert!(lo < hi);
        assert_eq!(hi.to_f64() - lo.to_f64(), f64::EPSILON);

        // exactly representable values give a point
        let d = ExactDecimal::parse("0.5").unwrap();
        assert_eq!(
            d.to_mpreal(prec(), RoundingMode::Down),
            d.to_mpreal(prec(), RoundingMode::Up)
        );
    }

    #[test]
    fn test_ordering() {
        let v: Vec<ExactDecimal> = ["-2", "-1.5", "0", "-0.0", "0.001", "1e-2", "10"]
            .iter()
            .map(|s| ExactDecimal::parse(s).unwrap())
            .collect();
        assert!(v[0] < v[1]);
        assert!(v[1] < v[2]);
        assert_eq!(v[2], v[3]);
        assert!(v[3] < v[4]);
        assert!(v[4] < v[5]);
        assert!(v[5] < v[6]);
    }
}
