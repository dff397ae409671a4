use super::rounding::{is_odd, pow10};
use super::MpReal;
use crate::algebra::RoundingMode;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::cmp::Ordering;

/// Decimal scientific representation `±d.ddd × 10^exponent` of an
/// [`MpReal`], rounded to a fixed number of significant digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalRepr {
    pub negative: bool,
    /// significant digits, the first one nonzero unless the value is zero
    pub digits: String,
    pub exponent: i64,
}

impl DecimalRepr {
    /// Formats as `d.dddE+xxx`, with the exponent sign always present
    /// and the exponent zero-padded to at least `exp_width` digits.
    pub fn to_scientific(&self, e: char, exp_width: usize) -> String {
        let mut out = String::with_capacity(self.digits.len() + exp_width + 4);
        if self.negative {
            out.push('-');
        }
        let (lead, rest) = self.digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push(e);
        out.push(if self.exponent < 0 { '-' } else { '+' });
        out.push_str(&format!(
            "{:0>width$}",
            self.exponent.unsigned_abs(),
            width = exp_width
        ));
        out
    }
}

impl MpReal {
    /// Decimal representation with `digits` digits after the leading one,
    /// rounded in direction `mode`.
    pub fn to_decimal(&self, digits: usize, mode: RoundingMode) -> DecimalRepr {
        let significant = digits as u32 + 1;
        if self.is_zero() {
            return DecimalRepr {
                negative: false,
                digits: "0".repeat(significant as usize),
                exponent: 0,
            };
        }

        let lower = pow10(significant - 1);
        let upper = pow10(significant);

        // |self| = num / den exactly
        let (mut num, mut den) = (self.mantissa.clone(), BigUint::one());
        if self.exponent >= 0 {
            num <<= self.exponent as u64;
        } else {
            den <<= (-self.exponent) as u64;
        }

        // estimate of floor(log10|self|), off by at most one
        let mut e10 =
            ((self.top_exponent() - 1) as f64 * std::f64::consts::LOG10_2).floor() as i64;

        loop {
            let p = significant as i64 - 1 - e10;
            let (n, d) = if p >= 0 {
                (&num * pow10(p as u32), den.clone())
            } else {
                (num.clone(), &den * pow10((-p) as u32))
            };
            let q = &n / &d;
            if q >= upper {
                e10 += 1;
                continue;
            }
            if q < lower {
                e10 -= 1;
                continue;
            }

            let r = n - &q * &d;
            let away = if r.is_zero() {
                false
            } else {
                match mode.directed_away(self.negative) {
                    Some(away) => away,
                    None => match (r << 1u32).cmp(&d) {
                        Ordering::Greater => true,
                        Ordering::Less => false,
                        Ordering::Equal => is_odd(&q),
                    },
                }
            };

            let mut q = q;
            if away {
                q += 1u32;
                if q == upper {
                    q = lower;
                    e10 += 1;
                }
            }

            return DecimalRepr {
                negative: self.negative,
                digits: q.to_str_radix(10),
                exponent: e10,
            };
        }
    }
}
