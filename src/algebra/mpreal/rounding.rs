use crate::algebra::RoundingMode;
use num_bigint::BigUint;
use num_traits::{One, Zero};

// All MpReal results pass through here.  The value being rounded is
//
//    (-1)^negative * (mantissa + tail) * 2^exponent
//
// where `tail` lies strictly inside (0,1) when `sticky` is set and is
// zero otherwise.  The returned pair is canonical: the mantissa has at
// most `bits` significant bits and no trailing zero bits.

pub(crate) fn round_mantissa(
    negative: bool,
    mut mantissa: BigUint,
    mut exponent: i64,
    sticky: bool,
    bits: u32,
    mode: RoundingMode,
) -> (BigUint, i64) {
    if mantissa.is_zero() && !sticky {
        return (mantissa, 0);
    }

    let bits = bits as u64;

    // make room for a guard bit so that the tail can be resolved
    // against the half-way point below
    let width = mantissa.bits();
    if sticky && width < bits + 2 {
        let pad = bits + 2 - width;
        mantissa <<= pad;
        exponent -= pad as i64;
    }

    let width = mantissa.bits();
    if width <= bits {
        // exact, sticky was handled above
        return normalize(mantissa, exponent);
    }

    let shift = width - bits;
    let mut kept = &mantissa >> shift;
    let discarded = mantissa - (&kept << shift);

    if discarded.is_zero() && !sticky {
        return normalize(kept, exponent + shift as i64);
    }

    let away = match mode.directed_away(negative) {
        Some(away) => away,
        None => {
            let half = BigUint::one() << (shift - 1);
            match discarded.cmp(&half) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => sticky || is_odd(&kept),
            }
        }
    };

    let mut shift = shift;
    if away {
        kept += 1u32;
        if kept.bits() > bits {
            // carried into a new power of two
            kept >>= 1u32;
            shift += 1;
        }
    }

    normalize(kept, exponent + shift as i64)
}

pub(crate) fn normalize(mantissa: BigUint, exponent: i64) -> (BigUint, i64) {
    match mantissa.trailing_zeros() {
        None => (mantissa, 0),
        Some(0) => (mantissa, exponent),
        Some(tz) => (mantissa >> tz, exponent + tz as i64),
    }
}

pub(crate) fn is_odd(x: &BigUint) -> bool {
    x.trailing_zeros() == Some(0)
}

pub(crate) fn pow10(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn test_exact_is_normalized() {
        let (m, e) = round_mantissa(false, big(12), 0, false, 8, RoundingMode::Nearest);
        assert_eq!((m, e), (big(3), 2));
    }

    #[test]
    fn test_nearest_ties_to_even() {
        // 0b1011 -> 3 bits: 0b101|1 is a tie, 101 is odd so round up to 110
        let (m, e) = round_mantissa(false, big(0b1011), 0, false, 3, RoundingMode::Nearest);
        assert_eq!((m, e), (big(3), 2));

        // 0b1001 -> 0b100|1 tie, 100 is even so stays
        let (m, e) = round_mantissa(false, big(0b1001), 0, false, 3, RoundingMode::Nearest);
        assert_eq!((m, e), (big(1), 3));
    }

    #[test]
    fn test_directed_modes() {
        // 7 = 0b111 at 2 bits lies between 6 and 8
        let down = round_mantissa(false, big(7), 0, false, 2, RoundingMode::Down);
        let up = round_mantissa(false, big(7), 0, false, 2, RoundingMode::Up);
        assert_eq!(down, (big(3), 1));
        assert_eq!(up, (big(1), 3));

        // negative values swap directions on the magnitude
        let down = round_mantissa(true, big(7), 0, false, 2, RoundingMode::Down);
        let up = round_mantissa(true, big(7), 0, false, 2, RoundingMode::Up);
        assert_eq!(down, (big(1), 3));
        assert_eq!(up, (big(3), 1));

        let tz = round_mantissa(true, big(7), 0, false, 2, RoundingMode::TowardZero);
        assert_eq!(tz, (big(3), 1));
    }

    #[test]
    fn test_sticky_tail() {
        // 4 + tail at 3 bits is representable only after rounding up
        let up = round_mantissa(false, big(4), 0, true, 3, RoundingMode::Up);
        let down = round_mantissa(false, big(4), 0, true, 3, RoundingMode::Down);
        let near = round_mantissa(false, big(4), 0, true, 3, RoundingMode::Nearest);
        assert_eq!(down, (big(1), 2));
        assert_eq!(near, (big(1), 2));
        // 4 + tail rounds up to the next 3-bit value above 4, i.e. 5
        assert_eq!(up, (big(5), 0));
    }
}
