//! Canonical, integer-comparable offer quality (§4.6, §9 redesign): the
//! teacher crate's f64-based client-side rate helpers
//! (`models/amount`/`core::types::amount`) are not reused here, because
//! book crossing needs exact, order-preserving comparisons rather than
//! floating point. `Quality` packs a rate (`TakerPays / TakerGets`) into a
//! 64-bit (exponent, mantissa) pair in the same spirit as rippled's
//! canonical `STAmount` encoding: two qualities compare correctly with a
//! plain integer `<`/`>`, with no decimal division at comparison time.

use rust_decimal::Decimal;

use crate::engine::error::EngineError;

const MIN_MANTISSA: i128 = 1_000_000_000_000_000; // 10^15
const MAX_MANTISSA: i128 = 9_999_999_999_999_999; // 10^16 - 1
const EXPONENT_BIAS: i32 = 128;

/// A trade rate, ordered the same way the numeric ratio it encodes would be:
/// a smaller `Quality` means a better (cheaper) price for the taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u64);

impl Quality {
    /// `TakerPays / TakerGets`: how much the offer owner demands per unit
    /// delivered. Lower is a better deal for whoever is taking the offer.
    pub fn from_amounts(taker_pays: Decimal, taker_gets: Decimal) -> Result<Quality, EngineError> {
        if taker_gets.is_zero() {
            return Err(EngineError::Internal("quality undefined for a zero TakerGets".into()));
        }
        let rate = taker_pays / taker_gets;
        Ok(Quality(encode(rate)))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

fn encode(rate: Decimal) -> u64 {
    if rate.is_zero() {
        return 0;
    }
    let mut mantissa = rate.mantissa().unsigned_abs() as i128;
    let mut exponent = -(rate.scale() as i32);
    while mantissa > MAX_MANTISSA {
        mantissa /= 10;
        exponent += 1;
    }
    while mantissa != 0 && mantissa < MIN_MANTISSA {
        mantissa *= 10;
        exponent -= 1;
    }
    let exponent_byte = (exponent + EXPONENT_BIAS).clamp(0, 255) as u64;
    (exponent_byte << 56) | (mantissa as u64 & 0x00FF_FFFF_FFFF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn equal_rates_encode_equal() {
        let a = Quality::from_amounts(Decimal::from_str("2").unwrap(), Decimal::from_str("1").unwrap()).unwrap();
        let b = Quality::from_amounts(Decimal::from_str("4").unwrap(), Decimal::from_str("2").unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cheaper_rate_orders_lower() {
        let cheap = Quality::from_amounts(Decimal::from_str("1").unwrap(), Decimal::from_str("2").unwrap()).unwrap();
        let expensive = Quality::from_amounts(Decimal::from_str("2").unwrap(), Decimal::from_str("1").unwrap()).unwrap();
        assert!(cheap < expensive);
    }

    #[test]
    fn zero_taker_gets_is_rejected() {
        assert!(Quality::from_amounts(Decimal::from_str("1").unwrap(), Decimal::ZERO).is_err());
    }
}
