//! Amount arithmetic (§4.3): drops (XRP, integer) and IOU (decimal) value
//! types layered on top of the teacher's wire-level amount types
//! (`models::amount::{XRPAmount, IssuedCurrencyAmount}`, `core::types::amount`).
//! Wire-canonical packing itself stays delegated to `core::types::amount`;
//! this module only adds the arithmetic an apply engine needs.

use alloc::string::ToString;
use core::str::FromStr;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::engine::error::EngineError;
use crate::models::amount::{IssuedCurrencyAmount, XRPAmount};

/// A whole number of drops (1/1,000,000 XRP), the native XRP unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Drops(pub i64);

impl Drops {
    pub const ZERO: Drops = Drops(0);

    pub fn checked_add(self, other: Drops) -> Result<Drops, EngineError> {
        self.0
            .checked_add(other.0)
            .map(Drops)
            .ok_or_else(|| EngineError::Internal("drops addition overflowed".to_string()))
    }

    pub fn checked_sub(self, other: Drops) -> Result<Drops, EngineError> {
        self.0
            .checked_sub(other.0)
            .map(Drops)
            .ok_or_else(|| EngineError::Internal("drops subtraction underflowed".to_string()))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl TryFrom<&XRPAmount<'_>> for Drops {
    type Error = EngineError;

    fn try_from(value: &XRPAmount<'_>) -> Result<Self, Self::Error> {
        value
            .0
            .parse::<i64>()
            .map(Drops)
            .map_err(|_| EngineError::Internal("malformed drops string".to_string()))
    }
}

impl From<Drops> for XRPAmount<'static> {
    fn from(value: Drops) -> Self {
        XRPAmount(alloc::borrow::Cow::Owned(value.0.to_string()))
    }
}

/// A single IOU balance/value, backed by `rust_decimal::Decimal` so
/// arithmetic is exact and deterministic across nodes rather than
/// floating-point. Rounding always uses banker's rounding
/// (`RoundingStrategy::MidpointNearestEven`) per the numeric-determinism
/// note (§5, §9): ties must resolve identically on every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IouAmount(Decimal);

impl IouAmount {
    pub const ZERO: IouAmount = IouAmount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn add(self, other: IouAmount) -> IouAmount {
        IouAmount(self.round(self.0 + other.0))
    }

    pub fn sub(self, other: IouAmount) -> IouAmount {
        IouAmount(self.round(self.0 - other.0))
    }

    pub fn neg(self) -> IouAmount {
        IouAmount(-self.0)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn compare(self, other: IouAmount) -> core::cmp::Ordering {
        self.0.cmp(&other.0)
    }

    /// Round to the 16 significant-digit precision XRPL IOU amounts carry on
    /// the wire, using banker's rounding so every node lands on the same tie.
    fn round(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(15, RoundingStrategy::MidpointNearestEven)
    }
}

impl TryFrom<&IssuedCurrencyAmount<'_>> for IouAmount {
    type Error = EngineError;

    fn try_from(value: &IssuedCurrencyAmount<'_>) -> Result<Self, Self::Error> {
        Decimal::from_str(&value.value)
            .map(IouAmount)
            .map_err(|_| EngineError::Internal("malformed issued currency value".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_round_trip_through_xrp_amount() {
        let amount: XRPAmount = "12345".into();
        let drops = Drops::try_from(&amount).unwrap();
        assert_eq!(drops, Drops(12345));
        let back: XRPAmount = drops.into();
        assert_eq!(back, amount);
    }

    #[test]
    fn drops_checked_sub_detects_underflow() {
        let a = Drops(i64::MIN);
        let b = Drops(1);
        assert!(a.checked_sub(b).is_err());
    }

    #[test]
    fn iou_addition_rounds_to_fifteen_fractional_digits() {
        let a = IouAmount::new(Decimal::from_str("1.00000000000000005").unwrap());
        let b = IouAmount::new(Decimal::ZERO);
        let sum = a.add(b);
        assert_eq!(sum.value(), Decimal::from_str("1.000000000000000").unwrap());
    }

    #[test]
    fn iou_negation_flips_sign_and_is_negative_detects_it() {
        let a = IouAmount::new(Decimal::from_str("5").unwrap());
        let neg = a.neg();
        assert!(neg.is_negative());
        assert!(!a.is_negative());
    }
}
