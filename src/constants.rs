//! Collection of public constants for XRPL.

use alloc::string::String;
use alloc::string::ToString;
use strum_macros::EnumIter;

/// Regular expression for determining ISO currency codes.
pub const ISO_CURRENCY_REGEX: &str = r"^[A-Z0-9]{3}$";
/// Regular expression for determining hex currency codes.
pub const HEX_CURRENCY_REGEX: &str = r"^[A-F0-9]{40}$";

/// Length of an account id.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Value of `TickSize` that disables custom tick sizes for an account.
pub const DISABLE_TICK_SIZE: u32 = 0;
/// Maximum number of significant digits for an account's tick size.
pub const MAX_TICK_SIZE: u32 = 15;
/// Minimum number of significant digits for an account's tick size.
pub const MIN_TICK_SIZE: u32 = 3;
/// Maximum `TransferRate`, 100% (2x the billionths-denominated par rate).
pub const MAX_TRANSFER_RATE: u32 = 2_000_000_000;
/// Minimum `TransferRate` above the no-fee value, below which a rate is invalid.
pub const MIN_TRANSFER_RATE: u32 = 1_000_000_000;
/// `TransferRate` value reserved to mean "no fee", distinct from the 1.0x par rate.
pub const SPECIAL_CASE_TRANFER_RATE: u32 = 0;
/// Maximum length, in bytes, of the hex-encoded `Domain` field.
pub const MAX_DOMAIN_LENGTH: usize = 256;

/// Represents the supported cryptography algorithms.
#[derive(Debug, PartialEq, Clone, EnumIter)]
pub enum CryptoAlgorithm {
    ED25519,
    SECP256K1,
}

impl ToString for CryptoAlgorithm {
    /// Return the String representation of an algorithm.
    fn to_string(&self) -> String {
        match *self {
            CryptoAlgorithm::ED25519 => "ed25519".to_string(),
            CryptoAlgorithm::SECP256K1 => "secp256k1".to_string(),
        }
    }
}
