//! Keylet construction (§4.1): deterministic, hash-derived ledger-entry
//! indexes, one pure function per entry family.
//!
//! Every keylet is `SHA-512-Half(type_code_be || parts...)`, the same
//! hashing idiom the teacher crate already uses for signed-transaction
//! hashes (`models/transactions/mod.rs`'s `get_hash`) and for key
//! derivation (`core::keypairs::utils::sha512_first_half`).

use alloc::vec::Vec;

use crate::core::keypairs::utils::sha512_first_half;
use crate::models::ledger::LedgerEntryType;

/// A ledger-entry index together with the entry type it was built for.
/// `key` is what a `LedgerView` actually reads/writes by; `entry_type` lets
/// callers sanity-check what they got back without decoding the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keylet {
    pub entry_type: LedgerEntryType,
    pub key: [u8; 32],
}

impl Keylet {
    fn new(entry_type: LedgerEntryType, key: [u8; 32]) -> Self {
        Self { entry_type, key }
    }
}

/// `SHA-512-Half(type_code_be || parts...)`, the building block every
/// keylet family below is composed from (rippled's `indexHash`).
fn index_hash(entry_type: LedgerEntryType, parts: &[&[u8]]) -> [u8; 32] {
    let mut buf = Vec::new();
    buf.extend_from_slice(&entry_type.type_code().to_be_bytes());
    for part in parts {
        buf.extend_from_slice(part);
    }
    sha512_first_half(&buf)
}

/// The `AccountRoot` keylet for a 20-byte account ID.
pub fn account(account_id: &[u8; 20]) -> Keylet {
    Keylet::new(
        LedgerEntryType::AccountRoot,
        index_hash(LedgerEntryType::AccountRoot, &[account_id]),
    )
}

/// The `RippleState` keylet for a trust line. Account order doesn't matter
/// to the caller: the two IDs are canonicalized (lower-first) internally,
/// matching how rippled stores one `RippleState` object per unordered pair.
pub fn line(account_a: &[u8; 20], account_b: &[u8; 20], currency: &[u8]) -> Keylet {
    let (low, high) = if account_a <= account_b {
        (account_a, account_b)
    } else {
        (account_b, account_a)
    };
    Keylet::new(
        LedgerEntryType::RippleState,
        index_hash(LedgerEntryType::RippleState, &[low, high, currency]),
    )
}

/// The `Offer` keylet for an account's offer at a given `Sequence`.
pub fn offer(account_id: &[u8; 20], sequence: u32) -> Keylet {
    Keylet::new(
        LedgerEntryType::Offer,
        index_hash(LedgerEntryType::Offer, &[account_id, &sequence.to_be_bytes()]),
    )
}

/// The owner directory root for an account (its list of owned objects).
pub fn owner_dir(account_id: &[u8; 20]) -> Keylet {
    Keylet::new(
        LedgerEntryType::DirectoryNode,
        index_hash(LedgerEntryType::DirectoryNode, &[account_id]),
    )
}

/// The base index of the order book for `taker_pays -> taker_gets`, before a
/// quality is folded in. Matches rippled's `getBookBase`: the low 8 bytes are
/// reserved for the quality and zeroed here.
fn book_base(
    pays_currency: &[u8],
    pays_issuer: &[u8],
    gets_currency: &[u8],
    gets_issuer: &[u8],
) -> [u8; 32] {
    let mut hash = index_hash(
        LedgerEntryType::DirectoryNode,
        &[pays_currency, pays_issuer, gets_currency, gets_issuer],
    );
    for byte in hash.iter_mut().skip(24) {
        *byte = 0;
    }
    hash
}

/// The directory keylet for a specific quality level within an order book,
/// i.e. `book_base` with the low 8 bytes replaced by the 64-bit quality.
pub fn quality(
    pays_currency: &[u8],
    pays_issuer: &[u8],
    gets_currency: &[u8],
    gets_issuer: &[u8],
    quality_rate: u64,
) -> Keylet {
    let mut key = book_base(pays_currency, pays_issuer, gets_currency, gets_issuer);
    key[24..].copy_from_slice(&quality_rate.to_be_bytes());
    Keylet::new(LedgerEntryType::DirectoryNode, key)
}

/// The `DepositPreauth` keylet for an `(owner, authorized)` pair.
pub fn deposit_preauth(owner: &[u8; 20], authorized: &[u8; 20]) -> Keylet {
    Keylet::new(
        LedgerEntryType::DepositPreauth,
        index_hash(LedgerEntryType::DepositPreauth, &[owner, authorized]),
    )
}

/// The `AMM` keylet for an asset pair. Asset order doesn't matter: the
/// caller's two encoded assets are sorted byte-wise first, matching rippled's
/// canonical-order AMM keylet.
pub fn amm(asset_a: &[u8], asset_b: &[u8]) -> Keylet {
    let (first, second) = if asset_a <= asset_b {
        (asset_a, asset_b)
    } else {
        (asset_b, asset_a)
    };
    Keylet::new(LedgerEntryType::AMM, index_hash(LedgerEntryType::AMM, &[first, second]))
}
