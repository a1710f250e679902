//! Data-driven field-inclusion metadata (§4.2, §9 redesign): a static table
//! of `(field name, inclusion rule)` per `LedgerEntryType`, plus one generic
//! extractor (`diff_fields`) that walks a table entry against the JSON shape
//! every `models::ledger::objects::*` struct already derives via `serde`.
//!
//! This replaces a hand-written "which fields go in the metadata" branch per
//! transaction type with a table the `StateTable` threads through uniformly,
//! mirroring the host-field accessor pattern used in the wasm-stdlib
//! example pack: field access is data, not bespoke code per object kind.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde_json::Value;

use crate::models::ledger::LedgerEntryType;

/// When a field belongs in transaction metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Always included if present on either side.
    Always,
    /// Only on `CreatedNode` (the field didn't exist before this transaction).
    Create,
    /// Included in `previousFields` on `ModifiedNode` when it changed.
    ChangeOrig,
    /// Included in `finalFields`/`newFields` when it changed or was created.
    ChangeNew,
    /// Only on `DeletedNode`'s `finalFields`.
    DeleteFinal,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    pub name: &'static str,
    pub inclusion: Inclusion,
}

const fn f(name: &'static str, inclusion: Inclusion) -> FieldMeta {
    FieldMeta { name, inclusion }
}

const ACCOUNT_ROOT_FIELDS: &[FieldMeta] = &[
    f("Account", Inclusion::Create),
    f("Balance", Inclusion::Always),
    f("Sequence", Inclusion::Always),
    f("OwnerCount", Inclusion::Always),
    f("Flags", Inclusion::ChangeNew),
    f("Domain", Inclusion::ChangeNew),
    f("RegularKey", Inclusion::ChangeNew),
];

const RIPPLE_STATE_FIELDS: &[FieldMeta] = &[
    f("Balance", Inclusion::Always),
    f("LowLimit", Inclusion::Always),
    f("HighLimit", Inclusion::Always),
    f("Flags", Inclusion::ChangeNew),
    f("LowNode", Inclusion::Create),
    f("HighNode", Inclusion::Create),
];

const OFFER_FIELDS: &[FieldMeta] = &[
    f("Account", Inclusion::Create),
    f("Sequence", Inclusion::Create),
    f("TakerGets", Inclusion::Always),
    f("TakerPays", Inclusion::Always),
    f("BookDirectory", Inclusion::Create),
    f("BookNode", Inclusion::Create),
    f("OwnerNode", Inclusion::Create),
    f("Expiration", Inclusion::ChangeNew),
];

const DIRECTORY_NODE_FIELDS: &[FieldMeta] = &[
    f("Owner", Inclusion::Create),
    f("RootIndex", Inclusion::Create),
    f("Indexes", Inclusion::Always),
    f("TakerGetsCurrency", Inclusion::Create),
    f("TakerGetsIssuer", Inclusion::Create),
    f("TakerPaysCurrency", Inclusion::Create),
    f("TakerPaysIssuer", Inclusion::Create),
];

const AMM_FIELDS: &[FieldMeta] = &[
    f("AMMAccount", Inclusion::Create),
    f("Asset", Inclusion::Create),
    f("Asset2", Inclusion::Create),
    f("LPTokenBalance", Inclusion::Always),
    f("TradingFee", Inclusion::ChangeNew),
    f("AuctionSlot", Inclusion::ChangeNew),
    f("VoteSlots", Inclusion::ChangeNew),
];

/// The field table for one ledger-entry kind. Entry types with no apply-time
/// mutation path in this crate (e.g. `FeeSettings`) fall back to an empty
/// table: they still round-trip through `LedgerView` untouched, they just
/// never contribute metadata fields beyond the common ones callers add by hand.
pub fn fields_for(entry_type: LedgerEntryType) -> &'static [FieldMeta] {
    match entry_type {
        LedgerEntryType::AccountRoot => ACCOUNT_ROOT_FIELDS,
        LedgerEntryType::RippleState => RIPPLE_STATE_FIELDS,
        LedgerEntryType::Offer => OFFER_FIELDS,
        LedgerEntryType::DirectoryNode => DIRECTORY_NODE_FIELDS,
        LedgerEntryType::AMM => AMM_FIELDS,
        _ => &[],
    }
}

/// Walks `fields_for(entry_type)` against the JSON shape of `original`/
/// `current` (at most one of which is `None`, for a create or a delete) and
/// returns the fields that belong in this node's metadata, per each field's
/// [`Inclusion`] rule.
pub fn diff_fields(
    entry_type: LedgerEntryType,
    original: Option<&Value>,
    current: Option<&Value>,
) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    for meta in fields_for(entry_type) {
        let orig_v = original.and_then(|o| o.get(meta.name));
        let cur_v = current.and_then(|c| c.get(meta.name));
        let changed = orig_v != cur_v;
        let include = match meta.inclusion {
            Inclusion::Always => orig_v.is_some() || cur_v.is_some(),
            Inclusion::Create => original.is_none() && cur_v.is_some(),
            Inclusion::ChangeOrig => original.is_some() && changed && orig_v.is_some(),
            Inclusion::ChangeNew => cur_v.is_some() && (original.is_none() || changed),
            Inclusion::DeleteFinal => current.is_none() && orig_v.is_some(),
        };
        if include {
            if let Some(v) = cur_v.or(orig_v) {
                out.insert(meta.name.to_string(), v.clone());
            }
        }
    }
    out
}

/// The subset of `diff_fields`'s result that belongs in `previousFields`:
/// fields whose `ChangeOrig`/`Always` rule fired and whose value actually
/// differs between `original` and `current`.
pub fn previous_fields(
    entry_type: LedgerEntryType,
    original: &Value,
    current: &Value,
) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    for meta in fields_for(entry_type) {
        if !matches!(meta.inclusion, Inclusion::Always | Inclusion::ChangeOrig) {
            continue;
        }
        let orig_v = original.get(meta.name);
        let cur_v = current.get(meta.name);
        if orig_v != cur_v {
            if let Some(v) = orig_v {
                out.insert(meta.name.to_string(), v.clone());
            }
        }
    }
    out
}
