//! The `LedgerView` trait (§4.1): the narrow boundary between this crate's
//! apply logic and whatever storage/consensus engine the host actually runs.
//! Binary wire format, networking and node storage stay the host's problem
//! (§1 non-goals) — this crate only needs read/write access to ledger-entry
//! bytes keyed by `Keylet`.
//!
//! `MemoryLedgerView` is the in-memory reference implementation used by the
//! engine's own tests and by `tests/engine/scenarios.rs`; it doubles as a
//! minimal host-adapter reference.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::engine::keylet::Keylet;
use crate::models::ledger::objects::LedgerEntry;

/// Read/write access to one ledger's worth of state, keyed by [`Keylet`].
///
/// `for_each` must present a snapshot for the duration of a single
/// transaction's apply — a safety contract documented at the trait level
/// rather than enforced by the type system, since the host's concurrency
/// story is out of scope (§1, §6).
pub trait LedgerView {
    fn read(&self, keylet: &Keylet) -> Option<LedgerEntry<'static>>;

    fn exists(&self, keylet: &Keylet) -> bool {
        self.read(keylet).is_some()
    }

    fn insert(&mut self, keylet: Keylet, entry: LedgerEntry<'static>);

    fn update(&mut self, keylet: Keylet, entry: LedgerEntry<'static>);

    fn erase(&mut self, keylet: &Keylet);

    /// Visit every entry currently in the view. Order is unspecified.
    fn for_each(&self, visit: &mut dyn FnMut(&Keylet, &LedgerEntry<'static>));

    /// Total drops destroyed so far via transaction fees (rippled tracks this
    /// per-ledger to keep total XRP in circulation auditable).
    fn drops_destroyed(&self) -> i64;

    fn adjust_drops_destroyed(&mut self, delta: i64);
}

/// A plain in-memory `LedgerView`, suitable as a test double or as a
/// starting point for a host that hasn't built real ledger storage yet.
#[derive(Debug, Default)]
pub struct MemoryLedgerView {
    entries: HashMap<[u8; 32], LedgerEntry<'static>>,
    drops_destroyed: i64,
}

impl MemoryLedgerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries of one ledger-entry kind, for test assertions and for
    /// scan-based book crossing (§1 non-goals: indexed book lookup is not
    /// required, scanning is acceptable).
    pub fn entries(&self) -> Vec<(&[u8; 32], &LedgerEntry<'static>)> {
        self.entries.iter().collect()
    }
}

impl LedgerView for MemoryLedgerView {
    fn read(&self, keylet: &Keylet) -> Option<LedgerEntry<'static>> {
        self.entries.get(&keylet.key).cloned()
    }

    fn insert(&mut self, keylet: Keylet, entry: LedgerEntry<'static>) {
        self.entries.insert(keylet.key, entry);
    }

    fn update(&mut self, keylet: Keylet, entry: LedgerEntry<'static>) {
        self.entries.insert(keylet.key, entry);
    }

    fn erase(&mut self, keylet: &Keylet) {
        self.entries.remove(&keylet.key);
    }

    fn for_each(&self, visit: &mut dyn FnMut(&Keylet, &LedgerEntry<'static>)) {
        for (key, entry) in self.entries.iter() {
            let keylet = Keylet {
                entry_type: entry_type_of(entry),
                key: *key,
            };
            visit(&keylet, entry);
        }
    }

    fn drops_destroyed(&self) -> i64 {
        self.drops_destroyed
    }

    fn adjust_drops_destroyed(&mut self, delta: i64) {
        self.drops_destroyed += delta;
    }
}

fn entry_type_of(entry: &LedgerEntry<'static>) -> crate::models::ledger::LedgerEntryType {
    use crate::models::ledger::LedgerEntryType as T;
    match entry {
        LedgerEntry::AccountRoot(_) => T::AccountRoot,
        LedgerEntry::Amendments(_) => T::Amendments,
        LedgerEntry::AMM(_) => T::AMM,
        LedgerEntry::Check(_) => T::Check,
        LedgerEntry::DepositPreauth(_) => T::DepositPreauth,
        LedgerEntry::DirectoryNode(_) => T::DirectoryNode,
        LedgerEntry::Escrow(_) => T::Escrow,
        LedgerEntry::FeeSettings(_) => T::FeeSettings,
        LedgerEntry::LedgerHashes(_) => T::LedgerHashes,
        LedgerEntry::NegativeUNL(_) => T::NegativeUNL,
        LedgerEntry::Offer(_) => T::Offer,
        LedgerEntry::PayChannel(_) => T::PayChannel,
        LedgerEntry::RippleState(_) => T::RippleState,
        LedgerEntry::SignerList(_) => T::SignerList,
        LedgerEntry::Ticket(_) => T::Ticket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::keylet;
    use crate::models::ledger::objects::{AccountRoot, LedgerEntryType};
    use alloc::borrow::Cow;

    fn account_root(account_id: Cow<'static, str>, balance: &str) -> LedgerEntry<'static> {
        LedgerEntry::AccountRoot(AccountRoot {
            ledger_entry_type: LedgerEntryType::AccountRoot,
            flags: Vec::new(),
            index: Cow::Borrowed(""),
            account: account_id,
            owner_count: 0,
            previous_txn_id: Cow::Borrowed(""),
            previous_txn_lgr_seq: 0,
            sequence: 1,
            account_txn_id: None,
            balance: Some(crate::models::Amount::XRPAmount(balance.into())),
            burned_nftokens: None,
            domain: None,
            email_hash: None,
            message_key: None,
            minted_nftokens: None,
            nftoken_minter: None,
            regular_key: None,
            ticket_count: None,
            tick_size: None,
            transfer_rate: None,
            wallet_locator: None,
            wallet_size: None,
        })
    }

    #[test]
    fn insert_then_read_round_trips() {
        let mut view = MemoryLedgerView::new();
        let key = keylet::account(&[9; 20]);
        view.insert(key, account_root("rAlice".into(), "1000000"));
        assert!(view.exists(&key));
        assert!(view.read(&key).is_some());
    }

    #[test]
    fn erase_removes_the_entry() {
        let mut view = MemoryLedgerView::new();
        let key = keylet::account(&[9; 20]);
        view.insert(key, account_root("rAlice".into(), "1000000"));
        view.erase(&key);
        assert!(!view.exists(&key));
    }

    #[test]
    fn drops_destroyed_accumulates() {
        let mut view = MemoryLedgerView::new();
        view.adjust_drops_destroyed(10);
        view.adjust_drops_destroyed(15);
        assert_eq!(view.drops_destroyed(), 25);
    }
}
