//! State Mutation Tracker (§4.2): per-entry state machine over a single
//! transaction's scope, threaded through a `LedgerView`, then committed and
//! turned into metadata (`AffectedNode`s) in one pass.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::engine::field_catalog;
use crate::engine::keylet::Keylet;
use crate::engine::ledger_view::LedgerView;
use crate::engine::result::EngineResult;
use crate::models::ledger::objects::LedgerEntry;
use crate::models::ledger::LedgerEntryType;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StateTableError {
    #[error("attempted to insert a ledger entry that already exists")]
    DuplicateInsert,
    #[error("attempted to modify or erase a ledger entry that isn't in the state table")]
    EntryNotFound,
    #[error("attempted to act on a ledger entry that was already erased in this transaction")]
    AlreadyErased,
}

impl StateTableError {
    pub fn result(&self) -> EngineResult {
        EngineResult::TefInternal
    }
}

/// A cached entry's lifecycle within one transaction's `StateTable` scope,
/// exactly the four states named in the design: `Cache` (read, unmodified),
/// `Insert` (newly created), `Modify` (existing, changed), `Erase` (removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Cache,
    Insert,
    Modify,
    Erase,
}

#[derive(Debug, Clone)]
struct CachedEntry {
    entry_type: LedgerEntryType,
    original: Option<LedgerEntry<'static>>,
    current: Option<LedgerEntry<'static>>,
    state: EntryState,
}

/// One entry's contribution to a transaction's metadata, rippled's
/// `AffectedNode` shape reduced to what this crate's field tables produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffectedNode {
    CreatedNode {
        ledger_entry_type: LedgerEntryType,
        ledger_index: [u8; 32],
        new_fields: BTreeMap<String, Value>,
    },
    ModifiedNode {
        ledger_entry_type: LedgerEntryType,
        ledger_index: [u8; 32],
        final_fields: BTreeMap<String, Value>,
        previous_fields: BTreeMap<String, Value>,
    },
    DeletedNode {
        ledger_entry_type: LedgerEntryType,
        ledger_index: [u8; 32],
        final_fields: BTreeMap<String, Value>,
    },
}

/// The mutation tracker for a single transaction's apply. Not `Sync` by
/// convention: it assumes single-owner access for the duration of one
/// transaction (§6) and performs no internal locking.
#[derive(Debug, Default)]
pub struct StateTable {
    entries: IndexMap<[u8; 32], CachedEntry>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an entry into the cache (state `Cache`) if not already tracked,
    /// and returns the current view of it.
    pub fn read(&mut self, view: &dyn LedgerView, keylet: &Keylet) -> Option<LedgerEntry<'static>> {
        if let Some(cached) = self.entries.get(&keylet.key) {
            return cached.current.clone();
        }
        let entry = view.read(keylet)?;
        self.entries.insert(
            keylet.key,
            CachedEntry {
                entry_type: keylet.entry_type,
                original: Some(entry.clone()),
                current: Some(entry.clone()),
                state: EntryState::Cache,
            },
        );
        Some(entry)
    }

    pub fn exists(&mut self, view: &dyn LedgerView, keylet: &Keylet) -> bool {
        self.read(view, keylet).is_some()
    }

    /// Tracks a brand-new ledger entry. Fails if this keylet is already
    /// tracked and not itself the result of a same-transaction erase.
    pub fn insert(&mut self, keylet: Keylet, entry: LedgerEntry<'static>) -> Result<(), StateTableError> {
        log::trace!("state_table: insert {:?} {:02x?}", keylet.entry_type, &keylet.key[..4]);
        match self.entries.get_mut(&keylet.key) {
            None => {
                self.entries.insert(
                    keylet.key,
                    CachedEntry {
                        entry_type: keylet.entry_type,
                        original: None,
                        current: Some(entry),
                        state: EntryState::Insert,
                    },
                );
                Ok(())
            }
            Some(cached) if cached.state == EntryState::Erase && cached.original.is_none() => {
                // Inserted then erased then re-inserted within one transaction:
                // collapses back to a fresh Insert.
                cached.current = Some(entry);
                cached.state = EntryState::Insert;
                Ok(())
            }
            Some(_) => Err(StateTableError::DuplicateInsert),
        }
    }

    /// Replaces the current value of a tracked entry. The entry must have
    /// been `read` (or `insert`ed) earlier in this transaction.
    pub fn modify(&mut self, keylet: &Keylet, entry: LedgerEntry<'static>) -> Result<(), StateTableError> {
        log::trace!("state_table: modify {:?} {:02x?}", keylet.entry_type, &keylet.key[..4]);
        let cached = self
            .entries
            .get_mut(&keylet.key)
            .ok_or(StateTableError::EntryNotFound)?;
        if cached.state == EntryState::Erase {
            return Err(StateTableError::AlreadyErased);
        }
        cached.current = Some(entry);
        if cached.state == EntryState::Cache {
            cached.state = EntryState::Modify;
        }
        Ok(())
    }

    /// Marks a tracked entry for deletion. An `Insert` within the same
    /// transaction collapses to nothing (never reaches the view); anything
    /// else transitions to `Erase`.
    pub fn erase(&mut self, keylet: &Keylet) -> Result<(), StateTableError> {
        log::trace!("state_table: erase {:?} {:02x?}", keylet.entry_type, &keylet.key[..4]);
        let cached = self
            .entries
            .get_mut(&keylet.key)
            .ok_or(StateTableError::EntryNotFound)?;
        if cached.state == EntryState::Erase {
            return Err(StateTableError::AlreadyErased);
        }
        if cached.state == EntryState::Insert {
            cached.current = None;
            cached.original = None;
            cached.state = EntryState::Erase;
        } else {
            cached.current = None;
            cached.state = EntryState::Erase;
        }
        Ok(())
    }

    /// Threads every tracked change into `view` (commit phase) and returns
    /// the metadata rows describing what happened, skipping entries that
    /// were only read (`Cache`) or that were inserted-then-erased in the
    /// same transaction (no net effect).
    pub fn apply(self, view: &mut dyn LedgerView) -> Vec<AffectedNode> {
        log::debug!("state_table: committing {} tracked entries", self.entries.len());
        let mut nodes = Vec::new();
        for (key, cached) in self.entries {
            let keylet = Keylet {
                entry_type: cached.entry_type,
                key,
            };
            match cached.state {
                EntryState::Cache => {}
                EntryState::Insert => {
                    if let Some(current) = &cached.current {
                        view.insert(keylet, current.clone());
                        let current_json = serde_json::to_value(current).unwrap_or(Value::Null);
                        nodes.push(AffectedNode::CreatedNode {
                            ledger_entry_type: cached.entry_type,
                            ledger_index: key,
                            new_fields: field_catalog::diff_fields(
                                cached.entry_type,
                                None,
                                Some(&current_json),
                            ),
                        });
                    }
                }
                EntryState::Modify => {
                    if let (Some(original), Some(current)) = (&cached.original, &cached.current) {
                        view.update(keylet, current.clone());
                        let original_json = serde_json::to_value(original).unwrap_or(Value::Null);
                        let current_json = serde_json::to_value(current).unwrap_or(Value::Null);
                        nodes.push(AffectedNode::ModifiedNode {
                            ledger_entry_type: cached.entry_type,
                            ledger_index: key,
                            final_fields: field_catalog::diff_fields(
                                cached.entry_type,
                                Some(&original_json),
                                Some(&current_json),
                            ),
                            previous_fields: field_catalog::previous_fields(
                                cached.entry_type,
                                &original_json,
                                &current_json,
                            ),
                        });
                    }
                }
                EntryState::Erase => {
                    if let Some(original) = &cached.original {
                        view.erase(&keylet);
                        let original_json = serde_json::to_value(original).unwrap_or(Value::Null);
                        nodes.push(AffectedNode::DeletedNode {
                            ledger_entry_type: cached.entry_type,
                            ledger_index: key,
                            final_fields: field_catalog::diff_fields(
                                cached.entry_type,
                                Some(&original_json),
                                None,
                            ),
                        });
                    }
                }
            }
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::keylet;
    use crate::engine::ledger_view::MemoryLedgerView;
    use crate::models::ledger::objects::{AccountRoot, LedgerEntryType as LType};
    use crate::models::Amount;

    fn account_root(balance: &str, sequence: u32) -> LedgerEntry<'static> {
        LedgerEntry::AccountRoot(AccountRoot {
            ledger_entry_type: LType::AccountRoot,
            flags: Vec::new(),
            index: "".into(),
            account: "rAlice".into(),
            owner_count: 0,
            previous_txn_id: "".into(),
            previous_txn_lgr_seq: 0,
            sequence,
            account_txn_id: None,
            balance: Some(Amount::XRPAmount(balance.into())),
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
    fn insert_then_apply_produces_created_node() {
        let mut view = MemoryLedgerView::new();
        let mut table = StateTable::new();
        let key = keylet::account(&[1; 20]);
        table.insert(key, account_root("1000000", 1)).unwrap();
        let nodes = table.apply(&mut view);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], AffectedNode::CreatedNode { .. }));
        assert!(view.exists(&key));
    }

    #[test]
    fn read_then_modify_produces_modified_node_with_previous_fields() {
        let mut view = MemoryLedgerView::new();
        let key = keylet::account(&[1; 20]);
        view.insert(key, account_root("1000000", 1));

        let mut table = StateTable::new();
        table.read(&view, &key);
        table.modify(&key, account_root("900000", 1)).unwrap();
        let nodes = table.apply(&mut view);

        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            AffectedNode::ModifiedNode {
                previous_fields,
                final_fields,
                ..
            } => {
                assert_eq!(previous_fields.get("Balance"), Some(&serde_json::json!("1000000")));
                assert_eq!(final_fields.get("Balance"), Some(&serde_json::json!("900000")));
            }
            other => panic!("expected ModifiedNode, got {other:?}"),
        }
    }

    #[test]
    fn insert_then_erase_in_same_transaction_cancels_out() {
        let mut view = MemoryLedgerView::new();
        let mut table = StateTable::new();
        let key = keylet::account(&[1; 20]);
        table.insert(key, account_root("1000000", 1)).unwrap();
        table.erase(&key).unwrap();
        let nodes = table.apply(&mut view);
        assert!(nodes.is_empty());
        assert!(!view.exists(&key));
    }

    #[test]
    fn read_then_erase_produces_deleted_node() {
        let mut view = MemoryLedgerView::new();
        let key = keylet::account(&[1; 20]);
        view.insert(key, account_root("1000000", 1));

        let mut table = StateTable::new();
        table.read(&view, &key);
        table.erase(&key).unwrap();
        let nodes = table.apply(&mut view);

        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], AffectedNode::DeletedNode { .. }));
        assert!(!view.exists(&key));
    }

    #[test]
    fn cache_only_reads_produce_no_metadata() {
        let mut view = MemoryLedgerView::new();
        let key = keylet::account(&[1; 20]);
        view.insert(key, account_root("1000000", 1));

        let mut table = StateTable::new();
        table.read(&view, &key);
        let nodes = table.apply(&mut view);
        assert!(nodes.is_empty());
    }

    #[test]
    fn modify_on_untracked_entry_fails() {
        let mut table = StateTable::new();
        let key = keylet::account(&[9; 20]);
        assert_eq!(
            table.modify(&key, account_root("1", 1)).unwrap_err(),
            StateTableError::EntryNotFound
        );
    }
}
