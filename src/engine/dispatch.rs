//! Transaction Dispatch (§4.7): routes a transaction to its component engine
//! by type, then charges the base fee and bumps `Sequence` exactly once,
//! regardless of which engine handled it.
//!
//! The teacher crate carries no single tagged-sum transaction type —
//! `TransactionType` is just the discriminant each model struct embeds in
//! its own `CommonFields` — so [`EngineTransaction`] is the sum type this
//! engine actually routes on, covering the transaction types §7 lists as
//! External Interfaces. `AMMClawback` is named there too, but the teacher
//! crate has neither a `TransactionType::AMMClawback` variant nor an
//! `AMMClawback` model to carry, so it has no variant here either (see
//! `engine::amm`'s module doc).
//!
//! On anything but `tesSUCCESS`, the `StateTable` a component apply function
//! mutated is discarded outright — it may hold partially-applied leg
//! mutations (§4.5/§4.6 doc comments on `payment::apply`/`offer::apply_create`)
//! — and the fee/sequence bump runs against a fresh, empty `StateTable`
//! instead. `tec*` results still charge the fee this way; `tem*`/`tef*`/`ter*`
//! never reach the ledger at all, so no fee is charged and no entries change.

use alloc::vec::Vec;

use crate::core::addresscodec::decode_classic_address;
use crate::engine::amendments::AmendmentSet;
use crate::engine::amm;
use crate::engine::amount::Drops;
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::keylet;
use crate::engine::ledger_view::LedgerView;
use crate::engine::offer;
use crate::engine::payment;
use crate::engine::result::{EngineResult, ResultClass};
use crate::engine::state_table::{AffectedNode, StateTable};
use crate::engine::trust_line;
use crate::models::amount::Amount;
use crate::models::ledger::objects::LedgerEntry;
use crate::models::transactions::amm_bid::AMMBid;
use crate::models::transactions::amm_create::AMMCreate;
use crate::models::transactions::amm_delete::AMMDelete;
use crate::models::transactions::amm_deposit::AMMDeposit;
use crate::models::transactions::amm_vote::AMMVote;
use crate::models::transactions::amm_withdraw::AMMWithdraw;
use crate::models::transactions::offer_cancel::OfferCancel;
use crate::models::transactions::offer_create::OfferCreate;
use crate::models::transactions::payment::Payment;
use crate::models::transactions::trust_set::TrustSet;

/// Every transaction type this engine applies. Built and matched on by
/// `dispatch::apply`; a host assembles one of these from whatever wire
/// transaction it decoded before calling in.
pub enum EngineTransaction<'a> {
    Payment(Payment<'a>),
    OfferCreate(OfferCreate<'a>),
    OfferCancel(OfferCancel<'a>),
    TrustSet(TrustSet<'a>),
    AMMCreate(AMMCreate<'a>),
    AMMDeposit(AMMDeposit<'a>),
    AMMWithdraw(AMMWithdraw<'a>),
    AMMVote(AMMVote<'a>),
    AMMBid(AMMBid<'a>),
    AMMDelete(AMMDelete<'a>),
}

impl<'a> EngineTransaction<'a> {
    fn account(&self) -> &str {
        match self {
            Self::Payment(tx) => &tx.common_fields.account,
            Self::OfferCreate(tx) => &tx.common_fields.account,
            Self::OfferCancel(tx) => &tx.common_fields.account,
            Self::TrustSet(tx) => &tx.common_fields.account,
            Self::AMMCreate(tx) => &tx.common_fields.account,
            Self::AMMDeposit(tx) => &tx.common_fields.account,
            Self::AMMWithdraw(tx) => &tx.common_fields.account,
            Self::AMMVote(tx) => &tx.common_fields.account,
            Self::AMMBid(tx) => &tx.common_fields.account,
            Self::AMMDelete(tx) => &tx.common_fields.account,
        }
    }

    fn sequence(&self) -> Option<u32> {
        match self {
            Self::Payment(tx) => tx.common_fields.sequence,
            Self::OfferCreate(tx) => tx.common_fields.sequence,
            Self::OfferCancel(tx) => tx.common_fields.sequence,
            Self::TrustSet(tx) => tx.common_fields.sequence,
            Self::AMMCreate(tx) => tx.common_fields.sequence,
            Self::AMMDeposit(tx) => tx.common_fields.sequence,
            Self::AMMWithdraw(tx) => tx.common_fields.sequence,
            Self::AMMVote(tx) => tx.common_fields.sequence,
            Self::AMMBid(tx) => tx.common_fields.sequence,
            Self::AMMDelete(tx) => tx.common_fields.sequence,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Payment(_) => "Payment",
            Self::OfferCreate(_) => "OfferCreate",
            Self::OfferCancel(_) => "OfferCancel",
            Self::TrustSet(_) => "TrustSet",
            Self::AMMCreate(_) => "AMMCreate",
            Self::AMMDeposit(_) => "AMMDeposit",
            Self::AMMWithdraw(_) => "AMMWithdraw",
            Self::AMMVote(_) => "AMMVote",
            Self::AMMBid(_) => "AMMBid",
            Self::AMMDelete(_) => "AMMDelete",
        }
    }

    fn requires_amm(&self) -> bool {
        matches!(
            self,
            Self::AMMCreate(_)
                | Self::AMMDeposit(_)
                | Self::AMMWithdraw(_)
                | Self::AMMVote(_)
                | Self::AMMBid(_)
                | Self::AMMDelete(_)
        )
    }
}

/// What applying one transaction produced: the result code it earned, and
/// the metadata rows describing every ledger entry that changed because of
/// it (empty for anything that never reached the ledger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub result: EngineResult,
    pub affected_nodes: Vec<AffectedNode>,
}

fn account_id(address: &str) -> Result<[u8; 20], EngineError> {
    let bytes = decode_classic_address(address)
        .map_err(|e| EngineError::Internal(alloc::format!("malformed account address: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| EngineError::Internal(alloc::string::String::from("decoded account id was not 20 bytes")))
}

/// Subtracts `fee` from the sending account's XRP balance and advances its
/// `Sequence` by one. Runs against whatever `table` is handed in — either
/// the component apply's own table on success, or a fresh one otherwise —
/// so it's the only place a transaction's fee/sequence bookkeeping happens.
fn charge_fee_and_bump_sequence(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account_address: &str,
    sequence: u32,
    fee: Drops,
) -> Result<(), EngineError> {
    let id = account_id(account_address)?;
    let key = keylet::account(&id);
    let Some(LedgerEntry::AccountRoot(mut root)) = table.read(view, &key) else {
        return Err(EngineError::Internal(alloc::string::String::from(
            "fee-paying account vanished between apply and fee charge",
        )));
    };
    let balance = match &root.balance {
        Some(Amount::XRPAmount(amount)) => Drops::try_from(amount)?,
        _ => {
            return Err(EngineError::Internal(alloc::string::String::from(
                "AccountRoot.balance must be an XRP amount",
            )))
        }
    };
    let remaining = balance.checked_sub(fee).unwrap_or(Drops::ZERO);
    root.balance = Some(Amount::XRPAmount(remaining.into()));
    root.sequence = sequence.wrapping_add(1);
    table.modify(&key, LedgerEntry::AccountRoot(root))?;
    Ok(())
}

/// Applies one transaction: routes it to `payment`/`offer`/`trust_line`/`amm`
/// by type, then charges the base fee and bumps `Sequence` per the contract
/// above. `now` is the current ledger close time, needed only by
/// `AMMBid`'s auction-slot expiry check.
pub fn apply(
    view: &mut dyn LedgerView,
    config: &EngineConfig,
    now: u32,
    tx: &EngineTransaction<'_>,
) -> Result<DispatchOutcome, EngineError> {
    if tx.requires_amm() && !config.amendments.is_enabled(AmendmentSet::AMM) {
        log::warn!("rejecting {} from {}: AMM amendment is not enabled", tx.label(), tx.account());
        return Ok(DispatchOutcome {
            result: EngineResult::TemDisabled,
            affected_nodes: Vec::new(),
        });
    }

    let account = tx.account();
    let sequence = tx
        .sequence()
        .ok_or_else(|| EngineError::Internal(alloc::string::String::from("transaction is missing Sequence")))?;

    let mut table = StateTable::new();
    let result = match tx {
        EngineTransaction::Payment(inner) => payment::apply(&mut table, view, config, account, inner)?,
        EngineTransaction::OfferCreate(inner) => {
            offer::apply_create(&mut table, view, account, sequence, inner)?
        }
        EngineTransaction::OfferCancel(inner) => offer::apply_cancel(&mut table, view, account, inner)?,
        EngineTransaction::TrustSet(inner) => trust_line::apply(&mut table, view, config, account, inner)?,
        EngineTransaction::AMMCreate(inner) => amm::apply_create(&mut table, view, config, account, inner)?,
        EngineTransaction::AMMDeposit(inner) => amm::apply_deposit(&mut table, view, account, inner)?,
        EngineTransaction::AMMWithdraw(inner) => amm::apply_withdraw(&mut table, view, account, inner)?,
        EngineTransaction::AMMVote(inner) => amm::apply_vote(&mut table, view, account, inner)?,
        EngineTransaction::AMMBid(inner) => amm::apply_bid(&mut table, view, account, now, inner)?,
        EngineTransaction::AMMDelete(inner) => amm::apply_delete(&mut table, view, account, inner)?,
    };

    log::debug!("dispatch: {} from {} -> {}", tx.label(), account, result);

    let affected_nodes = match result.class() {
        ResultClass::Success => {
            charge_fee_and_bump_sequence(&mut table, view, account, sequence, Drops(config.base_fee))?;
            table.apply(view)
        }
        ResultClass::ClaimedCost => {
            log::warn!("{} from {} claimed a fee without its full effect: {}", tx.label(), account, result);
            let mut fee_table = StateTable::new();
            charge_fee_and_bump_sequence(&mut fee_table, view, account, sequence, Drops(config.base_fee))?;
            fee_table.apply(view)
        }
        ResultClass::Malformed | ResultClass::Retry => Vec::new(),
        ResultClass::Failure => {
            if result == EngineResult::TefInternal {
                log::error!("{} from {} hit tefINTERNAL", tx.label(), account);
            } else {
                log::warn!("{} from {} failed: {}", tx.label(), account, result);
            }
            Vec::new()
        }
    };

    Ok(DispatchOutcome { result, affected_nodes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::engine::ledger_view::MemoryLedgerView;
    use crate::models::currency::XRP;
    use crate::models::ledger::objects::{AccountRoot, AccountRootFlag, LedgerEntryType};
    use crate::models::transactions::CommonFields;
    use crate::models::{Currency, FlagCollection, NoFlags};

    const ALICE: &str = "rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY";
    const BOB: &str = "rMVbeeYRfeMcS7jvrqpqUyqM3S9mE2mVta";

    fn account_root(address: &str, drops: i64, sequence: u32) -> AccountRoot<'static> {
        AccountRoot {
            ledger_entry_type: LedgerEntryType::AccountRoot,
            flags: Vec::<AccountRootFlag>::new(),
            index: "".into(),
            account: address.to_string().into(),
            owner_count: 0,
            previous_txn_id: "".into(),
            previous_txn_lgr_seq: 0,
            sequence,
            account_txn_id: None,
            balance: Some(Amount::XRPAmount(Drops(drops).into())),
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
        }
    }

    fn offer_cancel(account: &str, sequence: u32, offer_sequence: u32) -> OfferCancel<'static> {
        OfferCancel {
            common_fields: CommonFields {
                account: account.to_string().into(),
                transaction_type: crate::models::transactions::TransactionType::OfferCancel,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::<NoFlags>::default(),
                last_ledger_sequence: None,
                memos: None,
                network_id: None,
                sequence: Some(sequence),
                signers: None,
                signing_pub_key: None,
                source_tag: None,
                ticket_sequence: None,
                txn_signature: None,
            },
            offer_sequence,
        }
    }

    #[test]
    fn an_offer_cancel_against_a_missing_offer_still_charges_the_fee_and_bumps_sequence() {
        let mut view = MemoryLedgerView::new();
        view.insert(keylet::account(&account_id(ALICE).unwrap()), LedgerEntry::AccountRoot(account_root(ALICE, 20_000_000, 5)));

        let config = EngineConfig::default();
        let tx = EngineTransaction::OfferCancel(offer_cancel(ALICE, 5, 1));
        let outcome = apply(&mut view, &config, 0, &tx).unwrap();

        assert_eq!(outcome.result, EngineResult::TesSuccess);
        assert!(!outcome.affected_nodes.is_empty());

        let root = match view.read(&keylet::account(&account_id(ALICE).unwrap())) {
            Some(LedgerEntry::AccountRoot(root)) => root,
            other => panic!("expected AccountRoot, got {other:?}"),
        };
        assert_eq!(root.sequence, 6);
        assert_eq!(
            Drops::try_from(match &root.balance {
                Some(Amount::XRPAmount(a)) => a,
                _ => panic!("expected XRP balance"),
            })
            .unwrap(),
            Drops(20_000_000 - config.base_fee)
        );
    }

    #[test]
    fn amm_transactions_are_rejected_when_the_amendment_is_disabled() {
        let mut view = MemoryLedgerView::new();
        view.insert(keylet::account(&account_id(ALICE).unwrap()), LedgerEntry::AccountRoot(account_root(ALICE, 20_000_000, 1)));

        let mut config = EngineConfig::default();
        config.amendments = AmendmentSet::empty();

        let tx = EngineTransaction::AMMDelete(crate::models::transactions::amm_delete::AMMDelete {
            common_fields: CommonFields {
                account: ALICE.to_string().into(),
                transaction_type: crate::models::transactions::TransactionType::AMMDelete,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::<NoFlags>::default(),
                last_ledger_sequence: None,
                memos: None,
                network_id: None,
                sequence: Some(1),
                signers: None,
                signing_pub_key: None,
                source_tag: None,
                ticket_sequence: None,
                txn_signature: None,
            },
            asset: Currency::XRP(XRP::new()),
            asset2: Currency::XRP(XRP::new()),
        });

        let outcome = apply(&mut view, &config, 0, &tx).unwrap();
        assert_eq!(outcome.result, EngineResult::TemDisabled);
        assert!(outcome.affected_nodes.is_empty());

        // no fee charged, no sequence bump
        let root = match view.read(&keylet::account(&account_id(ALICE).unwrap())) {
            Some(LedgerEntry::AccountRoot(root)) => root,
            other => panic!("expected AccountRoot, got {other:?}"),
        };
        assert_eq!(root.sequence, 1);
    }

    #[test]
    fn bob_receiving_his_first_payment_creates_his_account_and_charges_alice_the_fee() {
        let mut view = MemoryLedgerView::new();
        view.insert(
            keylet::account(&account_id(ALICE).unwrap()),
            LedgerEntry::AccountRoot(account_root(ALICE, 50_000_000, 1)),
        );

        let config = EngineConfig::default();
        let tx = EngineTransaction::Payment(Payment {
            common_fields: CommonFields {
                account: ALICE.to_string().into(),
                transaction_type: crate::models::transactions::TransactionType::Payment,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::<crate::models::transactions::payment::PaymentFlag>::default(),
                last_ledger_sequence: None,
                memos: None,
                network_id: None,
                sequence: Some(1),
                signers: None,
                signing_pub_key: None,
                source_tag: None,
                ticket_sequence: None,
                txn_signature: None,
            },
            amount: Amount::XRPAmount(Drops(30_000_000).into()),
            destination: BOB.to_string().into(),
            deliver_min: None,
            destination_tag: None,
            invoice_id: None,
            paths: None,
            send_max: None,
        });

        let outcome = apply(&mut view, &config, 0, &tx).unwrap();
        assert_eq!(outcome.result, EngineResult::TesSuccess);

        let bob_root = match view.read(&keylet::account(&account_id(BOB).unwrap())) {
            Some(LedgerEntry::AccountRoot(root)) => root,
            other => panic!("expected AccountRoot, got {other:?}"),
        };
        assert_eq!(
            Drops::try_from(match &bob_root.balance {
                Some(Amount::XRPAmount(a)) => a,
                _ => panic!("expected XRP balance"),
            })
            .unwrap(),
            Drops(30_000_000)
        );
    }
}
