//! Payment Engine (§4.5): the XRP path and the direct (single-issuer) IOU
//! issue/redeem/transfer paths, with `DeliverMin` enforcement. Multi-issuer
//! path-finding is explicitly out of scope (§1 Non-goals) — a `transfer`
//! between two non-issuer accounts is only honored when both hold a trust
//! line to the *same* issuer, i.e. the one-hop case that needs no pathfinding.

use alloc::string::ToString;
use thiserror::Error;

use crate::core::addresscodec::decode_classic_address;
use crate::engine::amount::{Drops, IouAmount};
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::keylet;
use crate::engine::ledger_view::LedgerView;
use crate::engine::result::EngineResult;
use crate::engine::state_table::StateTable;
use crate::engine::trust_line;
use crate::models::amount::{Amount, IssuedCurrencyAmount};
use crate::models::ledger::objects::{AccountRoot, AccountRootFlag, LedgerEntry, RippleState};
use crate::models::transactions::payment::{Payment, PaymentFlag};
use crate::models::transactions::Transaction;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PaymentError {
    #[error("source account does not exist")]
    SourceMissing,
    #[error("destination account does not exist and the delivered amount is below the account reserve")]
    DestinationMissing,
    #[error("source account has insufficient funds to complete this payment")]
    InsufficientFunds,
    #[error("delivered amount did not meet the requested DeliverMin")]
    DeliverMinNotMet,
    #[error("a trust line required for this payment does not exist")]
    TrustLineMissing,
    #[error("payer is not authorized to hold the destination's currency")]
    NoAuthorization,
    #[error("a required trust line is frozen")]
    Frozen,
    #[error("crediting the destination would exceed the funded reserve")]
    DestinationReserveUnmet,
}

impl PaymentError {
    pub fn result(&self) -> EngineResult {
        match self {
            Self::SourceMissing => EngineResult::TerNoAccount,
            Self::DestinationMissing => EngineResult::TecNoDstInsufXrp,
            Self::InsufficientFunds => EngineResult::TecUnfundedPayment,
            Self::DeliverMinNotMet => EngineResult::TecPathPartial,
            Self::TrustLineMissing => EngineResult::TecNoLine,
            Self::NoAuthorization => EngineResult::TecNoAuth,
            Self::Frozen => EngineResult::TecFrozen,
            Self::DestinationReserveUnmet => EngineResult::TecNoDstInsufXrp,
        }
    }
}

fn account_id(address: &str) -> Result<[u8; 20], EngineError> {
    let bytes = decode_classic_address(address)
        .map_err(|e| EngineError::Internal(alloc::format!("malformed account address: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| EngineError::Internal("decoded account id was not 20 bytes".to_string()))
}

fn read_account(
    table: &mut StateTable,
    view: &dyn LedgerView,
    id: &[u8; 20],
) -> Option<AccountRoot<'static>> {
    let keylet = keylet::account(id);
    match table.read(view, &keylet)? {
        LedgerEntry::AccountRoot(root) => Some(root),
        _ => None,
    }
}

fn drops_of(root: &AccountRoot<'static>) -> Result<Drops, EngineError> {
    match &root.balance {
        Some(Amount::XRPAmount(amount)) => Drops::try_from(amount),
        _ => Err(EngineError::Internal("AccountRoot.balance must be an XRP amount".into())),
    }
}

/// Applies a `Payment` transaction, returning the result code it earns.
/// Balance movement is performed through `table`; the caller (dispatch)
/// is responsible for charging the base fee and bumping `Sequence`.
pub fn apply(
    table: &mut StateTable,
    view: &dyn LedgerView,
    config: &EngineConfig,
    source_address: &str,
    tx: &Payment<'_>,
) -> Result<EngineResult, EngineError> {
    let source_id = account_id(source_address)?;
    let dest_id = account_id(&tx.destination)?;

    if let Some(blocked) = check_deposit_auth(table, view, &source_id, &dest_id)? {
        return Ok(blocked);
    }

    match &tx.amount {
        Amount::XRPAmount(_) => apply_xrp(table, view, config, &source_id, &dest_id, tx),
        Amount::IssuedCurrencyAmount(amount) => {
            apply_iou(table, view, &source_id, &dest_id, amount, tx)
        }
    }
}

/// `DepositAuth` (§6): a destination with the flag set only accepts payments
/// from itself or from an account it has preauthorized via a `DepositPreauth`
/// object. A destination that doesn't exist yet can't have the flag set, so
/// account creation is never blocked here.
fn check_deposit_auth(
    table: &mut StateTable,
    view: &dyn LedgerView,
    source_id: &[u8; 20],
    dest_id: &[u8; 20],
) -> Result<Option<EngineResult>, EngineError> {
    if source_id == dest_id {
        return Ok(None);
    }
    let Some(dest) = read_account(table, view, dest_id) else {
        return Ok(None);
    };
    if !dest.flags.contains(&AccountRootFlag::LsfDepositAuth) {
        return Ok(None);
    }
    let preauth_key = keylet::deposit_preauth(dest_id, source_id);
    if table.exists(view, &preauth_key) {
        Ok(None)
    } else {
        Ok(Some(EngineResult::TecNoPermission))
    }
}

fn apply_xrp(
    table: &mut StateTable,
    view: &dyn LedgerView,
    config: &EngineConfig,
    source_id: &[u8; 20],
    dest_id: &[u8; 20],
    tx: &Payment<'_>,
) -> Result<EngineResult, EngineError> {
    let requested = match &tx.amount {
        Amount::XRPAmount(amount) => Drops::try_from(amount)?,
        _ => unreachable!("apply_xrp only called for XRP amounts"),
    };

    let Some(source) = read_account(table, view, source_id) else {
        return Ok(PaymentError::SourceMissing.result());
    };
    let source_balance = drops_of(&source)?;
    let available = source_balance
        .checked_sub(Drops(config.reserve_for(source.owner_count)))
        .unwrap_or(Drops::ZERO);

    let partial_ok = tx.has_flag(&PaymentFlag::TfPartialPayment);
    let delivered = if available.0 >= requested.0 {
        requested
    } else if partial_ok && available.0 > 0 {
        available
    } else {
        return Ok(PaymentError::InsufficientFunds.result());
    };

    if let Some(Amount::XRPAmount(min)) = &tx.deliver_min {
        let min = Drops::try_from(min)?;
        if delivered.0 < min.0 {
            return Ok(PaymentError::DeliverMinNotMet.result());
        }
    }

    let dest = read_account(table, view, dest_id);
    let mut dest_root = match dest {
        Some(root) => root,
        None => {
            if delivered.0 < config.reserve_base {
                return Ok(PaymentError::DestinationMissing.result());
            }
            new_account_root(tx.destination.clone(), Drops::ZERO)
        }
    };

    let mut source_root = source;
    source_root.balance = Some(source_root_balance(drops_of(&source_root)?.checked_sub(delivered)?));
    let dest_balance = drops_of(&dest_root).unwrap_or(Drops::ZERO);
    dest_root.balance = Some(source_root_balance(dest_balance.checked_add(delivered)?));

    let source_key = keylet::account(source_id);
    let dest_key = keylet::account(dest_id);
    table.modify(&source_key, LedgerEntry::AccountRoot(source_root))?;
    if table.exists(view, &dest_key) {
        table.modify(&dest_key, LedgerEntry::AccountRoot(dest_root))?;
    } else {
        table.insert(dest_key, LedgerEntry::AccountRoot(dest_root))?;
    }

    Ok(EngineResult::TesSuccess)
}

fn source_root_balance(drops: Drops) -> Amount<'static> {
    Amount::XRPAmount(drops.into())
}

fn new_account_root(account: alloc::borrow::Cow<'_, str>, balance: Drops) -> AccountRoot<'static> {
    AccountRoot {
        ledger_entry_type: crate::models::ledger::LedgerEntryType::AccountRoot,
        flags: alloc::vec::Vec::new(),
        index: "".into(),
        account: account.into_owned().into(),
        owner_count: 0,
        previous_txn_id: "".into(),
        previous_txn_lgr_seq: 0,
        sequence: 1,
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
    }
}

fn read_trust_line(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account: &[u8; 20],
    issuer: &[u8; 20],
    currency: &str,
) -> Option<RippleState<'static>> {
    let keylet = keylet::line(account, issuer, currency.as_bytes());
    match table.read(view, &keylet)? {
        LedgerEntry::RippleState(state) => Some(state),
        _ => None,
    }
}

fn apply_iou(
    table: &mut StateTable,
    view: &dyn LedgerView,
    source_id: &[u8; 20],
    dest_id: &[u8; 20],
    amount: &IssuedCurrencyAmount<'_>,
    _tx: &Payment<'_>,
) -> Result<EngineResult, EngineError> {
    let issuer_id = account_id(&amount.issuer)?;
    let value = IouAmount::try_from(amount)?;

    if *source_id == issuer_id {
        return credit_line(table, view, dest_id, &issuer_id, &amount.currency, value);
    }
    if *dest_id == issuer_id {
        return debit_line(table, view, source_id, &issuer_id, &amount.currency, value);
    }

    // Single-hop transfer: both sides must already trust the same issuer.
    match debit_line(table, view, source_id, &issuer_id, &amount.currency, value)? {
        EngineResult::TesSuccess => {}
        other => return Ok(other),
    }
    credit_line(table, view, dest_id, &issuer_id, &amount.currency, value)
}

fn debit_line(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account: &[u8; 20],
    issuer: &[u8; 20],
    currency: &str,
    amount: IouAmount,
) -> Result<EngineResult, EngineError> {
    let Some(mut state) = read_trust_line(table, view, account, issuer, currency) else {
        return Ok(PaymentError::TrustLineMissing.result());
    };
    let account_is_low = trust_line::is_low_account(account, issuer);
    let current = trust_line::balance_from(&state, account_is_low)?;
    if current.compare(amount) == core::cmp::Ordering::Less {
        return Ok(PaymentError::InsufficientFunds.result());
    }
    let updated = current.sub(amount);
    state.balance = Amount::IssuedCurrencyAmount(trust_line::balance_to_store(
        currency.to_string().into(),
        updated,
        account_is_low,
    ));
    let keylet = keylet::line(account, issuer, currency.as_bytes());
    table.modify(&keylet, LedgerEntry::RippleState(state))?;
    Ok(EngineResult::TesSuccess)
}

fn credit_line(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account: &[u8; 20],
    issuer: &[u8; 20],
    currency: &str,
    amount: IouAmount,
) -> Result<EngineResult, EngineError> {
    let Some(mut state) = read_trust_line(table, view, account, issuer, currency) else {
        return Ok(PaymentError::TrustLineMissing.result());
    };
    let account_is_low = trust_line::is_low_account(account, issuer);
    let current = trust_line::balance_from(&state, account_is_low)?;
    let limit = trust_line::limit_for(&state, account_is_low)?;
    let updated = current.add(amount);
    if updated.compare(limit) == core::cmp::Ordering::Greater {
        return Ok(PaymentError::DestinationReserveUnmet.result());
    }
    state.balance = Amount::IssuedCurrencyAmount(trust_line::balance_to_store(
        currency.to_string().into(),
        updated,
        account_is_low,
    ));
    let keylet = keylet::line(account, issuer, currency.as_bytes());
    table.modify(&keylet, LedgerEntry::RippleState(state))?;
    Ok(EngineResult::TesSuccess)
}
