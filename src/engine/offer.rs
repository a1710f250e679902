//! Offer/Book Engine (§4.6): `OfferCreate` crossing and trade execution,
//! `OfferCancel`. Crossing is scan-based over the `LedgerView` rather than
//! walking an indexed order-book page chain — acceptable per the engine's
//! non-goals, since exact-match order-book lookup performance is the host's
//! concern, not this crate's.
//!
//! A non-`tesSuccess` result from `apply_create`/`apply_cancel` means the
//! `StateTable` passed in may hold partially-applied leg mutations from an
//! aborted trade; per the dispatch contract (§4.7), the caller discards that
//! table on anything but `TesSuccess` and charges the fee through a fresh one.

use alloc::string::ToString;
use alloc::vec::Vec;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::core::addresscodec::decode_classic_address;
use crate::engine::amount::{Drops, IouAmount};
use crate::engine::error::EngineError;
use crate::engine::keylet::{self, Keylet};
use crate::engine::ledger_view::LedgerView;
use crate::engine::quality::Quality;
use crate::engine::result::EngineResult;
use crate::engine::state_table::StateTable;
use crate::engine::trust_line;
use crate::models::amount::{Amount, IssuedCurrencyAmount};
use crate::models::ledger::objects::{AccountRoot, DirectoryNode, LedgerEntry, Offer, OfferFlag};
use crate::models::transactions::offer_cancel::OfferCancel;
use crate::models::transactions::offer_create::{OfferCreate, OfferCreateFlag};
use crate::models::transactions::Transaction;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OfferError {
    #[error("offer account does not exist")]
    AccountMissing,
    #[error("TakerPays and TakerGets must both be positive and of different assets")]
    BadAmount,
    #[error("offer owner has insufficient funds to back this offer")]
    InsufficientFunds,
    #[error("the offer to cancel does not exist")]
    OfferNotFound,
}

impl OfferError {
    pub fn result(&self) -> EngineResult {
        match self {
            Self::AccountMissing => EngineResult::TerNoAccount,
            Self::BadAmount => EngineResult::TemBadAmount,
            Self::InsufficientFunds => EngineResult::TecUnfundedOffer,
            Self::OfferNotFound => EngineResult::TecNoEntry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AssetKey {
    currency: alloc::string::String,
    issuer: alloc::string::String,
}

fn asset_key(amount: &Amount<'_>) -> AssetKey {
    match amount {
        Amount::XRPAmount(_) => AssetKey {
            currency: "XRP".to_string(),
            issuer: alloc::string::String::new(),
        },
        Amount::IssuedCurrencyAmount(iou) => AssetKey {
            currency: iou.currency.to_string(),
            issuer: iou.issuer.to_string(),
        },
    }
}

fn decimal_of(amount: &Amount<'_>) -> Result<Decimal, EngineError> {
    match amount {
        Amount::XRPAmount(drops) => Ok(Decimal::from(Drops::try_from(drops)?.0)),
        Amount::IssuedCurrencyAmount(iou) => Ok(IouAmount::try_from(iou)?.value()),
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
    match table.read(view, &keylet::account(id))? {
        LedgerEntry::AccountRoot(root) => Some(root),
        _ => None,
    }
}

/// Moves `amount` of an asset from `from` to `to`. For XRP this adjusts both
/// `AccountRoot.balance` fields directly; for an issued currency it adjusts
/// (or requires) the trust line between `from`/`to` and the asset's issuer.
fn move_asset(
    table: &mut StateTable,
    view: &dyn LedgerView,
    from: &[u8; 20],
    to: &[u8; 20],
    asset: &Amount<'_>,
    amount: Decimal,
) -> Result<Option<EngineResult>, EngineError> {
    match asset {
        Amount::XRPAmount(_) => {
            let drops = Drops(amount.try_into().map_err(|_| {
                EngineError::Internal("drops amount did not fit in i64 during a trade".to_string())
            })?);
            let from_key = keylet::account(from);
            let to_key = keylet::account(to);
            let Some(mut from_root) = read_account(table, view, from) else {
                return Ok(Some(OfferError::AccountMissing.result()));
            };
            let from_balance = match &from_root.balance {
                Some(Amount::XRPAmount(a)) => Drops::try_from(a)?,
                _ => return Err(EngineError::Internal("AccountRoot.balance missing".to_string())),
            };
            if from_balance.0 < drops.0 {
                return Ok(Some(OfferError::InsufficientFunds.result()));
            }
            from_root.balance = Some(Amount::XRPAmount(from_balance.checked_sub(drops)?.into()));
            table.modify(&from_key, LedgerEntry::AccountRoot(from_root))?;

            let Some(mut to_root) = read_account(table, view, to) else {
                return Ok(Some(OfferError::AccountMissing.result()));
            };
            let to_balance = match &to_root.balance {
                Some(Amount::XRPAmount(a)) => Drops::try_from(a)?,
                _ => return Err(EngineError::Internal("AccountRoot.balance missing".to_string())),
            };
            to_root.balance = Some(Amount::XRPAmount(to_balance.checked_add(drops)?.into()));
            table.modify(&to_key, LedgerEntry::AccountRoot(to_root))?;
            Ok(None)
        }
        Amount::IssuedCurrencyAmount(iou) => {
            let issuer_id = account_id(&iou.issuer)?;
            let value = IouAmount::new(amount);
            if *from != issuer_id {
                let key = keylet::line(from, &issuer_id, iou.currency.as_bytes());
                let Some(LedgerEntry::RippleState(mut state)) = table.read(view, &key) else {
                    return Ok(Some(EngineResult::TecNoLine));
                };
                let from_is_low = trust_line::is_low_account(from, &issuer_id);
                let current = trust_line::balance_from(&state, from_is_low)?;
                if current.compare(value) == core::cmp::Ordering::Less {
                    return Ok(Some(OfferError::InsufficientFunds.result()));
                }
                let updated = current.sub(value);
                state.balance = Amount::IssuedCurrencyAmount(trust_line::balance_to_store(
                    iou.currency.to_string().into(),
                    updated,
                    from_is_low,
                ));
                table.modify(&key, LedgerEntry::RippleState(state))?;
            }
            if *to != issuer_id {
                let key = keylet::line(to, &issuer_id, iou.currency.as_bytes());
                let Some(LedgerEntry::RippleState(mut state)) = table.read(view, &key) else {
                    return Ok(Some(EngineResult::TecNoLine));
                };
                let to_is_low = trust_line::is_low_account(to, &issuer_id);
                let current = trust_line::balance_from(&state, to_is_low)?;
                let limit = trust_line::limit_for(&state, to_is_low)?;
                let updated = current.add(value);
                if updated.compare(limit) == core::cmp::Ordering::Greater {
                    return Ok(Some(EngineResult::TecInsufficientReserve));
                }
                state.balance = Amount::IssuedCurrencyAmount(trust_line::balance_to_store(
                    iou.currency.to_string().into(),
                    updated,
                    to_is_low,
                ));
                table.modify(&key, LedgerEntry::RippleState(state))?;
            }
            Ok(None)
        }
    }
}

fn amount_with_value(template: &Amount<'_>, value: Decimal) -> Amount<'static> {
    match template {
        Amount::XRPAmount(_) => {
            let drops: i64 = value.try_into().unwrap_or(0);
            Amount::XRPAmount(Drops(drops).into())
        }
        Amount::IssuedCurrencyAmount(iou) => Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
            iou.currency.clone().into_owned().into(),
            iou.issuer.clone().into_owned().into(),
            value.to_string().into(),
        )),
    }
}

/// Applies an `OfferCreate`, crossing against resting offers in the inverse
/// book before (optionally) resting the remainder as a new `Offer` object.
pub fn apply_create(
    table: &mut StateTable,
    view: &dyn LedgerView,
    owner_address: &str,
    sequence: u32,
    tx: &OfferCreate<'_>,
) -> Result<EngineResult, EngineError> {
    let owner = account_id(owner_address)?;
    if read_account(table, view, &owner).is_none() {
        return Ok(OfferError::AccountMissing.result());
    }

    if asset_key(&tx.taker_pays) == asset_key(&tx.taker_gets) {
        return Ok(OfferError::BadAmount.result());
    }
    let mut remaining_pays = decimal_of(&tx.taker_pays)?;
    let mut remaining_gets = decimal_of(&tx.taker_gets)?;
    if remaining_pays <= Decimal::ZERO || remaining_gets <= Decimal::ZERO {
        return Ok(OfferError::BadAmount.result());
    }

    let mut candidates: Vec<(Keylet, Offer<'static>)> = Vec::new();
    view.for_each(&mut |keylet, entry| {
        if let LedgerEntry::Offer(offer) = entry {
            let crosses = asset_key(&offer.taker_gets) == asset_key(&tx.taker_pays)
                && asset_key(&offer.taker_pays) == asset_key(&tx.taker_gets);
            if crosses {
                candidates.push((*keylet, offer.clone()));
            }
        }
    });
    candidates.sort_by_key(|(_, offer)| {
        let pays = decimal_of(&offer.taker_pays).unwrap_or(Decimal::ZERO);
        let gets = decimal_of(&offer.taker_gets).unwrap_or(Decimal::ONE);
        Quality::from_amounts(pays, gets).map(Quality::as_u64).unwrap_or(u64::MAX)
    });

    for (existing_key, _) in candidates {
        if remaining_gets <= Decimal::ZERO {
            break;
        }
        let Some(LedgerEntry::Offer(existing)) = table.read(view, &existing_key) else {
            continue;
        };
        let existing_pays = decimal_of(&existing.taker_pays)?;
        let existing_gets = decimal_of(&existing.taker_gets)?;
        if existing_gets <= Decimal::ZERO {
            continue;
        }
        // Crossing condition: our asking rate (TakerPays/TakerGets) must be no
        // worse than what the resting offer is willing to pay per unit received.
        if remaining_pays * existing_pays > existing_gets * remaining_gets {
            break;
        }

        let exec_gets = remaining_gets.min(existing_gets);
        let rate = existing_pays / existing_gets;
        let exec_pays = (exec_gets * rate).round_dp(15);

        let existing_owner = account_id(&existing.account)?;
        if let Some(result) = move_asset(table, view, &owner, &existing_owner, &tx.taker_pays, exec_pays)? {
            return Ok(result);
        }
        if let Some(result) = move_asset(table, view, &existing_owner, &owner, &tx.taker_gets, exec_gets)? {
            return Ok(result);
        }

        remaining_pays -= exec_pays;
        remaining_gets -= exec_gets;

        let new_existing_gets = existing_gets - exec_gets;
        let new_existing_pays = existing_pays - exec_pays;
        if new_existing_gets <= Decimal::ZERO {
            table.erase(&existing_key)?;
        } else {
            let mut updated = existing;
            updated.taker_gets = amount_with_value(&updated.taker_gets, new_existing_gets);
            updated.taker_pays = amount_with_value(&updated.taker_pays, new_existing_pays);
            table.modify(&existing_key, LedgerEntry::Offer(updated))?;
        }
    }

    let fill_or_kill = tx.has_flag(&OfferCreateFlag::TfFillOrKill);
    let immediate_or_cancel = tx.has_flag(&OfferCreateFlag::TfImmediateOrCancel);
    let fully_filled = remaining_gets <= Decimal::ZERO || remaining_pays <= Decimal::ZERO;

    if fill_or_kill && !fully_filled {
        return Ok(EngineResult::TecKilled);
    }

    if !fully_filled && !immediate_or_cancel {
        rest_offer(table, view, owner_address, &owner, sequence, tx, remaining_pays, remaining_gets)?;
    }

    Ok(EngineResult::TesSuccess)
}

fn hex_index(keylet: &Keylet) -> alloc::string::String {
    let mut out = alloc::string::String::with_capacity(64);
    for byte in keylet.key {
        out.push_str(&alloc::format!("{byte:02X}"));
    }
    out
}

fn rest_offer(
    table: &mut StateTable,
    view: &dyn LedgerView,
    owner_address: &str,
    owner: &[u8; 20],
    sequence: u32,
    tx: &OfferCreate<'_>,
    remaining_pays: Decimal,
    remaining_gets: Decimal,
) -> Result<(), EngineError> {
    let offer_key = keylet::offer(owner, sequence);
    let owner_dir_key = keylet::owner_dir(owner);

    let pays_asset = asset_key(&tx.taker_pays);
    let gets_asset = asset_key(&tx.taker_gets);
    let quality = Quality::from_amounts(remaining_pays, remaining_gets)?.as_u64();
    let book_key = keylet::quality(
        pays_asset.currency.as_bytes(),
        pays_asset.issuer.as_bytes(),
        gets_asset.currency.as_bytes(),
        gets_asset.issuer.as_bytes(),
        quality,
    );

    let offer = Offer::new(
        alloc::vec::Vec::<OfferFlag>::new().into(),
        hex_index(&offer_key).into(),
        owner_address.to_string().into(),
        hex_index(&book_key).into(),
        "0".into(),
        "0".into(),
        "".into(),
        0,
        sequence,
        amount_with_value(&tx.taker_gets, remaining_gets),
        amount_with_value(&tx.taker_pays, remaining_pays),
        tx.expiration,
    );
    table.insert(offer_key, LedgerEntry::Offer(offer))?;

    append_directory(table, view, owner_dir_key, owner_address, &offer_key)?;
    append_directory(table, view, book_key, owner_address, &offer_key)?;
    Ok(())
}

fn append_directory(
    table: &mut StateTable,
    view: &dyn LedgerView,
    dir_key: Keylet,
    owner_address: &str,
    entry_key: &Keylet,
) -> Result<(), EngineError> {
    let entry_index: alloc::borrow::Cow<'static, str> = hex_index(entry_key).into();
    match table.read(view, &dir_key) {
        Some(LedgerEntry::DirectoryNode(mut dir)) => {
            dir.indexes.push(entry_index);
            table.modify(&dir_key, LedgerEntry::DirectoryNode(dir))?;
        }
        _ => {
            let dir = DirectoryNode {
                root_index: hex_index(&dir_key).into(),
                index: hex_index(&dir_key).into(),
                owner: Some(owner_address.to_string().into()),
                indexes: alloc::vec![entry_index],
                ..DirectoryNode::default()
            };
            table.insert(dir_key, LedgerEntry::DirectoryNode(dir))?;
        }
    }
    Ok(())
}

/// Applies an `OfferCancel`: removes the named offer if it exists. It is not
/// an error for the offer to already be gone.
pub fn apply_cancel(
    table: &mut StateTable,
    view: &dyn LedgerView,
    owner_address: &str,
    tx: &OfferCancel<'_>,
) -> Result<EngineResult, EngineError> {
    let owner = account_id(owner_address)?;
    let key = keylet::offer(&owner, tx.offer_sequence);
    match table.read(view, &key) {
        Some(LedgerEntry::Offer(_)) => {
            table.erase(&key)?;
            Ok(EngineResult::TesSuccess)
        }
        _ => Ok(EngineResult::TesSuccess),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ledger_view::MemoryLedgerView;
    use crate::models::transactions::offer_create::OfferCreateFlag as Flag;
    use crate::models::transactions::CommonFields;
    use crate::models::FlagCollection;

    const ALICE: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const BOB: &str = "rEmiKfebGCzDz4YWrMhW39cyWsP56HSJaU";

    fn account_root(address: &str, drops: i64) -> LedgerEntry<'static> {
        LedgerEntry::AccountRoot(AccountRoot {
            ledger_entry_type: crate::models::ledger::LedgerEntryType::AccountRoot,
            flags: Vec::new(),
            index: "".into(),
            account: address.to_string().into(),
            owner_count: 0,
            previous_txn_id: "".into(),
            previous_txn_lgr_seq: 0,
            sequence: 1,
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
        })
    }

    fn offer_create(taker_pays: Amount<'static>, taker_gets: Amount<'static>) -> OfferCreate<'static> {
        OfferCreate {
            common_fields: CommonFields {
                account: ALICE.into(),
                transaction_type: crate::models::transactions::TransactionType::OfferCreate,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::default(),
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
            taker_gets,
            taker_pays,
            expiration: None,
            offer_sequence: None,
        }
    }

    #[test]
    fn bad_amount_is_rejected() {
        let mut view = MemoryLedgerView::new();
        let alice_id = account_id(ALICE).unwrap();
        view.insert(keylet::account(&alice_id), account_root(ALICE, 50_000_000));
        let mut table = StateTable::new();
        let tx = offer_create(Amount::XRPAmount("0".into()), Amount::XRPAmount("1".into()));
        let result = apply_create(&mut table, &view, ALICE, 2, &tx).unwrap();
        assert_eq!(result, EngineResult::TemBadAmount);
    }

    #[test]
    fn immediate_or_cancel_never_rests_an_offer() {
        let mut view = MemoryLedgerView::new();
        let alice_id = account_id(ALICE).unwrap();
        view.insert(keylet::account(&alice_id), account_root(ALICE, 50_000_000));
        let mut table = StateTable::new();
        let mut tx = offer_create(
            Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), BOB.into(), "10".into())),
            Amount::XRPAmount("100000000".into()),
        );
        tx.common_fields.flags = alloc::vec![Flag::TfImmediateOrCancel].into();
        let result = apply_create(&mut table, &view, ALICE, 2, &tx).unwrap();
        assert_eq!(result, EngineResult::TesSuccess);
        table.apply(&mut view);
        assert!(!view.exists(&keylet::offer(&alice_id, 2)));
    }

    #[test]
    fn cancel_of_missing_offer_still_succeeds() {
        let mut view = MemoryLedgerView::new();
        let alice_id = account_id(ALICE).unwrap();
        view.insert(keylet::account(&alice_id), account_root(ALICE, 50_000_000));
        let mut table = StateTable::new();
        let tx = OfferCancel {
            common_fields: CommonFields {
                account: ALICE.into(),
                transaction_type: crate::models::transactions::TransactionType::OfferCancel,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::default(),
                last_ledger_sequence: None,
                memos: None,
                network_id: None,
                sequence: Some(2),
                signers: None,
                signing_pub_key: None,
                source_tag: None,
                ticket_sequence: None,
                txn_signature: None,
            },
            offer_sequence: 1,
        };
        let result = apply_cancel(&mut table, &view, ALICE, &tx).unwrap();
        assert_eq!(result, EngineResult::TesSuccess);
        let _ = alice_id;
    }
}
