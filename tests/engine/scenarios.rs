//! End-to-end scenario tests for the transaction execution core: each test
//! drives `dispatch::apply` against a small `MemoryLedgerView` the way a
//! host integrating this crate would, and checks both the result code and
//! the resulting ledger state.

use strum::IntoEnumIterator;

use xrpl_ledger_engine::core::addresscodec::decode_classic_address;
use xrpl_ledger_engine::engine::amendments::AmendmentSet;
use xrpl_ledger_engine::engine::amount::Drops;
use xrpl_ledger_engine::engine::keylet;
use xrpl_ledger_engine::engine::trust_line;
use xrpl_ledger_engine::engine::{apply, EngineConfig, EngineResult, EngineTransaction, LedgerView, MemoryLedgerView};
use xrpl_ledger_engine::models::amount::{Amount, IssuedCurrencyAmount};
use xrpl_ledger_engine::models::currency::{Currency, IssuedCurrency, XRP};
use xrpl_ledger_engine::models::ledger::objects::{
    AccountRoot, AccountRootFlag, LedgerEntry, LedgerEntryType, RippleState,
};
use xrpl_ledger_engine::models::transactions::amm_bid::AMMBid;
use xrpl_ledger_engine::models::transactions::amm_create::AMMCreate;
use xrpl_ledger_engine::models::transactions::offer_create::{OfferCreate, OfferCreateFlag};
use xrpl_ledger_engine::models::transactions::payment::{Payment, PaymentFlag};
use xrpl_ledger_engine::models::transactions::trust_set::{TrustSet, TrustSetFlag};
use xrpl_ledger_engine::models::transactions::{CommonFields, TransactionType};
use xrpl_ledger_engine::models::{FlagCollection, NoFlags};

const ALICE: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
const BOB: &str = "rEmiKfebGCzDz4YWrMhW39cyWsP56HSJaU";
const ISSUER: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";

fn account_id(address: &str) -> [u8; 20] {
    decode_classic_address(address).unwrap().try_into().unwrap()
}

fn account_root(address: &str, drops: i64) -> LedgerEntry<'static> {
    LedgerEntry::AccountRoot(AccountRoot {
        ledger_entry_type: LedgerEntryType::AccountRoot,
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

fn xrp_balance(entry: &LedgerEntry<'static>) -> i64 {
    match entry {
        LedgerEntry::AccountRoot(root) => match &root.balance {
            Some(Amount::XRPAmount(amount)) => Drops::try_from(amount).unwrap().0,
            _ => panic!("expected an XRP balance"),
        },
        other => panic!("expected an AccountRoot, got {other:?}"),
    }
}

fn common_fields<F>(account: &str, sequence: u32, transaction_type: TransactionType) -> CommonFields<'static, F>
where
    F: IntoEnumIterator + serde::Serialize + core::fmt::Debug,
{
    CommonFields {
        account: account.to_string().into(),
        transaction_type,
        account_txn_id: None,
        fee: None,
        flags: FlagCollection::default(),
        last_ledger_sequence: None,
        memos: None,
        network_id: None,
        sequence: Some(sequence),
        signers: None,
        signing_pub_key: None,
        source_tag: None,
        ticket_sequence: None,
        txn_signature: None,
    }
}

fn xrp_payment(from: &str, sequence: u32, to: &str, drops: i64) -> Payment<'static> {
    Payment {
        common_fields: common_fields::<PaymentFlag>(from, sequence, TransactionType::Payment),
        amount: Amount::XRPAmount(Drops(drops).into()),
        destination: to.to_string().into(),
        deliver_min: None,
        destination_tag: None,
        invoice_id: None,
        paths: None,
        send_max: None,
    }
}

// Builds a trust line between `holder` and `issuer` with `holder_balance`
// drawn from `holder`'s own point of view (positive = holder is owed that
// much), and `holder_limit`/`issuer_limit` the two sides' `TrustSet` limits.
// `RippleState` itself only knows "low"/"high", so this sorts the two
// accounts the same way `trust_line::is_low_account` does and flips the
// sign of the stored balance when `holder` turns out to be the high side.
fn ripple_state(holder: &str, holder_balance: &str, holder_limit: &str, issuer: &str, issuer_limit: &str) -> LedgerEntry<'static> {
    let holder_is_low = trust_line::is_low_account(&account_id(holder), &account_id(issuer));
    let stored_balance: rust_decimal::Decimal = holder_balance.parse().unwrap();
    let stored_balance = if holder_is_low { stored_balance } else { -stored_balance };

    let (low_account, low_limit, high_account, high_limit) = if holder_is_low {
        (holder, holder_limit, issuer, issuer_limit)
    } else {
        (issuer, issuer_limit, holder, holder_limit)
    };

    LedgerEntry::RippleState(RippleState::new(
        Default::default(),
        None,
        None,
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), "".into(), stored_balance.to_string().into())),
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), high_account.to_string().into(), high_limit.to_string().into())),
        "0".into(),
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), low_account.to_string().into(), low_limit.to_string().into())),
        "0".into(),
        "".into(),
        0,
        None,
        None,
        None,
        None,
    ))
}

// Scenario 1 (spec.md §8): a funded sender pays a brand-new destination
// enough to clear the base reserve. The destination account is created and
// the sender is debited the delivered amount plus the base fee.
#[test]
fn payment_creates_a_new_destination_account() {
    let mut view = MemoryLedgerView::new();
    view.insert(keylet::account(&account_id(ALICE)), account_root(ALICE, 20_000_000));

    let config = EngineConfig::default();
    let tx = EngineTransaction::Payment(xrp_payment(ALICE, 1, BOB, 10_000_000));
    let outcome = apply(&mut view, &config, 0, &tx).unwrap();

    assert_eq!(outcome.result, EngineResult::TesSuccess);
    assert!(!outcome.affected_nodes.is_empty());

    let bob_root = view.read(&keylet::account(&account_id(BOB))).unwrap();
    assert_eq!(xrp_balance(&bob_root), 10_000_000);

    let alice_root = view.read(&keylet::account(&account_id(ALICE))).unwrap();
    assert_eq!(xrp_balance(&alice_root), 20_000_000 - 10_000_000 - config.base_fee);
}

// Scenario 2: the same payment, but for less than the base reserve. The
// destination is never created; the fee is still charged to the sender
// because tecNO_DST_INSUF_XRP claims the fee.
#[test]
fn underfunded_new_account_payment_claims_the_fee_without_delivering() {
    let mut view = MemoryLedgerView::new();
    view.insert(keylet::account(&account_id(ALICE)), account_root(ALICE, 20_000_000));

    let config = EngineConfig::default();
    let tx = EngineTransaction::Payment(xrp_payment(ALICE, 1, BOB, 9_999_999));
    let outcome = apply(&mut view, &config, 0, &tx).unwrap();

    assert_eq!(outcome.result, EngineResult::TecNoDstInsufXrp);
    assert!(!outcome.affected_nodes.is_empty());
    assert!(!view.exists(&keylet::account(&account_id(BOB))));

    let alice_root = view.read(&keylet::account(&account_id(ALICE))).unwrap();
    assert_eq!(xrp_balance(&alice_root), 20_000_000 - config.base_fee);
}

// Scenario 3: the destination has DepositAuth set and has not preauthorized
// the sender. The payment is rejected with tecNO_PERMISSION but still
// claims the fee.
#[test]
fn deposit_auth_rejects_an_unpreauthorized_sender() {
    let mut view = MemoryLedgerView::new();
    view.insert(keylet::account(&account_id(BOB)), account_root(BOB, 20_000_000));
    let mut alice_entry = account_root(ALICE, 5_000_000);
    if let LedgerEntry::AccountRoot(root) = &mut alice_entry {
        root.flags = vec![AccountRootFlag::LsfDepositAuth];
    }
    view.insert(keylet::account(&account_id(ALICE)), alice_entry);

    let config = EngineConfig::default();
    let tx = EngineTransaction::Payment(xrp_payment(BOB, 1, ALICE, 1_000_000));
    let outcome = apply(&mut view, &config, 0, &tx).unwrap();

    assert_eq!(outcome.result, EngineResult::TecNoPermission);
    assert!(!outcome.affected_nodes.is_empty());

    let alice_root = view.read(&keylet::account(&account_id(ALICE))).unwrap();
    assert_eq!(xrp_balance(&alice_root), 5_000_000);
    let bob_root = view.read(&keylet::account(&account_id(BOB))).unwrap();
    assert_eq!(xrp_balance(&bob_root), 20_000_000 - config.base_fee);
}

// Scenario 4: a trust line is opened, then the issuer pays across it.
// Driven through two real transactions rather than hand-built ledger
// state, so it exercises `trust_line::apply` and `payment::apply` together.
#[test]
fn a_trust_line_then_a_direct_issue_credits_the_holder() {
    let mut view = MemoryLedgerView::new();
    view.insert(keylet::account(&account_id(ALICE)), account_root(ALICE, 20_000_000));
    view.insert(keylet::account(&account_id(ISSUER)), account_root(ISSUER, 20_000_000));

    let config = EngineConfig::default();

    let trust_set = TrustSet {
        common_fields: common_fields::<TrustSetFlag>(ALICE, 1, TransactionType::TrustSet),
        limit_amount: IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "1000".into()),
        quality_in: None,
        quality_out: None,
    };
    let outcome = apply(&mut view, &config, 0, &EngineTransaction::TrustSet(trust_set)).unwrap();
    assert_eq!(outcome.result, EngineResult::TesSuccess);

    let payment = Payment {
        common_fields: common_fields::<PaymentFlag>(ISSUER, 1, TransactionType::Payment),
        amount: Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "500".into())),
        destination: ALICE.to_string().into(),
        deliver_min: None,
        destination_tag: None,
        invoice_id: None,
        paths: None,
        send_max: None,
    };
    let outcome = apply(&mut view, &config, 0, &EngineTransaction::Payment(payment)).unwrap();
    assert_eq!(outcome.result, EngineResult::TesSuccess);

    let line = match view.read(&keylet::line(&account_id(ALICE), &account_id(ISSUER), b"USD")) {
        Some(LedgerEntry::RippleState(state)) => state,
        other => panic!("expected a RippleState, got {other:?}"),
    };
    let alice_is_low = trust_line::is_low_account(&account_id(ALICE), &account_id(ISSUER));
    let balance = trust_line::balance_from(&line, alice_is_low).unwrap();
    assert_eq!(balance.value().to_string(), "500");
}

// Scenario 5: a resting maker offer crosses against an incoming taker
// offer. Both legs move (the XRP leg on the maker's own AccountRoot, the
// USD leg across the taker's trust line to the issuer).
#[test]
fn a_crossing_offer_moves_both_legs_of_the_trade() {
    let mut view = MemoryLedgerView::new();
    view.insert(keylet::account(&account_id(ALICE)), account_root(ALICE, 50_000_000));
    view.insert(keylet::account(&account_id(BOB)), account_root(BOB, 50_000_000));
    view.insert(keylet::account(&account_id(ISSUER)), account_root(ISSUER, 50_000_000));
    view.insert(
        keylet::line(&account_id(BOB), &account_id(ISSUER), b"USD"),
        ripple_state(BOB, "0", "1000", ISSUER, "1000"),
    );

    let config = EngineConfig::default();

    // Alice rests an offer selling 100 XRP for 50 USD/ISSUER.
    let maker = OfferCreate {
        common_fields: common_fields::<OfferCreateFlag>(ALICE, 1, TransactionType::OfferCreate),
        taker_gets: Amount::XRPAmount(Drops(100_000_000).into()),
        taker_pays: Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "50".into())),
        expiration: None,
        offer_sequence: None,
    };
    let outcome = apply(&mut view, &config, 0, &EngineTransaction::OfferCreate(maker)).unwrap();
    assert_eq!(outcome.result, EngineResult::TesSuccess);

    // Bob crosses it, paying XRP and receiving USD.
    let taker = OfferCreate {
        common_fields: common_fields::<OfferCreateFlag>(BOB, 1, TransactionType::OfferCreate),
        taker_gets: Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "50".into())),
        taker_pays: Amount::XRPAmount(Drops(100_000_000).into()),
        expiration: None,
        offer_sequence: None,
    };
    let outcome = apply(&mut view, &config, 0, &EngineTransaction::OfferCreate(taker)).unwrap();
    assert_eq!(outcome.result, EngineResult::TesSuccess);

    // Bob's trust line to the issuer picked up a USD credit from the trade.
    let line = match view.read(&keylet::line(&account_id(BOB), &account_id(ISSUER), b"USD")) {
        Some(LedgerEntry::RippleState(state)) => state,
        other => panic!("expected a RippleState, got {other:?}"),
    };
    let bob_is_low = trust_line::is_low_account(&account_id(BOB), &account_id(ISSUER));
    let balance = trust_line::balance_from(&line, bob_is_low).unwrap();
    assert!(balance.value() > rust_decimal::Decimal::ZERO);

    // Alice's XRP balance moved: she received Bob's XRP leg of the trade
    // net of the fee she paid on her own OfferCreate.
    let alice_root = view.read(&keylet::account(&account_id(ALICE))).unwrap();
    assert_ne!(xrp_balance(&alice_root), 50_000_000 - config.base_fee);
}

// Scenario 6: a bid against an AMM instance with no existing auction-slot
// holder pays the pool floor and burns that many LP tokens from the
// bidder's own balance.
#[test]
fn an_amm_bid_on_an_unowned_auction_slot_burns_lp_tokens() {
    let mut view = MemoryLedgerView::new();
    view.insert(keylet::account(&account_id(ALICE)), account_root(ALICE, 50_000_000));
    view.insert(
        keylet::line(&account_id(ALICE), &account_id(ISSUER), b"USD"),
        ripple_state(ALICE, "1000", "1000000", ISSUER, "1000000"),
    );

    let config = EngineConfig {
        amendments: AmendmentSet::all(),
        ..EngineConfig::default()
    };

    let create = AMMCreate {
        common_fields: common_fields::<NoFlags>(ALICE, 1, TransactionType::AMMCreate),
        amount: Amount::XRPAmount(Drops(10_000_000).into()),
        amount2: Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "100".into())),
        trading_fee: 500,
    };
    let outcome = apply(&mut view, &config, 0, &EngineTransaction::AMMCreate(create)).unwrap();
    assert_eq!(outcome.result, EngineResult::TesSuccess);

    let amm_key = keylet::amm(b"XRP", format!("USD:{ISSUER}").as_bytes());
    let before = match view.read(&amm_key) {
        Some(LedgerEntry::AMM(amm)) => amm,
        other => panic!("expected an AMM entry, got {other:?}"),
    };
    assert!(before.auction_slot.is_none());

    let bid = AMMBid {
        common_fields: common_fields::<NoFlags>(ALICE, 2, TransactionType::AMMBid),
        asset: Currency::XRP(XRP::new()),
        asset2: Currency::IssuedCurrency(IssuedCurrency::new("USD".into(), ISSUER.into())),
        bid_min: Some(IssuedCurrencyAmount::new("LPT".into(), ALICE.into(), "100".into())),
        bid_max: Some(IssuedCurrencyAmount::new("LPT".into(), ALICE.into(), "200".into())),
        auth_accounts: None,
    };
    let outcome = apply(&mut view, &config, 1_000, &EngineTransaction::AMMBid(bid)).unwrap();
    assert_eq!(outcome.result, EngineResult::TesSuccess);

    let after = match view.read(&amm_key) {
        Some(LedgerEntry::AMM(amm)) => amm,
        other => panic!("expected an AMM entry, got {other:?}"),
    };
    let slot = after.auction_slot.expect("auction slot should now be owned");
    assert_eq!(slot.account.as_ref(), ALICE);

    let before_total: rust_decimal::Decimal = match &before.lptoken_balance {
        Amount::IssuedCurrencyAmount(iou) => iou.value.parse().unwrap(),
        _ => panic!("LPTokenBalance must be an issued currency"),
    };
    let after_total: rust_decimal::Decimal = match &after.lptoken_balance {
        Amount::IssuedCurrencyAmount(iou) => iou.value.parse().unwrap(),
        _ => panic!("LPTokenBalance must be an issued currency"),
    };
    assert_eq!(before_total - after_total, rust_decimal::Decimal::from(100));
}
