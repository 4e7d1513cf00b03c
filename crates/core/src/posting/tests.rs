//! Scenario tests for posting-line derivation and its state machine.

use chrono::NaiveDate;
use kontiva_shared::{PostingLineId, YearMonth};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::account::{
    Account, AccountGroup, AccountGroupType, AccountValues, BudgetAccount, BudgetAccountGroup,
    ContactAccount,
};
use crate::calculate::CalculateError;
use crate::info::{BudgetInfo, CreditInfo};
use crate::posting::PostingLine;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assets_group() -> AccountGroup {
    AccountGroup::new(1, "Current assets", AccountGroupType::Assets)
}

fn line(
    d: NaiveDate,
    account: &str,
    debit: Decimal,
    credit: Decimal,
    sort_order: i32,
) -> PostingLine {
    PostingLine::new(
        PostingLineId::new(),
        d,
        "test posting",
        account,
        debit,
        credit,
        sort_order,
    )
}

/// Builds an account whose collection mirrors the given lines.
fn account_with_lines(number: &str, lines: &[PostingLine]) -> Account {
    let mut account = Account::new(number, "Cash", assets_group());
    for posting in lines {
        account.register_posting(posting.entry());
    }
    account
}

#[test]
fn test_apply_account_requires_calculated_account() {
    let account = Account::new("1000", "Cash", assets_group());
    let mut posting = line(date(2024, 1, 5), "1000", dec!(100), dec!(0), 1);

    let err = posting.apply_account_calculation(&account).unwrap_err();
    assert_eq!(err, CalculateError::NotCalculated("1000".into()));
}

#[test]
fn test_apply_account_rejects_foreign_account() {
    let mut account = Account::new("2000", "Bank", assets_group());
    account.calculate(date(2024, 1, 31));
    let mut posting = line(date(2024, 1, 5), "1000", dec!(100), dec!(0), 1);

    let err = posting.apply_account_calculation(&account).unwrap_err();
    assert_eq!(
        err,
        CalculateError::AccountMismatch {
            expected: "1000".into(),
            got: "2000".into(),
        }
    );
}

#[test]
fn test_balance_respects_same_day_sort_order() {
    let d = date(2024, 3, 1);
    let lines = vec![
        line(d, "1000", dec!(10), dec!(0), 100),
        line(d + chrono::Days::new(7), "1000", dec!(20), dec!(0), 101),
        line(d + chrono::Days::new(14), "1000", dec!(40), dec!(0), 102),
        line(d + chrono::Days::new(14), "1000", dec!(80), dec!(0), 103),
    ];
    let mut account = account_with_lines("1000", &lines);
    account.calculate(date(2024, 3, 31));

    // First line sees only itself: every other line is strictly later.
    let mut first = lines[0].clone();
    first.apply_account_calculation(&account).unwrap();
    assert_eq!(
        first.account_values_at_posting_date().unwrap().balance,
        dec!(10)
    );

    // Sort order 102 excludes the same-day line with sort order 103.
    let mut third = lines[2].clone();
    third.apply_account_calculation(&account).unwrap();
    assert_eq!(
        third.account_values_at_posting_date().unwrap().balance,
        dec!(70)
    );

    // The last line sees everything.
    let mut last = lines[3].clone();
    last.apply_account_calculation(&account).unwrap();
    assert_eq!(
        last.account_values_at_posting_date().unwrap().balance,
        dec!(150)
    );
}

#[test]
fn test_budget_posted_window_is_month_scoped() {
    let group = BudgetAccountGroup::new(1, "Operating");
    let mut budget_account = BudgetAccount::new("B100", "Office supplies", group);
    let lines = vec![
        line(date(2024, 2, 29), "1000", dec!(500), dec!(0), 1).with_budget_account("B100"),
        line(date(2024, 3, 1), "1000", dec!(10), dec!(0), 2).with_budget_account("B100"),
        line(date(2024, 3, 10), "1000", dec!(20), dec!(0), 3).with_budget_account("B100"),
        line(date(2024, 3, 10), "1000", dec!(40), dec!(0), 4).with_budget_account("B100"),
        line(date(2024, 3, 11), "1000", dec!(80), dec!(0), 5).with_budget_account("B100"),
    ];
    for posting in &lines {
        budget_account.register_posting(posting.entry());
    }
    budget_account.add_budget_info(BudgetInfo::new(
        YearMonth::new(2024, 3).unwrap(),
        dec!(0),
        dec!(100),
    ));
    budget_account.calculate(date(2024, 3, 31));

    // The line dated the 10th with sort order 3: February is out, the 11th
    // is out, and the same-day line with sort order 4 is out.
    let mut evaluated = lines[2].clone();
    evaluated
        .apply_budget_account_calculation(&budget_account)
        .unwrap();
    let values = evaluated
        .budget_account_values_at_posting_date()
        .unwrap();
    assert_eq!(values.posted, dec!(30));
    assert_eq!(values.budget, dec!(-100));
}

#[test]
fn test_zero_defaults_for_missing_info_and_empty_ledger() {
    let mut account = Account::new("1000", "Cash", assets_group());
    account.calculate(date(2024, 1, 31));

    let mut posting = line(date(2024, 1, 5), "1000", dec!(0), dec!(0), 1);
    posting.apply_account_calculation(&account).unwrap();

    let values = posting.account_values_at_posting_date().unwrap();
    assert_eq!(values.credit, Decimal::ZERO);
    assert_eq!(values.balance, Decimal::ZERO);
}

#[test]
fn test_credit_figure_comes_from_posting_month() {
    let mut account = Account::new("1000", "Cash", assets_group());
    account.add_credit_info(CreditInfo::new(YearMonth::new(2024, 1).unwrap(), dec!(5000)));
    account.add_credit_info(CreditInfo::new(YearMonth::new(2024, 2).unwrap(), dec!(9000)));
    account.calculate(date(2024, 2, 29));

    // The line is dated January, so January's credit limit applies even
    // though the account was calculated for an end-of-February status date.
    let mut posting = line(date(2024, 1, 5), "1000", dec!(0), dec!(0), 1);
    posting.apply_account_calculation(&account).unwrap();
    assert_eq!(
        posting.account_values_at_posting_date().unwrap().credit,
        dec!(5000)
    );
}

#[test]
fn test_pre_supplied_values_short_circuit_derivation() {
    let restored = AccountValues::new(dec!(42), dec!(77));
    let ledger = vec![line(date(2024, 1, 2), "1000", dec!(999), dec!(0), 1)];
    let mut account = account_with_lines("1000", &ledger);
    account.calculate(date(2024, 1, 31));

    let mut posting = line(date(2024, 1, 5), "1000", dec!(100), dec!(0), 2)
        .with_account_values(restored);
    posting.apply_account_calculation(&account).unwrap();

    // Derivation would have produced balance 999 + 100; the restored values win.
    assert_eq!(*posting.account_values_at_posting_date().unwrap(), restored);
}

#[test]
fn test_contact_balance_is_lifetime_scoped() {
    let mut contact = ContactAccount::new("C10", "Acme Ltd");
    let lines = vec![
        line(date(2023, 11, 20), "1000", dec!(250), dec!(0), 1).with_contact_account("C10"),
        line(date(2024, 1, 15), "1000", dec!(0), dec!(100), 2).with_contact_account("C10"),
    ];
    for posting in &lines {
        contact.register_posting(posting.entry());
    }
    contact.calculate(date(2024, 1, 31));

    let mut evaluated = lines[1].clone();
    evaluated
        .apply_contact_account_calculation(&contact)
        .unwrap();
    assert_eq!(
        evaluated
            .contact_account_values_at_posting_date()
            .unwrap()
            .balance,
        dec!(150)
    );
}

#[test]
fn test_state_machine_transitions() {
    let d1 = date(2024, 1, 31);
    let d2 = date(2024, 2, 29);
    let mut posting = line(date(2024, 1, 5), "1000", dec!(100), dec!(0), 1);

    assert!(posting.status_date().is_none());
    assert!(posting.begin_calculation(d1));
    posting.finish_calculation(d1);
    assert_eq!(posting.status_date(), Some(d1));

    // Same date: memo hit, no-op.
    assert!(!posting.begin_calculation(d1));
    assert_eq!(posting.status_date(), Some(d1));

    // Different date: derived state is discarded before re-derivation.
    let mut account = account_with_lines("1000", std::slice::from_ref(&posting));
    account.calculate(d1);
    posting.apply_account_calculation(&account).unwrap();
    assert!(posting.account_values_at_posting_date().is_some());

    assert!(posting.begin_calculation(d2));
    assert!(posting.account_values_at_posting_date().is_none());
    assert!(posting.status_date().is_none());
}

#[test]
fn test_posting_value_is_debit_minus_credit() {
    let posting = line(date(2024, 1, 5), "1000", dec!(100), dec!(30), 1);
    assert_eq!(posting.posting_value(), dec!(70));
}
