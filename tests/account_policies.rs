//! End-to-end exercises of the public surface: cipher round-trips and the
//! three withdrawal policies driven through the re-exported types.

use chrono::{Days, Local, NaiveDate};
use pocket_ledger::cipher;
use pocket_ledger::display::RecordingReporter;
use pocket_ledger::{Account, LedgerError, WithdrawalPolicy};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[test]
fn cipher_round_trips_through_the_alphabet() {
    let (alphabet, encoded) = cipher::encode("meet me at the usual place", 7);
    assert_eq!(alphabet.iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
    assert_ne!(encoded, "meet me at the usual place");
    assert_eq!(cipher::decode(&encoded, 7), "meet me at the usual place");
}

#[test]
fn cipher_case_is_dropped_not_restored() {
    let (_, encoded) = cipher::encode("Meet At Noon", 2);
    assert_eq!(cipher::decode(&encoded, 2), "meet at noon");
}

#[test]
fn construction_failures_are_distinguishable() {
    let tomorrow = today() + Days::new(1);
    let future = Account::open("Rainy", "1234", tomorrow, WithdrawalPolicy::Savings);
    assert!(matches!(
        future,
        Err(LedgerError::FutureCreationDate { .. })
    ));

    let garbled =
        Account::open_from_str_date("Rainy", "1234", "next tuesday", WithdrawalPolicy::Savings);
    assert!(matches!(garbled, Err(LedgerError::InvalidCreationDate(_))));
}

#[test]
fn a_session_across_all_three_policies() {
    let opened = today() - Days::new(365);
    let mut reporter = RecordingReporter::new();

    let mut basic =
        Account::open_with_balance("Ana", 1u64, opened, WithdrawalPolicy::Unrestricted, 20.0)
            .unwrap();
    basic.withdraw_with(100.0, &mut reporter);
    assert_eq!(basic.view_balance(), -80.0);

    let mut savings =
        Account::open_with_balance("Ben", 2u64, opened, WithdrawalPolicy::Savings, 20.0).unwrap();
    savings.withdraw_with(100.0, &mut reporter);
    assert_eq!(savings.view_balance(), 20.0);
    savings.withdraw_with(15.0, &mut reporter);
    assert_eq!(savings.view_balance(), 5.0);

    let mut checking =
        Account::open_with_balance("Cho", 3u64, opened, WithdrawalPolicy::Checking, 20.0).unwrap();
    checking.withdraw_with(100.0, &mut reporter);
    assert_eq!(checking.view_balance(), -110.0);
    checking.withdraw_with(10.0, &mut reporter);
    assert_eq!(checking.view_balance(), -120.0);

    assert_eq!(
        reporter.reported,
        vec![-80.0, 20.0, 5.0, -110.0, -120.0]
    );
}

#[test]
fn deposits_ignore_policy() {
    let mut reporter = RecordingReporter::new();
    for policy in [
        WithdrawalPolicy::Unrestricted,
        WithdrawalPolicy::Savings,
        WithdrawalPolicy::Checking,
    ] {
        let mut account =
            Account::open_with_balance("Dee", "x", today(), policy, 10.0).unwrap();
        account.deposit_with(5.0, &mut reporter);
        assert_eq!(account.view_balance(), 15.0);
        account.deposit_with(-5.0, &mut reporter);
        assert_eq!(account.view_balance(), 15.0);
    }
    assert_eq!(reporter.reported, vec![15.0, 15.0, 15.0, 15.0, 15.0, 15.0]);
}
