mod common;

use split_ledger::{
    core::services::ServiceError,
    domain::{Expense, User},
    errors::SplitError,
};

use common::app_with_group;

fn split_error(err: ServiceError) -> SplitError {
    match err {
        ServiceError::Split(inner) => inner,
        other => panic!("expected a split error, got {other:?}"),
    }
}

#[test]
fn trip_scenario_settles_to_one_transfer() {
    let mut app = app_with_group("trip", &["a", "b", "c"]);
    app.post_expense("trip", &Expense::equal("a", 90.0, ["a", "b", "c"]))
        .unwrap();
    app.post_expense("trip", &Expense::exact("b", 30.0, ["b", "c"], vec![0.0, 30.0]))
        .unwrap();

    assert_eq!(
        app.net_positions("trip").unwrap(),
        vec![
            ("a".to_string(), 60.0),
            ("b".to_string(), 0.0),
            ("c".to_string(), -60.0),
        ]
    );

    let transactions = app.simplified_balances("trip").unwrap();
    assert!(transactions.len() <= 2);
    let to_a: f64 = transactions
        .iter()
        .filter(|txn| txn.creditor == "a")
        .map(|txn| txn.amount)
        .sum();
    assert_eq!(to_a, 60.0);
    assert_eq!(transactions[0].to_string(), "c owes a: 60.00");
}

#[test]
fn equal_split_remainder_lands_on_one_member() {
    let mut app = app_with_group("flat", &["a", "b", "c"]);
    app.post_expense("flat", &Expense::equal("a", 100.0, ["a", "b", "c"]))
        .unwrap();

    let group = app.groups().get("flat").unwrap();
    let owed = group.ledger().balance("a", "b") + group.ledger().balance("a", "c");
    assert!((owed - 66.67).abs() < 1e-9);
    assert_eq!(group.ledger().balance("a", "b"), 33.34);
    assert_eq!(group.ledger().balance("a", "c"), 33.33);
}

#[test]
fn exact_and_percent_inputs_are_validated() {
    let mut app = app_with_group("g", &["a", "b"]);

    let err = app
        .post_expense("g", &Expense::exact("a", 10.0, ["a", "b"], vec![5.0, 4.0]))
        .unwrap_err();
    assert!(matches!(split_error(err), SplitError::SplitMismatch(_)));

    let err = app
        .post_expense("g", &Expense::percent("a", 10.0, ["a", "b"], vec![50.0, 49.0]))
        .unwrap_err();
    assert!(matches!(split_error(err), SplitError::SplitMismatch(_)));

    let err = app
        .post_expense("g", &Expense::exact("a", 10.0, ["a", "b"], vec![10.0]))
        .unwrap_err();
    assert!(matches!(split_error(err), SplitError::SplitMismatch(_)));

    assert!(app.groups().get("g").unwrap().ledger().is_settled());

    app.post_expense("g", &Expense::percent("a", 10.0, ["a", "b"], vec![30.0, 70.0]))
        .unwrap();
    assert_eq!(app.groups().get("g").unwrap().ledger().balance("a", "b"), 7.0);
}

#[test]
fn membership_is_checked_before_posting() {
    let mut app = app_with_group("g", &["a", "b"]);
    app.create_user(User::new("z", "Zed")).unwrap();

    let err = app
        .post_expense("g", &Expense::equal("a", 10.0, ["a", "z"]))
        .unwrap_err();
    assert_eq!(
        split_error(err),
        SplitError::Membership {
            user: "z".into(),
            group: "g".into()
        }
    );

    let err = app
        .post_expense("nowhere", &Expense::equal("a", 10.0, ["a"]))
        .unwrap_err();
    assert_eq!(split_error(err), SplitError::UnknownGroup("nowhere".into()));

    app.add_user_to_group("g", "z").unwrap();
    app.post_expense("g", &Expense::equal("a", 10.0, ["a", "z"]))
        .unwrap();
    assert_eq!(app.groups().get("g").unwrap().ledger().balance("a", "z"), 5.0);
}

#[test]
fn simplification_is_idempotent() {
    let mut app = app_with_group("g", &["a", "b", "c", "d"]);
    app.post_expense("g", &Expense::equal("a", 40.0, ["a", "b", "c", "d"]))
        .unwrap();
    app.post_expense("g", &Expense::exact("b", 25.0, ["c", "d"], vec![5.0, 20.0]))
        .unwrap();
    app.post_expense("g", &Expense::percent("d", 10.0, ["a", "d"], vec![50.0, 50.0]))
        .unwrap();

    let before = app.net_positions("g").unwrap();
    let first = app.simplified_balances("g").unwrap();
    let second = app.simplified_balances("g").unwrap();
    assert_eq!(first, second);
    assert_eq!(app.net_positions("g").unwrap(), before);
}

#[test]
fn user_view_filters_transfers() {
    let mut app = app_with_group("g", &["a", "b", "c"]);
    app.post_expense("g", &Expense::exact("a", 30.0, ["b", "c"], vec![10.0, 20.0]))
        .unwrap();

    let for_b = app.simplified_balances_for_user("g", "b").unwrap();
    assert_eq!(for_b.len(), 1);
    assert_eq!(for_b[0].to_string(), "b owes a: 10.00");

    let for_a = app.simplified_balances_for_user("g", "a").unwrap();
    assert_eq!(for_a.len(), 2);
    assert!(app.simplified_balances_for_user("g", "ghost").unwrap().is_empty());
}
