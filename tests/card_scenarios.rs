//! End-to-end touch-in/touch-out scenarios on a card.

use oystercard::tariff::{MAXIMUM_BALANCE, MINIMUM_FARE, PENALTY_FARE, STANDARD_FARE};
use oystercard::{Card, CardError, Journey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Stop {
    Aldgate,
    Bank,
}

fn shape(history: &[Journey<Stop>]) -> Vec<(Option<Stop>, Option<Stop>)> {
    history
        .iter()
        .map(|j| (j.entry_station().cloned(), j.exit_station().cloned()))
        .collect()
}

fn topped_up() -> Card<Stop> {
    let mut card = Card::new();
    card.top_up(dec!(10)).unwrap();
    card
}

#[test]
fn new_card_has_zero_balance() {
    let card: Card<Stop> = Card::new();
    assert_eq!(card.balance(), Decimal::ZERO);
}

#[test]
fn complete_journey() {
    let mut card = topped_up();
    card.touch_in(Stop::Aldgate).unwrap();
    card.touch_out(Stop::Bank);

    assert_eq!(card.balance(), dec!(10) - STANDARD_FARE);
    assert_eq!(card.entry_station(), None);
    assert!(!card.in_journey());
    assert_eq!(
        shape(card.journey_history()),
        vec![(Some(Stop::Aldgate), Some(Stop::Bank))]
    );
    assert_eq!(card.journey_history()[0].fare(), STANDARD_FARE);
}

#[test]
fn missed_touch_in() {
    let mut card = topped_up();
    card.touch_out(Stop::Bank);

    assert_eq!(card.balance(), dec!(10) - PENALTY_FARE);
    assert_eq!(shape(card.journey_history()), vec![(None, Some(Stop::Bank))]);
}

#[test]
fn double_touch_in() {
    let mut card = topped_up();
    card.touch_in(Stop::Aldgate).unwrap();
    card.touch_in(Stop::Aldgate).unwrap();

    assert_eq!(card.balance(), dec!(10) - PENALTY_FARE);
    assert_eq!(
        shape(card.journey_history()),
        vec![(Some(Stop::Aldgate), None)]
    );
    assert!(card.in_journey());
    assert_eq!(card.entry_station(), Some(&Stop::Aldgate));
}

#[test]
fn double_touch_in_then_touch_out() {
    let mut card = topped_up();
    card.touch_in(Stop::Aldgate).unwrap();
    card.touch_in(Stop::Aldgate).unwrap();
    card.touch_out(Stop::Bank);

    assert_eq!(
        shape(card.journey_history()),
        vec![
            (Some(Stop::Aldgate), None),
            (Some(Stop::Aldgate), Some(Stop::Bank)),
        ]
    );
    assert_eq!(card.balance(), dec!(10) - PENALTY_FARE - STANDARD_FARE);
}

#[test]
fn limits_report_their_amounts() {
    let mut card: Card<Stop> = Card::new();

    let err = card.touch_in(Stop::Aldgate).unwrap_err();
    assert_eq!(err, CardError::InsufficientBalance { minimum: MINIMUM_FARE });
    assert_eq!(err.to_string(), "Minimum balance for travel is £1");

    let err = card.top_up(MAXIMUM_BALANCE + dec!(1)).unwrap_err();
    assert_eq!(err.to_string(), "Maximum balance of £90 exceeded!");
}

#[test]
fn repeated_reads_are_stable() {
    let mut card = topped_up();
    card.touch_in(Stop::Aldgate).unwrap();
    card.touch_out(Stop::Bank);

    assert_eq!(card.balance(), card.balance());
    assert_eq!(card.journey_history(), card.journey_history());
}
