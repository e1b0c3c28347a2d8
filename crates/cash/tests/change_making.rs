//! Black-box checks of the public cash API: the drawer scenarios a vending
//! machine runs into, driven only through exported items.

#![allow(deprecated)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tillkit_cash::denomination::{
    FIVE_DINARS_VALUE, ONE_DINAR_VALUE, ONE_PIASTER_VALUE, TEN_DINARS_VALUE,
};
use tillkit_cash::{
    FIFTY_PIASTERS, FIVE_DINARS, FIVE_PIASTERS, MoneyAmount, ONE_DINAR, ONE_PIASTER, TEN_DINARS,
    TEN_PIASTERS, TWENTY_FIVE_PIASTERS, ZERO,
};
use tillkit_core::DomainError;

fn setup() {
    tillkit_observability::init();
}

fn note(value: Decimal, count: i64) -> anyhow::Result<MoneyAmount> {
    Ok(MoneyAmount::from_single_denomination(value, count)?)
}

#[test]
fn pays_out_one_note_from_a_stack() -> anyhow::Result<()> {
    setup();

    let drawer = note(dec!(10.00), 5)?;
    let left = drawer.minus(&TEN_DINARS)?;

    assert_eq!(left.total(), dec!(40.00));
    assert_eq!(left.count_of(TEN_DINARS_VALUE), 4);
    assert_eq!(left.to_string(), "40.00");
    Ok(())
}

#[test]
fn breaks_a_missing_note_into_smaller_ones() -> anyhow::Result<()> {
    setup();

    let drawer = FIVE_DINARS.plus(&ONE_DINAR.times(8)?)?;
    let left = drawer.minus(&TEN_DINARS)?;

    assert_eq!(left, ONE_DINAR.times(3)?);
    assert_eq!(left.count_of(FIVE_DINARS_VALUE), 0);
    assert_eq!(left.count_of(ONE_DINAR_VALUE), 3);
    Ok(())
}

#[test]
fn substitutes_coins_with_either_algorithm() -> anyhow::Result<()> {
    setup();

    let drawer = FIVE_DINARS
        .plus(&TEN_PIASTERS.times(2)?)?
        .plus(&FIVE_PIASTERS)?
        .plus(&ONE_PIASTER)?;
    let requested = FIVE_PIASTERS.times(5)?.plus(&ONE_PIASTER)?;

    assert_eq!(drawer.minus_complex(&requested)?.total(), dec!(5.00));
    assert_eq!(drawer.minus(&requested)?.total(), dec!(5.00));
    Ok(())
}

#[test]
fn empty_drawer_cannot_pay() {
    setup();

    let err = ZERO.minus(&ONE_DINAR).unwrap_err();
    assert!(matches!(err, DomainError::InsufficientChange(_)));

    let err = ZERO.minus_complex(&ONE_DINAR).unwrap_err();
    assert!(err.is_insufficient_change());
}

#[test]
fn greedy_gap_is_covered_by_substitution() -> anyhow::Result<()> {
    setup();

    let drawer = note(dec!(0.25), 1)?.plus(&note(dec!(0.10), 3)?)?;
    let requested = note(dec!(0.10), 1)?.plus(&note(dec!(0.20), 1)?)?;

    assert!(drawer.minus(&requested).is_err());
    assert_eq!(drawer.minus_complex(&requested)?, *TWENTY_FIVE_PIASTERS);
    Ok(())
}

#[test]
fn renders_two_decimals() -> anyhow::Result<()> {
    setup();

    let change = FIFTY_PIASTERS
        .plus(&TWENTY_FIVE_PIASTERS)?
        .plus(&ONE_PIASTER)?;
    assert_eq!(change.to_string(), "0.76");
    assert_eq!(change.amount(), 0.76);
    Ok(())
}

#[test]
fn rejects_negative_arguments() {
    setup();

    assert!(matches!(
        MoneyAmount::from_single_denomination(dec!(-1), 1),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(ONE_DINAR.times(-1), Err(DomainError::InvalidArgument(_))));
}

#[test]
fn oversized_drawers_are_rejected() {
    setup();

    let err = MoneyAmount::from_single_denomination(Decimal::MAX, 2).unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));

    let many = MoneyAmount::from_single_denomination(ONE_PIASTER_VALUE, i64::MAX)
        .expect("fits in a decimal");
    let err = MoneyAmount::sum([&many, &many, &many]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));
}

#[test]
fn constants_are_shared_across_threads() {
    setup();

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            std::thread::spawn(move || {
                let drawer = ONE_DINAR.times(10 * n).expect("scale drawer");
                drawer.minus(&FIVE_DINARS).expect("pay out").total()
            })
        })
        .collect();

    let totals: Vec<Decimal> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker panicked"))
        .collect();
    assert_eq!(totals, vec![dec!(5.00), dec!(15.00), dec!(25.00), dec!(35.00)]);
}
