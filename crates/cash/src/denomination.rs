//! Standard denominations (piasters and dinars).
//!
//! The `*_VALUE` constants are the raw denomination values; the amount
//! statics hold exactly one note or coin of that value and are built once,
//! on first use.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::amount::MoneyAmount;

pub const ZERO_VALUE: Decimal = dec!(0.00);
pub const ONE_PIASTER_VALUE: Decimal = dec!(0.01);
pub const FIVE_PIASTERS_VALUE: Decimal = dec!(0.05);
pub const TEN_PIASTERS_VALUE: Decimal = dec!(0.10);
pub const TWENTY_FIVE_PIASTERS_VALUE: Decimal = dec!(0.25);
pub const FIFTY_PIASTERS_VALUE: Decimal = dec!(0.50);
pub const ONE_DINAR_VALUE: Decimal = dec!(1.00);
pub const FIVE_DINARS_VALUE: Decimal = dec!(5.00);
pub const TEN_DINARS_VALUE: Decimal = dec!(10.00);
pub const TWENTY_DINARS_VALUE: Decimal = dec!(20.00);
pub const FIFTY_DINARS_VALUE: Decimal = dec!(50.00);

/// Every standard denomination, smallest first.
pub const STANDARD_VALUES: [Decimal; 10] = [
    ONE_PIASTER_VALUE,
    FIVE_PIASTERS_VALUE,
    TEN_PIASTERS_VALUE,
    TWENTY_FIVE_PIASTERS_VALUE,
    FIFTY_PIASTERS_VALUE,
    ONE_DINAR_VALUE,
    FIVE_DINARS_VALUE,
    TEN_DINARS_VALUE,
    TWENTY_DINARS_VALUE,
    FIFTY_DINARS_VALUE,
];

/// The additive identity: a single note of the zero denomination.
pub static ZERO: LazyLock<MoneyAmount> = LazyLock::new(|| MoneyAmount::single(ZERO_VALUE, 1));

pub static ONE_PIASTER: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(ONE_PIASTER_VALUE, 1));
pub static FIVE_PIASTERS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(FIVE_PIASTERS_VALUE, 1));
pub static TEN_PIASTERS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(TEN_PIASTERS_VALUE, 1));
pub static TWENTY_FIVE_PIASTERS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(TWENTY_FIVE_PIASTERS_VALUE, 1));
pub static FIFTY_PIASTERS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(FIFTY_PIASTERS_VALUE, 1));
pub static ONE_DINAR: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(ONE_DINAR_VALUE, 1));
pub static FIVE_DINARS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(FIVE_DINARS_VALUE, 1));
pub static TEN_DINARS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(TEN_DINARS_VALUE, 1));
pub static TWENTY_DINARS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(TWENTY_DINARS_VALUE, 1));
pub static FIFTY_DINARS: LazyLock<MoneyAmount> =
    LazyLock::new(|| MoneyAmount::single(FIFTY_DINARS_VALUE, 1));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_hold_one_note_each() {
        for (value, amount) in STANDARD_VALUES.iter().zip([
            &*ONE_PIASTER,
            &*FIVE_PIASTERS,
            &*TEN_PIASTERS,
            &*TWENTY_FIVE_PIASTERS,
            &*FIFTY_PIASTERS,
            &*ONE_DINAR,
            &*FIVE_DINARS,
            &*TEN_DINARS,
            &*TWENTY_DINARS,
            &*FIFTY_DINARS,
        ]) {
            assert_eq!(amount.count_of(*value), 1);
            assert_eq!(amount.total(), *value);
        }
    }

    #[test]
    fn standard_values_ascend() {
        assert!(STANDARD_VALUES.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ZERO.is_zero());
    }
}
