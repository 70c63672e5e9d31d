use super::currency::Currency;
use rust_decimal::prelude::*;

const NBSP: char = '\u{a0}';

/// Renders `amount` the way the Polish locale prints money, with the ISO code
/// in place of the currency symbol: `10 000,00 PLN`, `2000,00 EUR`.
///
/// Digit grouping only kicks in from five integer digits upwards, and both the
/// group separator and the space before the code are non-breaking.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut text = String::with_capacity(digits.len() + 8);
    if negative {
        text.push('-');
    }
    text.push_str(&group_thousands(integer));
    text.push(',');
    text.push_str(fraction);
    text.push(NBSP);
    text.push_str(currency.code());
    text
}

fn group_thousands(integer: &str) -> String {
    if integer.len() < 5 {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn plain(text: String) -> String {
        text.replace(NBSP, " ")
    }

    #[test_case(dec!(0), Currency::Pln, "0,00 PLN" ; "zero")]
    #[test_case(dec!(300), Currency::Pln, "300,00 PLN" ; "hundreds")]
    #[test_case(dec!(2000), Currency::Eur, "2000,00 EUR" ; "four digits stay ungrouped")]
    #[test_case(dec!(10000), Currency::Pln, "10 000,00 PLN" ; "five digits")]
    #[test_case(dec!(35000), Currency::Pln, "35 000,00 PLN" ; "dashboard total")]
    #[test_case(dec!(1234567.891), Currency::Usd, "1 234 567,89 USD" ; "millions")]
    #[test_case(dec!(0.005), Currency::Pln, "0,01 PLN" ; "half rounds away from zero")]
    #[test_case(dec!(-12345.6), Currency::Eur, "-12 345,60 EUR" ; "negative")]
    #[test_case(dec!(-0.001), Currency::Pln, "0,00 PLN" ; "negative rounding to zero")]
    fn formats_polish_style(amount: Decimal, currency: Currency, expected: &str) {
        assert_eq!(plain(format_amount(amount, currency)), expected);
    }

    #[test]
    fn uses_non_breaking_spaces() {
        assert_eq!(format_amount(dec!(25000), Currency::Pln), "25\u{a0}000,00\u{a0}PLN");
    }
}
