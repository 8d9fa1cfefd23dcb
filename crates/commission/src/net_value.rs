use rust_decimal::Decimal;

use salescomp_core::{MinorUnits, Percent};

/// Tax-exclusive value of an invoice in major currency units.
///
/// `gross / (1 + vat/100)` when the VAT rate is strictly positive. A zero or
/// negative rate removes no tax: the gross amount is returned unchanged.
pub fn calculate_net_value(gross_value: MinorUnits, vat: Percent) -> Decimal {
    let gross = gross_value.to_major();
    let vat_rate = vat.as_rate();
    if vat_rate > Decimal::ZERO {
        gross / (Decimal::ONE + vat_rate)
    } else {
        gross
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_vat_keeps_gross() {
        let net = calculate_net_value(MinorUnits::new(324_222), Percent::ZERO);
        assert_eq!(net, dec!(3242.22));
    }

    #[test]
    fn positive_vat_is_removed() {
        let net = calculate_net_value(MinorUnits::new(120_000), Percent::new(dec!(20)));
        assert_eq!(net, dec!(1000));

        let net = calculate_net_value(MinorUnits::new(100_000), Percent::new(dec!(20)));
        assert_eq!(net.round_dp(4), dec!(833.3333));
    }

    #[test]
    fn negative_vat_removes_no_tax() {
        let net = calculate_net_value(MinorUnits::new(100_000), Percent::new(dec!(-19)));
        assert_eq!(net, dec!(1000));
    }

    #[test]
    fn fractional_vat_is_exact() {
        let net = calculate_net_value(MinorUnits::new(10_750), Percent::new(dec!(7.5)));
        assert_eq!(net, dec!(100));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn non_positive_vat_returns_gross_over_100(
            gross in 0u64..10_000_000_000u64,
            vat in -10_000i64..=0i64,
        ) {
            let net = calculate_net_value(MinorUnits::new(gross), Percent::new(Decimal::new(vat, 2)));
            prop_assert_eq!(net, Decimal::from(gross) / Decimal::ONE_HUNDRED);
        }

        #[test]
        fn positive_vat_matches_formula(
            gross in 0u64..10_000_000_000u64,
            vat in 1i64..=10_000i64,
        ) {
            let vat = Decimal::new(vat, 2);
            let net = calculate_net_value(MinorUnits::new(gross), Percent::new(vat));
            let expected = (Decimal::from(gross) / Decimal::ONE_HUNDRED)
                / (Decimal::ONE + vat / Decimal::ONE_HUNDRED);
            prop_assert_eq!(net, expected);
            prop_assert!(net <= Decimal::from(gross) / Decimal::ONE_HUNDRED);
        }
    }
}
