use skillmd_math::{ratio_pct, round_f64, signed_pct};

#[test]
fn given_zero_denominator_when_ratio_pct_is_used_then_zero_is_returned() {
    let got = ratio_pct(99, 0);
    assert_eq!(got, 0.0);
}

#[test]
fn given_zero_base_when_signed_pct_is_used_then_zero_is_returned() {
    let got = signed_pct(42, 0);
    assert_eq!(got, 0.0);
}

#[test]
fn given_fraction_when_rounding_then_requested_precision_is_applied() {
    let got = round_f64(12.34567, 3);
    assert_eq!(got, 12.346);
}

#[test]
fn given_one_third_when_ratio_pct_is_computed_then_one_decimal_survives() {
    let got = ratio_pct(1, 3);
    assert_eq!(got, 33.3);
}
