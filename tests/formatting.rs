use feis_board_wasm::domain::market_data::{
    ChangeTone, catalog::ASSETS, format_change, format_number,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn decimals(rendered: &str) -> usize {
    rendered.split_once('.').map_or(0, |(_, frac)| frac.len())
}

#[test]
fn catalog_values_follow_the_decimal_rule() {
    for asset in ASSETS {
        let rendered = format_number(asset.value);
        let expected = if asset.value >= 1000.0 { 0 } else { 2 };
        assert_eq!(decimals(&rendered), expected, "{} -> {}", asset.id, rendered);
    }
}

#[test]
fn board_cells_snapshot() {
    let lines: Vec<String> = ASSETS
        .iter()
        .map(|a| {
            format!(
                "{} | {} | {} | {}",
                a.name,
                format_number(a.value),
                format_change(a.change_pct),
                ChangeTone::of(a.change_pct).css_class()
            )
        })
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    S&P 500 | 5 098 | −0.27% | neg
    CAC 40 | 7 420 | +0.32% | pos
    MSCI World | 3 221 | +0.18% | pos
    Bitcoin | 68 440 | +1.25% | pos
    Ethereum | 3 905 | −0.80% | neg
    ");
}

#[test]
fn change_examples() {
    insta::assert_snapshot!(format_change(0.0), @"0.00%");
    insta::assert_snapshot!(format_change(1.25), @"+1.25%");
    insta::assert_snapshot!(format_change(-0.8), @"−0.80%");
}

#[test]
fn two_decimal_ties_round_up() {
    insta::assert_snapshot!(format_number(0.125), @"0.13");
    insta::assert_snapshot!(format_number(2.675), @"2.67");
    insta::assert_snapshot!(format_change(1.625), @"+1.63%");
}

#[quickcheck]
fn number_decimals_depend_on_magnitude(n: f64) -> TestResult {
    if !n.is_finite() {
        return TestResult::discard();
    }
    let rendered = format_number(n);
    let expected = if n >= 1000.0 { 0 } else { 2 };
    TestResult::from_bool(decimals(&rendered) == expected)
}

#[quickcheck]
fn change_sign_matches_input(pct: f64) -> TestResult {
    if !pct.is_finite() {
        return TestResult::discard();
    }
    let rendered = format_change(pct);
    let signed_ok = if pct > 0.0 {
        rendered.starts_with('+')
    } else if pct < 0.0 {
        rendered.starts_with('\u{2212}')
    } else {
        rendered.starts_with(|c: char| c.is_ascii_digit())
    };
    TestResult::from_bool(signed_ok && rendered.ends_with('%') && decimals(&rendered) == 3)
}
