//! Display strings for board values and daily changes.

const THOUSANDS_SEPARATOR: char = ' ';
const MINUS_SIGN: char = '\u{2212}';

/// Values from 1000 up are rounded to an integer and grouped by thousands
/// (`68 440`); smaller values keep two decimals (`999.50`).
pub fn format_number(n: f64) -> String {
    if n >= 1000.0 {
        group_thousands(&format!("{}", n.round() as i64))
    } else {
        fixed_2(n)
    }
}

/// Signed percentage with two decimals: `+1.25%`, `−0.80%`, `0.00%`.
pub fn format_change(pct: f64) -> String {
    let sign = if pct > 0.0 {
        "+".to_string()
    } else if pct < 0.0 {
        MINUS_SIGN.to_string()
    } else {
        String::new()
    };
    format!("{}{}%", sign, fixed_2(pct.abs()))
}

/// Styling bucket for a change cell. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Positive,
    Negative,
}

impl ChangeTone {
    pub fn of(pct: f64) -> Self {
        if pct >= 0.0 { ChangeTone::Positive } else { ChangeTone::Negative }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeTone::Positive => "pos",
            ChangeTone::Negative => "neg",
        }
    }
}

/// Two decimals, exact ties rounded away from zero like `round()` does for
/// integers. `{:.2}` alone would round ties to even (`0.125` -> `0.12`).
fn fixed_2(n: f64) -> String {
    let sign = if n < 0.0 { "-" } else { "" };
    let magnitude = n.abs();
    // A hundredths tie is exactly m/8 with m odd; scaling by 8 and by 100 is exact there.
    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 && eighths < 2f64.powi(50) {
        let cents = (magnitude * 100.0).ceil() as u64;
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }
    format!("{}{:.2}", sign, magnitude)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
