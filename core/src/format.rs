//! Text formatting for currency, percentages and proportional bars.

use crate::types::Dollars;

/// `1070000` → `$1,070,000`; negatives get a leading minus.
pub fn format_dollars(amount: Dollars) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// A fixed-width text bar filled in proportion to `value / total`.
/// Out-of-range ratios are clamped; a zero total draws an empty bar.
pub fn proportional_bar(value: f64, total: f64, width: usize) -> String {
    let ratio = if total > 0.0 { (value / total).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_grouped_by_thousands() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(51_000), "$51,000");
        assert_eq!(format_dollars(1_070_000), "$1,070,000");
        assert_eq!(format_dollars(-65_000), "-$65,000");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(20.571428), "20.57%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    #[test]
    fn bar_is_clamped_to_width() {
        assert_eq!(proportional_bar(50.0, 100.0, 10).chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(proportional_bar(250.0, 100.0, 8), "████████");
        assert_eq!(proportional_bar(-5.0, 100.0, 4), "░░░░");
        assert_eq!(proportional_bar(5.0, 0.0, 4), "░░░░");
    }
}
