// Output formatting: terminal display of training, classification and
// evaluation results.

pub mod terminal;

/// Format a percentage rate, or "n/a" when there is none.
///
/// Rates are already rounded to two decimals; trailing zeros are not padded,
/// so 70.0 prints as "70%" and 33.33 as "33.33%".
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate}%"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(70.0)), "70%");
        assert_eq!(format_rate(Some(33.33)), "33.33%");
        assert_eq!(format_rate(None), "n/a");
    }
}
