/// Share as printed next to charts: one decimal, e.g. `14.8%`.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Whole-number share, e.g. `70%`.
pub fn whole_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// `n = 57`
pub fn sample(count: u32) -> String {
    format!("n = {}", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        assert_eq!(percent(14.814_814), "14.8%");
        assert_eq!(percent(100.0), "100.0%");
        assert_eq!(whole_percent(69.9), "70%");
    }

    #[test]
    fn test_sample() {
        assert_eq!(sample(57), "n = 57");
    }
}
