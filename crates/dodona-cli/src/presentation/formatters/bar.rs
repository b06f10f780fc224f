/// Widest bar drawn in console charts.
pub const MAX_BAR_WIDTH: usize = 40;

/// Room left for the bar after a label column and the trailing figures,
/// capped by the terminal width when stdout is a terminal.
pub fn bar_width(label_width: usize) -> usize {
    let reserved = label_width + 20;
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| (w as usize).saturating_sub(reserved))
        .unwrap_or(MAX_BAR_WIDTH)
        .clamp(10, MAX_BAR_WIDTH)
}

/// Horizontal bar scaled so that `max` fills `width` cells.
pub fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 || width == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    let filled = if value > 0 { filled.max(1) } else { 0 };
    "█".repeat(filled.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10, 10, 8).chars().count(), 8);
        assert_eq!(bar(5, 10, 8).chars().count(), 4);
        assert_eq!(bar(0, 10, 8), "");
    }

    #[test]
    fn test_small_non_zero_value_stays_visible() {
        assert_eq!(bar(1, 500, 10).chars().count(), 1);
    }

    #[test]
    fn test_empty_chart_draws_nothing() {
        assert_eq!(bar(3, 0, 10), "");
    }

    #[test]
    fn test_bar_width_is_bounded() {
        let width = bar_width(16);
        assert!((10..=MAX_BAR_WIDTH).contains(&width));
    }
}
