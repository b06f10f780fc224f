use serde::Serialize;

/// One labeled slice of a proportional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub value: u32,
    /// Percentage of the total, 0.0..=100.0
    pub percent_share: f64,
}

/// `100 * value / total`, defined as 0 when the total is 0.
pub fn percent(value: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 * 100.0 / total as f64
    }
}

pub fn shares<'a, I>(items: I) -> Vec<Share>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let items: Vec<(&str, u32)> = items.into_iter().collect();
    let total: u32 = items.iter().map(|(_, value)| value).sum();

    items
        .into_iter()
        .map(|(label, value)| Share {
            label: label.to_string(),
            value,
            percent_share: percent(value, total),
        })
        .collect()
}
