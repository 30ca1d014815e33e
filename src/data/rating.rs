use super::model::Record;

/// One scored opportunity; `index` points into the full record list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rated {
    pub index: usize,
    pub score: f64,
}

/// Score each visible record relative to the visible averages:
/// `(profit% / mean profit%) * (sold/day / mean sold/day)`.
///
/// A record scoring 1.0 is exactly average on both axes. A zero mean
/// contributes a zero factor. Result is sorted best first, stable on ties.
pub fn rate(records: &[Record], visible: &[usize]) -> Vec<Rated> {
    if visible.is_empty() {
        return Vec::new();
    }
    let n = visible.len() as f64;
    let mean_percent = visible.iter().map(|&i| records[i].profit_percent).sum::<f64>() / n;
    let mean_sold = visible.iter().map(|&i| records[i].sold_per_day).sum::<f64>() / n;

    let ratio = |v: f64, mean: f64| if mean == 0.0 { 0.0 } else { v / mean };

    let mut rated: Vec<Rated> = visible
        .iter()
        .map(|&index| {
            let rec = &records[index];
            Rated {
                index,
                score: ratio(rec.profit_percent, mean_percent) * ratio(rec.sold_per_day, mean_sold),
            }
        })
        .collect();
    rated.sort_by(|a, b| b.score.total_cmp(&a.score));
    rated
}
