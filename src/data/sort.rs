use std::cmp::Ordering;
use std::fmt;

use super::model::{NumericField, Record};

// ---------------------------------------------------------------------------
// SortKey – one per table column
// ---------------------------------------------------------------------------

/// Sortable columns, in table order. `column as usize` is the header index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Title,
    Image,
    BuyPrice,
    BuyTimeAgo,
    SellPrice,
    SellTimeAgo,
    FromLocation,
    ToLocation,
    Profit,
    ProfitPercent,
    SoldPerDay,
}

/// A borrowed cell value used for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl SortKey {
    pub const ALL: [SortKey; 11] = [
        SortKey::Title,
        SortKey::Image,
        SortKey::BuyPrice,
        SortKey::BuyTimeAgo,
        SortKey::SellPrice,
        SortKey::SellTimeAgo,
        SortKey::FromLocation,
        SortKey::ToLocation,
        SortKey::Profit,
        SortKey::ProfitPercent,
        SortKey::SoldPerDay,
    ];

    pub fn from_column(index: usize) -> Option<SortKey> {
        Self::ALL.get(index).copied()
    }

    pub fn column(self) -> usize {
        self as usize
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "Item",
            SortKey::Image => "Image",
            SortKey::BuyPrice => "Buy price",
            SortKey::BuyTimeAgo => "Bought ago",
            SortKey::SellPrice => "Sell price",
            SortKey::SellTimeAgo => "Sold ago",
            SortKey::FromLocation => "From",
            SortKey::ToLocation => "To",
            SortKey::Profit => "Profit",
            SortKey::ProfitPercent => "Profit %",
            SortKey::SoldPerDay => "Sold/day",
        }
    }

    pub fn numeric_field(self) -> Option<NumericField> {
        match self {
            SortKey::BuyPrice => Some(NumericField::BuyPrice),
            SortKey::SellPrice => Some(NumericField::SellPrice),
            SortKey::Profit => Some(NumericField::Profit),
            SortKey::ProfitPercent => Some(NumericField::ProfitPercent),
            SortKey::SoldPerDay => Some(NumericField::SoldPerDay),
            _ => None,
        }
    }

    /// Read the field this key sorts on.
    pub fn value(self, record: &Record) -> FieldValue<'_> {
        if let Some(field) = self.numeric_field() {
            return FieldValue::Number(field.read(record));
        }
        FieldValue::Text(match self {
            SortKey::Title => record.title.as_str(),
            SortKey::Image => record.image.as_str(),
            SortKey::BuyTimeAgo => record.buy_time_ago.as_str(),
            SortKey::SellTimeAgo => record.sell_time_ago.as_str(),
            SortKey::FromLocation => record.from_location.as_str(),
            _ => record.to_location.as_str(),
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SortState – current key and direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Profit,
            ascending: false,
        }
    }
}

impl SortState {
    /// Header click: same key flips direction, a new key starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if key == self.key {
            self.ascending = !self.ascending;
        } else {
            self.key = key;
            self.ascending = true;
        }
    }

    pub fn direction_label(&self) -> &'static str {
        if self.ascending {
            "ascending"
        } else {
            "descending"
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.ascending {
            "⏶"
        } else {
            "⏷"
        }
    }

    /// Stable in both directions: equal keys keep their current order.
    pub fn apply(&self, records: &[Record], indices: &mut [usize]) {
        let key = self.key;
        indices.sort_by(|&a, &b| {
            let ord = key.value(&records[a]).compare(&key.value(&records[b]));
            if self.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, profit: f64) -> Record {
        Record {
            title: title.to_string(),
            profit,
            ..Default::default()
        }
    }

    fn titles(records: &[Record], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| records[i].title.clone()).collect()
    }

    #[test]
    fn test_default_is_profit_descending() {
        let records = vec![rec("loss", -5.0), rec("gain", 10.0)];
        let mut idx = vec![0, 1];
        SortState::default().apply(&records, &mut idx);
        assert_eq!(titles(&records, &idx), vec!["gain", "loss"]);
    }

    #[test]
    fn test_select_toggles_and_resets() {
        let mut state = SortState::default();
        state.select(SortKey::Profit);
        assert!(state.ascending);
        state.select(SortKey::Profit);
        assert!(!state.ascending);
        state.select(SortKey::Title);
        assert_eq!(state.key, SortKey::Title);
        assert!(state.ascending);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let records = vec![rec("a", 1.0), rec("b", 2.0), rec("c", 1.0), rec("d", 2.0)];
        let mut idx = vec![0, 1, 2, 3];
        let mut state = SortState {
            key: SortKey::Profit,
            ascending: true,
        };
        state.apply(&records, &mut idx);
        assert_eq!(titles(&records, &idx), vec!["a", "c", "b", "d"]);

        let mut idx = vec![0, 1, 2, 3];
        state.ascending = false;
        state.apply(&records, &mut idx);
        assert_eq!(titles(&records, &idx), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_descending_inverts_ascending_without_ties() {
        let records = vec![rec("pear", 0.0), rec("apple", 0.0), rec("fig", 0.0)];
        let mut state = SortState::default();
        state.select(SortKey::Title);
        let mut up = vec![0, 1, 2];
        state.apply(&records, &mut up);
        state.select(SortKey::Title);
        let mut down = up.clone();
        state.apply(&records, &mut down);
        let mut reversed = up.clone();
        reversed.reverse();
        assert_eq!(down, reversed);
        assert_eq!(titles(&records, &up), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_numeric_sort_is_not_lexicographic() {
        let records = vec![rec("x", 9.0), rec("y", 10.0), rec("z", -1.0)];
        let mut idx = vec![0, 1, 2];
        SortState {
            key: SortKey::Profit,
            ascending: true,
        }
        .apply(&records, &mut idx);
        assert_eq!(idx, vec![2, 0, 1]);
    }

    #[test]
    fn test_empty_text_sorts_first() {
        let records = vec![rec("b", 0.0), rec("", 0.0), rec("a", 0.0)];
        let mut idx = vec![0, 1, 2];
        SortState {
            key: SortKey::Title,
            ascending: true,
        }
        .apply(&records, &mut idx);
        assert_eq!(idx, vec![1, 2, 0]);
    }

    #[test]
    fn test_age_headers_differ_from_velocity() {
        assert_eq!(SortKey::BuyTimeAgo.label(), "Bought ago");
        assert_eq!(SortKey::SellTimeAgo.label(), "Sold ago");
        assert_ne!(SortKey::SellTimeAgo.label(), SortKey::SoldPerDay.label());
    }

    #[test]
    fn test_mixed_values_compare_equal() {
        let a = FieldValue::Number(1.0);
        let b = FieldValue::Text("x");
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_column_mapping() {
        assert_eq!(SortKey::from_column(0), Some(SortKey::Title));
        assert_eq!(SortKey::from_column(8), Some(SortKey::Profit));
        assert_eq!(SortKey::from_column(10), Some(SortKey::SoldPerDay));
        assert_eq!(SortKey::from_column(11), None);
        for (i, key) in SortKey::ALL.iter().enumerate() {
            assert_eq!(key.column(), i);
        }
    }
}
