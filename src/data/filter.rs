use std::collections::BTreeMap;

use thiserror::Error;

use super::model::{NumericField, Record};

// ---------------------------------------------------------------------------
// Filter inputs: raw text typed by the user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Min,
    Max,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Min => f.write_str("min"),
            Side::Max => f.write_str("max"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("{side} {field} must be a number, got '{input}'")]
    InvalidBound {
        field: NumericField,
        side: Side,
        input: String,
    },
}

/// Text of one min/max pair, as edited in the filter panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeInput {
    pub min: String,
    pub max: String,
}

/// The ten filter text boxes. Blank text means "no bound".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterInputs {
    pub ranges: BTreeMap<NumericField, RangeInput>,
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self {
            ranges: NumericField::ALL
                .iter()
                .map(|&f| (f, RangeInput::default()))
                .collect(),
        }
    }
}

impl FilterInputs {
    pub fn range_mut(&mut self, field: NumericField) -> &mut RangeInput {
        self.ranges.entry(field).or_default()
    }

    /// Set one bound's text. Convenience for callers and tests.
    pub fn set(&mut self, field: NumericField, side: Side, text: impl Into<String>) {
        let range = self.range_mut(field);
        match side {
            Side::Min => range.min = text.into(),
            Side::Max => range.max = text.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse every non-blank box. The first bad value aborts the parse.
    pub fn parse(&self) -> Result<FilterBounds, FilterError> {
        let mut bounds = FilterBounds::default();
        for (&field, range) in &self.ranges {
            let min = parse_bound(&range.min, field, Side::Min)?;
            let max = parse_bound(&range.max, field, Side::Max)?;
            if min.is_some() || max.is_some() {
                bounds.ranges.insert(field, Bound { min, max });
            }
        }
        Ok(bounds)
    }
}

fn parse_bound(text: &str, field: NumericField, side: Side) -> Result<Option<f64>, FilterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| FilterError::InvalidBound {
            field,
            side,
            input: text.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Parsed bounds and the predicate
// ---------------------------------------------------------------------------

/// Inclusive range on one field; `None` on either side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bound {
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |m| value >= m) && self.max.map_or(true, |m| value <= m)
    }
}

/// Active bounds per numeric field. A field absent from the map is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBounds {
    pub ranges: BTreeMap<NumericField, Bound>,
}

impl FilterBounds {
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.ranges
            .iter()
            .all(|(field, bound)| bound.contains(field.read(record)))
    }
}

/// Return indices of records that satisfy every bound, in input order.
pub fn filtered_indices(records: &[Record], bounds: &FilterBounds) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| bounds.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(buy: f64, profit: f64, sold: f64) -> Record {
        Record {
            title: format!("item {buy}"),
            buy_price: buy,
            profit,
            sold_per_day: sold,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            make_record(100.0, 50.0, 3.0),
            make_record(200.0, -5.0, 10.0),
            make_record(300.0, 60.0, 1.0),
            make_record(400.0, 10.0, 7.0),
        ]
    }

    fn bounds(pairs: &[(NumericField, Side, &str)]) -> FilterBounds {
        let mut inputs = FilterInputs::default();
        for (field, side, text) in pairs {
            inputs.set(*field, *side, *text);
        }
        inputs.parse().unwrap()
    }

    #[test]
    fn test_empty_inputs_keep_everything() {
        let records = sample();
        let b = FilterInputs::default().parse().unwrap();
        assert!(b.is_empty());
        assert_eq!(filtered_indices(&records, &b), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let records = sample();
        let b = bounds(&[
            (NumericField::BuyPrice, Side::Min, "200"),
            (NumericField::BuyPrice, Side::Max, "300"),
        ]);
        assert_eq!(filtered_indices(&records, &b), vec![1, 2]);
    }

    #[test]
    fn test_min_profit_excludes_all() {
        let records = sample();
        let b = bounds(&[(NumericField::Profit, Side::Min, "61")]);
        assert!(filtered_indices(&records, &b).is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let records = sample();
        let a = bounds(&[(NumericField::Profit, Side::Min, "0")]);
        let b = bounds(&[(NumericField::SoldPerDay, Side::Min, "3")]);
        let both = bounds(&[
            (NumericField::Profit, Side::Min, "0"),
            (NumericField::SoldPerDay, Side::Min, "3"),
        ]);
        let only_a = filtered_indices(&records, &a);
        let only_b = filtered_indices(&records, &b);
        let intersection: Vec<usize> = only_a.into_iter().filter(|i| only_b.contains(i)).collect();
        assert_eq!(filtered_indices(&records, &both), intersection);
        assert_eq!(intersection, vec![0, 3]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = sample();
        let b = bounds(&[(NumericField::BuyPrice, Side::Max, "350")]);
        let once: Vec<Record> = filtered_indices(&records, &b)
            .into_iter()
            .map(|i| records[i].clone())
            .collect();
        let twice: Vec<Record> = filtered_indices(&once, &b)
            .into_iter()
            .map(|i| once[i].clone())
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_is_blank() {
        let b = bounds(&[(NumericField::Profit, Side::Max, "   ")]);
        assert!(b.is_empty());
    }

    #[test]
    fn test_invalid_bound_reports_field_and_side() {
        let mut inputs = FilterInputs::default();
        inputs.set(NumericField::Profit, Side::Min, "abc");
        let err = inputs.parse().unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidBound {
                field: NumericField::Profit,
                side: Side::Min,
                input: "abc".into(),
            }
        );
        assert_eq!(err.to_string(), "min Profit must be a number, got 'abc'");
    }

    #[test]
    fn test_clear_resets_all_boxes() {
        let mut inputs = FilterInputs::default();
        inputs.set(NumericField::SellPrice, Side::Max, "10");
        inputs.clear();
        assert_eq!(inputs, FilterInputs::default());
        assert_eq!(inputs.ranges.len(), 5);
    }
}
