/// Data layer: record types, loading, filtering, sorting and rating.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Record> (numeric coercion in model)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive range bounds → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  stable reorder of visible indices by SortKey
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  rating   │  margin × velocity score over the visible rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod rating;
pub mod sort;
