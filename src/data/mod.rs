/// Data layer: core types, loading, filtering, and derived values.
///
/// Architecture:
/// ```text
///  assets/tips.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (bill range precomputed)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (Dataset, FilterParams) → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────────────┐
///   │ stats / smooth / density   │  summary boxes, trendline, ridges
///   └───────────────────────────┘
/// ```
pub mod density;
pub mod filter;
pub mod loader;
pub mod model;
pub mod smooth;
pub mod stats;
