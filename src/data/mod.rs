/// Data layer: the record model and CSV loading.
///
/// ```text
///  pharmaceuticals_lca_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → PharmaceuticalDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────────┐
///   │ PharmaceuticalDataset  │  Vec<PharmaceuticalRecord>, topic-id lookup
///   └───────────────────────┘
/// ```

pub mod loader;
pub mod model;
