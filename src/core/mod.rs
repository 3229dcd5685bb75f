// mod.rs - Core joining logic

pub mod aggregate;
pub mod join;

// Re-export main types for convenience
pub use aggregate::{
    aggregate, aggregate_table, AggregateOptions, AggregateStats, BarcodeResolver,
    DEFAULT_MISSING_VALUE, PREFERRED_BARCODE_COLUMNS,
};
pub use join::{join_and_filter, ValidPatients};
