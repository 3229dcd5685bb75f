// mod.rs - File loaders

pub mod csv;
pub mod features;
pub mod tsv;

pub use features::{load_feature_list, read_feature_list};
