//! Post transformation - field extraction, date reformatting, sentiment.

pub mod date;
pub mod stats;

mod transformer;


pub use transformer::{EmptyTextPolicy, RecordTransformer, transform_all};
