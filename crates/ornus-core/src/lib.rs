//! # Ornus Core
//!
//! The domain layer of Ornus.
//! Turns raw social-media posts into flat, storage-ready records with a
//! sentiment score. This crate has zero I/O; sentiment scoring is reached
//! through the [`ports::SentimentScorer`] trait.

pub mod domain;
pub mod error;
pub mod ports;
pub mod transform;

pub use domain::{NormalizedRecord, RawPost, UserInfo};
pub use error::{TransformError, TransformResult};
pub use transform::{EmptyTextPolicy, RecordTransformer, transform_all};
