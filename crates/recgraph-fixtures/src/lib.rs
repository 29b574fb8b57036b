//! Synthetic recommendation corpora for exercising recgraph.
//!
//! The generator manufactures a self-consistent graph of users, items,
//! qualities, categories, and ratings at a caller-chosen scale. A single
//! integer knob controls the magnitude of every collection through fixed
//! multipliers; out-of-range scales silently fall back to a safe default,
//! so corpus construction can never fail.
//!
//! # Example
//!
//! ```
//! use recgraph_fixtures::DatasetGenerator;
//!
//! let dataset = DatasetGenerator::new(false, 300).generate();
//! assert_eq!(dataset.user_count(), 75_000);
//! assert_eq!(dataset.item_count(), 30_000);
//! dataset.validate().unwrap();
//! ```

pub mod config;
pub mod datasets;

pub use config::{FixtureCounts, GeneratorConfig, SCALE_DEFAULT, SCALE_MAX, SCALE_MIN};
pub use datasets::{DatasetError, DatasetGenerator, DatasetSummary, RecDataset};
