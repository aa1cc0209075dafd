pub mod etl;
pub mod expander;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{FetchBatch, TransformResult};
pub use crate::domain::ports::{DayFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
