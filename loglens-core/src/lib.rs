pub mod conf;
pub mod entity;
pub mod error;
pub mod filter;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod pivot;
pub mod series;
pub mod source;
pub mod summary;
pub mod taxonomy;

#[cfg(test)]
mod tests;
