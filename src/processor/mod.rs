pub mod orderer;
pub mod pipeline;
pub mod record_parser;
pub mod segmenter;
pub mod trip_stats;

pub use pipeline::{run_pipeline, PipelineOutcome};

#[cfg(test)]
pub(crate) mod test_support;
