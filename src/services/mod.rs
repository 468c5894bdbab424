pub mod frequency_codec;
pub mod heatmap_engine;
pub mod stats;
