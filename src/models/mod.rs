pub mod commit;
pub mod frequency;
pub mod habit;
pub mod heatmap;

pub use commit::*;
pub use frequency::*;
pub use habit::*;
pub use heatmap::*;
