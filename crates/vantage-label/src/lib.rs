//! # vantage-label
//!
//! The compositing half of Vantage. Loads the per-object segmentation masks
//! of each rendered frame and stamps object label IDs into a single 8-bit
//! anomaly map via pixel-wise thresholding with an explicit priority order.

pub mod compose;
pub mod mask;
pub mod scene;

pub use compose::LabelComposer;
pub use mask::{FsMaskSource, MaskSource};
pub use scene::{label_scene, label_scenes};
