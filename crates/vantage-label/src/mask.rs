//! Mask loading behind a narrow read capability.

use image::GrayImage;

use vantage_core::{DatasetLayout, VantageError, VantageResult};

/// Read capability for per-object mask images, so compositing logic can be
/// exercised without an image codec or a filesystem.
pub trait MaskSource {
    /// The single-channel mask for (object, frame), or `None` if the mask
    /// file does not exist.
    fn load_mask(&self, scene: u32, object: &str, frame: u32) -> VantageResult<Option<GrayImage>>;
}

/// Mask source reading PNG files from the dataset layout.
pub struct FsMaskSource {
    layout: DatasetLayout,
}

impl FsMaskSource {
    pub fn new(layout: DatasetLayout) -> Self {
        Self { layout }
    }
}

impl MaskSource for FsMaskSource {
    fn load_mask(&self, scene: u32, object: &str, frame: u32) -> VantageResult<Option<GrayImage>> {
        let path = self.layout.mask_frame(scene, object, frame);
        if !path.is_file() {
            return Ok(None);
        }
        let img = image::open(&path).map_err(|e| {
            VantageError::asset(format!("failed to load mask '{}': {}", path.display(), e), &path)
        })?;
        Ok(Some(img.to_luma8()))
    }
}
