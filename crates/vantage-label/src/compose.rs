use image::GrayImage;

use vantage_core::{LabelConfig, ObjectEntry, VantageError, VantageResult};

use crate::mask::MaskSource;

/// Composites per-object masks into a single 8-bit label map.
///
/// Pixels start at 0 (background). For each table entry in declaration
/// order, every pixel whose mask value exceeds the threshold is stamped with
/// that object's ID. Declaration order is the priority: where two masks
/// overlap above the threshold, the later entry overwrites the earlier one.
pub struct LabelComposer {
    table: Vec<ObjectEntry>,
    threshold: u8,
    width: u32,
    height: u32,
}

impl LabelComposer {
    pub fn new(objects: &[ObjectEntry], label: &LabelConfig) -> Self {
        Self {
            table: objects.to_vec(),
            threshold: label.threshold,
            width: label.width,
            height: label.height,
        }
    }

    /// Compose the label map for one frame. Objects without a mask file are
    /// skipped, leaving the prior label values in place.
    pub fn compose_frame(
        &self,
        source: &dyn MaskSource,
        scene: u32,
        frame: u32,
    ) -> VantageResult<GrayImage> {
        let mut label = GrayImage::new(self.width, self.height);
        for entry in &self.table {
            let Some(mask) = source.load_mask(scene, &entry.name, frame)? else {
                continue;
            };
            if mask.dimensions() != (self.width, self.height) {
                return Err(VantageError::Compose(format!(
                    "mask for '{}' frame {} is {}x{}, label map is {}x{}",
                    entry.name,
                    frame,
                    mask.width(),
                    mask.height(),
                    self.width,
                    self.height
                )));
            }
            for (dst, src) in label.pixels_mut().zip(mask.pixels()) {
                if src.0[0] > self.threshold {
                    dst.0[0] = entry.id;
                }
            }
        }
        Ok(label)
    }
}
