//! Per-scene label map generation.

use vantage_core::{DatasetLayout, VantageError, VantageResult};

use crate::compose::LabelComposer;
use crate::mask::MaskSource;

/// Generate the label maps for one scene.
///
/// The scene's label directory is recreated from scratch; the frame count is
/// derived from the depth directory listing, so the label maps align 1:1
/// with the rendered frames. Returns the number of frames labeled.
pub fn label_scene(
    layout: &DatasetLayout,
    composer: &LabelComposer,
    source: &dyn MaskSource,
    scene: u32,
) -> VantageResult<u32> {
    let label_dir = layout.label_dir(scene);
    if label_dir.is_dir() {
        std::fs::remove_dir_all(&label_dir)?;
    }
    std::fs::create_dir_all(&label_dir)?;

    let frames = layout.frame_count(scene)?;
    for idx in 0..frames {
        let label = composer.compose_frame(source, scene, idx)?;
        let path = layout.label_frame(scene, idx);
        label
            .save(&path)
            .map_err(|e| VantageError::asset(format!("failed to write label map: {}", e), &path))?;
        tracing::info!(scene, frame = idx, "saved {}", path.display());
    }
    tracing::info!(scene, frames, "labeled scene");
    Ok(frames)
}

/// Generate label maps for every scene in `[start, end)`. Returns the total
/// number of frames labeled.
pub fn label_scenes(
    layout: &DatasetLayout,
    composer: &LabelComposer,
    source: &dyn MaskSource,
    start: u32,
    end: u32,
) -> VantageResult<u32> {
    let mut total = 0;
    for scene in start..end {
        total += label_scene(layout, composer, source, scene)?;
    }
    Ok(total)
}
