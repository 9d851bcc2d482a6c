use vantage_core::{DatasetLayout, VantageResult};

/// What the harvest of one frame found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestOutcome {
    /// Staged files moved into the scene layout.
    pub moved: u32,
    /// Staged files that were absent; those frame slots stay empty.
    pub missing: u32,
}

/// Move the renderer's fixed-name outputs for the just-rendered frame into
/// the indexed scene layout.
///
/// A missing staged file is not an error: the move is skipped with a warning
/// and the index sequence keeps a gap, matching the dataset's lenient file
/// semantics.
pub fn harvest_frame<S: AsRef<str>>(
    layout: &DatasetLayout,
    scene: u32,
    objects: &[S],
    idx: u32,
) -> VantageResult<HarvestOutcome> {
    let mut outcome = HarvestOutcome::default();

    let staged_depth = layout.staged_depth();
    if staged_depth.exists() {
        std::fs::rename(&staged_depth, layout.depth_frame(scene, idx))?;
        outcome.moved += 1;
    } else {
        tracing::warn!(frame = idx, "no staged depth output; leaving a gap");
        outcome.missing += 1;
    }

    for obj in objects {
        let obj = obj.as_ref();
        let staged_mask = layout.staged_mask(obj);
        if staged_mask.exists() {
            std::fs::rename(&staged_mask, layout.mask_frame(scene, obj, idx))?;
            outcome.moved += 1;
        } else {
            tracing::warn!(frame = idx, object = obj, "no staged mask output; leaving a gap");
            outcome.missing += 1;
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_moves_staged_files() {
        let root = std::env::temp_dir().join("vantage_test_harvest");
        std::fs::remove_dir_all(&root).ok();
        let layout = DatasetLayout::new(&root);
        let objects = ["object1", "object2"];
        layout.ensure_staging_dirs(&objects).unwrap();
        layout.ensure_scene_dirs(0, &objects).unwrap();

        std::fs::write(layout.staged_depth(), b"depth").unwrap();
        std::fs::write(layout.staged_mask("object1"), b"mask").unwrap();
        // object2's mask is deliberately absent.

        let outcome = harvest_frame(&layout, 0, &objects, 5).unwrap();
        assert_eq!(outcome, HarvestOutcome { moved: 2, missing: 1 });

        assert!(layout.depth_frame(0, 5).is_file());
        assert!(layout.mask_frame(0, "object1", 5).is_file());
        assert!(!layout.mask_frame(0, "object2", 5).exists());
        // Staged files are consumed by the move.
        assert!(!layout.staged_depth().exists());

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_harvest_with_nothing_staged() {
        let root = std::env::temp_dir().join("vantage_test_harvest_empty");
        std::fs::remove_dir_all(&root).ok();
        let layout = DatasetLayout::new(&root);
        let objects = ["object1"];
        layout.ensure_staging_dirs(&objects).unwrap();
        layout.ensure_scene_dirs(0, &objects).unwrap();

        let outcome = harvest_frame(&layout, 0, &objects, 0).unwrap();
        assert_eq!(outcome, HarvestOutcome { moved: 0, missing: 2 });

        std::fs::remove_dir_all(&root).ok();
    }
}
