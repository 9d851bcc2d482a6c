//! Dataset directory layout.
//!
//! All file-naming rules live here: the renderer drops fixed-name outputs
//! into staging directories directly under the dataset root, and each scene
//! gets a numbered directory of indexed depth/mask/label frames:
//!
//! ```text
//! <root>/depth/Image0000.exr            staged renderer output
//! <root>/mask/<object>/Image0000.png    staged renderer output
//! <root>/<scene>/depth/<idx>.exr
//! <root>/<scene>/mask/<object>/<idx>.png
//! <root>/<scene>/anomaly/<idx>.png
//! <root>/<scene>/object_pose.txt
//! <root>/<scene>/camera_pose.txt
//! ```

use std::path::{Path, PathBuf};

use crate::error::VantageResult;

/// Fixed file name the renderer writes depth stills under.
pub const STAGED_DEPTH_NAME: &str = "Image0000.exr";
/// Fixed file name the renderer writes mask stills under.
pub const STAGED_MASK_NAME: &str = "Image0000.png";

/// Path arithmetic for one dataset tree.
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    root: PathBuf,
    label_dir_name: String,
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            label_dir_name: "anomaly".to_string(),
        }
    }

    /// Override the per-scene label directory name (`anomaly` by default).
    pub fn with_label_dir(mut self, name: impl Into<String>) -> Self {
        self.label_dir_name = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // Staging paths: where the renderer's fixed-name outputs land.

    pub fn staged_depth(&self) -> PathBuf {
        self.root.join("depth").join(STAGED_DEPTH_NAME)
    }

    pub fn staged_mask(&self, object: &str) -> PathBuf {
        self.root.join("mask").join(object).join(STAGED_MASK_NAME)
    }

    // Scene paths: the indexed dataset.

    pub fn scene_dir(&self, scene: u32) -> PathBuf {
        self.root.join(scene.to_string())
    }

    pub fn depth_dir(&self, scene: u32) -> PathBuf {
        self.scene_dir(scene).join("depth")
    }

    pub fn mask_dir(&self, scene: u32, object: &str) -> PathBuf {
        self.scene_dir(scene).join("mask").join(object)
    }

    pub fn label_dir(&self, scene: u32) -> PathBuf {
        self.scene_dir(scene).join(&self.label_dir_name)
    }

    pub fn depth_frame(&self, scene: u32, idx: u32) -> PathBuf {
        self.depth_dir(scene).join(format!("{}.exr", idx))
    }

    pub fn mask_frame(&self, scene: u32, object: &str, idx: u32) -> PathBuf {
        self.mask_dir(scene, object).join(format!("{}.png", idx))
    }

    pub fn label_frame(&self, scene: u32, idx: u32) -> PathBuf {
        self.label_dir(scene).join(format!("{}.png", idx))
    }

    pub fn object_pose_file(&self, scene: u32) -> PathBuf {
        self.scene_dir(scene).join("object_pose.txt")
    }

    pub fn camera_pose_file(&self, scene: u32) -> PathBuf {
        self.scene_dir(scene).join("camera_pose.txt")
    }

    /// Create the staging directories the renderer writes into.
    pub fn ensure_staging_dirs<S: AsRef<str>>(&self, objects: &[S]) -> VantageResult<()> {
        std::fs::create_dir_all(self.root.join("depth"))?;
        for obj in objects {
            std::fs::create_dir_all(self.root.join("mask").join(obj.as_ref()))?;
        }
        Ok(())
    }

    /// Create a scene's depth/mask/label directories.
    pub fn ensure_scene_dirs<S: AsRef<str>>(&self, scene: u32, objects: &[S]) -> VantageResult<()> {
        std::fs::create_dir_all(self.depth_dir(scene))?;
        std::fs::create_dir_all(self.label_dir(scene))?;
        for obj in objects {
            std::fs::create_dir_all(self.mask_dir(scene, obj.as_ref()))?;
        }
        Ok(())
    }

    /// Delete the whole dataset tree and recreate empty staging directories.
    pub fn reset<S: AsRef<str>>(&self, objects: &[S]) -> VantageResult<()> {
        if self.root.is_dir() {
            std::fs::remove_dir_all(&self.root)?;
        }
        self.ensure_staging_dirs(objects)
    }

    /// Number of frames in a scene, derived from the depth directory listing.
    pub fn frame_count(&self, scene: u32) -> VantageResult<u32> {
        let mut count = 0u32;
        for entry in std::fs::read_dir(self.depth_dir(scene))? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_paths() {
        let layout = DatasetLayout::new("/data");
        assert_eq!(
            layout.staged_depth(),
            PathBuf::from("/data/depth/Image0000.exr")
        );
        assert_eq!(
            layout.staged_mask("object3"),
            PathBuf::from("/data/mask/object3/Image0000.png")
        );
    }

    #[test]
    fn test_scene_frame_paths() {
        let layout = DatasetLayout::new("/data");
        assert_eq!(layout.depth_frame(1, 42), PathBuf::from("/data/1/depth/42.exr"));
        assert_eq!(
            layout.mask_frame(0, "object2", 7),
            PathBuf::from("/data/0/mask/object2/7.png")
        );
        assert_eq!(layout.label_frame(0, 7), PathBuf::from("/data/0/anomaly/7.png"));
    }

    #[test]
    fn test_label_dir_override() {
        let layout = DatasetLayout::new("/data").with_label_dir("anomalies");
        assert_eq!(layout.label_frame(2, 0), PathBuf::from("/data/2/anomalies/0.png"));
    }

    #[test]
    fn test_scaffold_and_frame_count() {
        let root = std::env::temp_dir().join("vantage_test_layout");
        std::fs::remove_dir_all(&root).ok();
        let layout = DatasetLayout::new(&root);
        let objects = ["object1", "object2"];

        layout.ensure_staging_dirs(&objects).unwrap();
        layout.ensure_scene_dirs(0, &objects).unwrap();
        assert!(layout.mask_dir(0, "object2").is_dir());
        assert!(layout.label_dir(0).is_dir());

        assert_eq!(layout.frame_count(0).unwrap(), 0);
        std::fs::write(layout.depth_frame(0, 0), b"x").unwrap();
        std::fs::write(layout.depth_frame(0, 1), b"x").unwrap();
        assert_eq!(layout.frame_count(0).unwrap(), 2);

        layout.reset(&objects).unwrap();
        assert!(layout.root().join("depth").is_dir());
        assert!(!layout.scene_dir(0).exists());

        std::fs::remove_dir_all(&root).ok();
    }
}
