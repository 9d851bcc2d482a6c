use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{VantageError, VantageResult};

/// One scene object and the label ID stamped into anomaly maps for it.
///
/// The order of entries in [`VantageConfig::objects`] is the compositing
/// priority: where two masks both exceed the threshold at a pixel, the later
/// entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ObjectEntry {
    pub name: String,
    pub id: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Root of the dataset tree. The renderer's staging directories
    /// (`depth/`, `mask/<object>/`) and the numbered scene directories both
    /// live under this root.
    pub data_dir: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    /// Distance of the camera from the world z-axis.
    pub radius: f64,
    /// Number of azimuth steps per height; step angle is pi / num_views.
    pub num_views: u32,
    /// Camera heights swept over [min_height, max_height) in height_step
    /// increments.
    pub min_height: f64,
    pub max_height: f64,
    pub height_step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            num_views: 10,
            min_height: 8.0,
            max_height: 18.0,
            height_step: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnomalyConfig {
    /// Per-object chance of being perturbed on each frame.
    pub probability: f64,
    /// Perturbation intensity passed to the scene host.
    pub intensity: f64,
    /// RNG seed; a fixed seed reproduces the same perturbation sequence.
    pub seed: u64,
    /// Names of the objects eligible for perturbation.
    pub targets: Vec<String>,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            probability: 0.5,
            intensity: 0.1,
            seed: 0,
            targets: (1..=5).map(|i| format!("object{}", i)).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelConfig {
    /// Mask brightness above which a pixel counts as belonging to the object.
    pub threshold: u8,
    /// Label map dimensions; every mask must match them.
    pub width: u32,
    pub height: u32,
    /// Name of the per-scene label directory.
    pub dir_name: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            threshold: 100,
            width: 640,
            height: 480,
            dir_name: "anomaly".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostConfig {
    /// Renderer executable invoked once per frame.
    pub command: String,
    /// Arguments for the command. `{plan}` expands to the per-frame plan
    /// file path, `{frame}` to the frame index.
    pub args: Vec<String>,
    /// Scene manifest listing the host's objects and their rest poses.
    pub manifest: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            command: "blender".to_string(),
            args: vec![
                "--background".to_string(),
                "--python".to_string(),
                "render_frame.py".to_string(),
                "--".to_string(),
                "{plan}".to_string(),
            ],
            manifest: PathBuf::from("scene.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VantageConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Ordered object table: name to label ID, declaration order is the
    /// compositing priority.
    #[serde(default = "default_objects")]
    pub objects: Vec<ObjectEntry>,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub anomaly: AnomalyConfig,
    #[serde(default)]
    pub label: LabelConfig,
    #[serde(default)]
    pub host: HostConfig,
}

fn default_objects() -> Vec<ObjectEntry> {
    (1..=10)
        .map(|i| ObjectEntry {
            name: format!("object{}", i),
            id: i as u8,
        })
        .collect()
}

impl Default for VantageConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            objects: default_objects(),
            sweep: SweepConfig::default(),
            anomaly: AnomalyConfig::default(),
            label: LabelConfig::default(),
            host: HostConfig::default(),
        }
    }
}

impl VantageConfig {
    pub fn load_from_file(path: &std::path::Path) -> VantageResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: VantageConfig = toml::from_str(&contents)
            .map_err(|e| VantageError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> VantageResult<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| VantageError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Label ID for an object name, if it appears in the table.
    pub fn object_id(&self, name: &str) -> Option<u8> {
        self.objects.iter().find(|o| o.name == name).map(|o| o.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_object_table() {
        let cfg = VantageConfig::default();
        assert_eq!(cfg.objects.len(), 10);
        assert_eq!(cfg.object_id("object1"), Some(1));
        assert_eq!(cfg.object_id("object10"), Some(10));
        assert_eq!(cfg.object_id("camera"), None);
    }

    #[test]
    fn test_defaults_match_reference_grid() {
        let cfg = VantageConfig::default();
        assert_eq!(cfg.sweep.num_views, 10);
        assert_eq!(cfg.sweep.radius, 8.0);
        assert_eq!(cfg.label.threshold, 100);
        assert_eq!((cfg.label.width, cfg.label.height), (640, 480));
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = VantageConfig::default();
        let path = std::env::temp_dir().join("vantage_test_config.toml");
        cfg.save_to_file(&path).unwrap();
        let loaded = VantageConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.objects, cfg.objects);
        assert_eq!(loaded.sweep.num_views, cfg.sweep.num_views);
        assert_eq!(loaded.label.dir_name, "anomaly");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: VantageConfig = toml::from_str(
            r#"
            [sweep]
            radius = 4.0
            num_views = 6
            min_height = 1.0
            max_height = 3.0
            height_step = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sweep.radius, 4.0);
        assert_eq!(cfg.objects.len(), 10);
        assert_eq!(cfg.label.threshold, 100);
    }
}
