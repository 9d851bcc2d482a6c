use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use vantage_core::{DatasetLayout, HostConfig, Pose, VantageError, VantageResult};

use crate::anomaly::Anomaly;
use crate::host::SceneHost;

/// One object in the scene manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestObject {
    pub name: String,
    #[serde(default)]
    pub pose: Pose,
}

/// Description of the external host's scene: the renderable objects and
/// their rest poses. Loaded from a small JSON file next to the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    pub objects: Vec<ManifestObject>,
}

impl SceneManifest {
    pub fn load(path: &Path) -> VantageResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| VantageError::asset(format!("failed to read scene manifest: {}", e), path))?;
        let manifest: SceneManifest = serde_json::from_str(&contents)?;
        Ok(manifest)
    }
}

/// Frame plan handed to the renderer command: where the camera is and which
/// objects to perturb before rendering.
#[derive(Debug, Serialize)]
struct FramePlan<'a> {
    frame: u32,
    camera: &'a Pose,
    anomalies: &'a [PlannedAnomaly],
}

#[derive(Debug, Clone, Serialize)]
struct PlannedAnomaly {
    object: String,
    #[serde(flatten)]
    anomaly: Anomaly,
}

/// Scene host that shells out to an external renderer command once per frame.
///
/// Each render writes a JSON frame plan into the staging directory and runs
/// the configured command with `{plan}` / `{frame}` placeholders substituted.
/// The command is expected to drop its fixed-name outputs
/// (`depth/Image0000.exr`, `mask/<object>/Image0000.png`) under the staging
/// root for the harvest step to pick up.
pub struct CommandHost {
    command: String,
    args: Vec<String>,
    manifest: SceneManifest,
    plan_path: PathBuf,
    camera: Pose,
    pending: Vec<PlannedAnomaly>,
    frame: u32,
}

impl CommandHost {
    pub fn new(config: &HostConfig, layout: &DatasetLayout) -> VantageResult<Self> {
        let manifest = SceneManifest::load(&config.manifest)?;
        Ok(Self {
            command: config.command.clone(),
            args: config.args.clone(),
            manifest,
            plan_path: layout.root().join("frame_plan.json"),
            camera: Pose::default(),
            pending: Vec::new(),
            frame: 0,
        })
    }

    /// Check that the renderer command can be launched at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn substituted_args(&self) -> Vec<String> {
        let plan = self.plan_path.to_string_lossy();
        self.args
            .iter()
            .map(|a| {
                a.replace("{plan}", plan.as_ref())
                    .replace("{frame}", &self.frame.to_string())
            })
            .collect()
    }

    fn write_plan(&self) -> VantageResult<()> {
        let plan = FramePlan {
            frame: self.frame,
            camera: &self.camera,
            anomalies: &self.pending,
        };
        let json = serde_json::to_string_pretty(&plan)?;
        std::fs::write(&self.plan_path, json)?;
        Ok(())
    }
}

impl SceneHost for CommandHost {
    fn object_names(&self) -> Vec<String> {
        self.manifest.objects.iter().map(|o| o.name.clone()).collect()
    }

    fn object_pose(&self, name: &str) -> Option<Pose> {
        self.manifest
            .objects
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.pose)
    }

    fn set_camera_pose(&mut self, pose: Pose) {
        self.camera = pose;
    }

    fn apply_anomaly(&mut self, object: &str, anomaly: Anomaly) -> VantageResult<()> {
        if self.object_pose(object).is_none() {
            return Err(VantageError::InvalidArgument(format!(
                "unknown object '{}' in anomaly plan",
                object
            )));
        }
        self.pending.push(PlannedAnomaly {
            object: object.to_string(),
            anomaly,
        });
        Ok(())
    }

    fn render_still(&mut self) -> VantageResult<()> {
        self.write_plan()?;

        let output = Command::new(&self.command)
            .args(self.substituted_args())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| VantageError::host(format!("failed to start '{}': {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VantageError::host(format!(
                "renderer exited with {} on frame {}: {}",
                output.status, self.frame, stderr
            )));
        }

        self.pending.clear();
        self.frame += 1;
        Ok(())
    }
}
