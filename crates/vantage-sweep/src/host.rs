use vantage_core::{Pose, VantageResult};

use crate::anomaly::Anomaly;

/// The renderer boundary.
///
/// A scene host owns a 3D scene with named objects and a camera, and can
/// render the current frame to the staging directory's fixed output paths
/// (`depth/Image0000.exr`, `mask/<object>/Image0000.png`). Everything else
/// in this crate only sequences calls through this trait, so the glue logic
/// is testable without a real renderer.
pub trait SceneHost {
    /// Names of the scene's renderable objects, excluding the camera and
    /// lights.
    fn object_names(&self) -> Vec<String>;

    /// Current pose of a named object, if it exists.
    fn object_pose(&self, name: &str) -> Option<Pose>;

    /// Move the camera.
    fn set_camera_pose(&mut self, pose: Pose);

    /// Perturb an object's geometry before the next render.
    fn apply_anomaly(&mut self, object: &str, anomaly: Anomaly) -> VantageResult<()>;

    /// Render the current frame; outputs land at the staging layout's fixed
    /// paths.
    fn render_still(&mut self) -> VantageResult<()>;
}
