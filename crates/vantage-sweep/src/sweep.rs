use vantage_core::{DatasetLayout, VantageConfig, VantageResult};

use crate::anomaly::AnomalyPlanner;
use crate::harvest::harvest_frame;
use crate::host::SceneHost;
use crate::orbit::OrbitSweep;
use crate::poselog::PoseLog;

/// Result of a complete sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepReport {
    /// Frames rendered.
    pub frames: u32,
    /// Staged renderer outputs that were absent after a render.
    pub missing_outputs: u32,
    /// Total perturbations applied across all frames.
    pub anomalies_applied: u32,
}

/// Drives a scene host through the full dataset-generation procedure for one
/// scene: scaffold the layout, log object poses, then for every viewpoint in
/// the orbit grid move the camera, perturb objects, render, harvest the
/// outputs, and log the camera pose.
pub struct SweepRunner {
    layout: DatasetLayout,
    orbit: OrbitSweep,
    planner: AnomalyPlanner,
}

impl SweepRunner {
    pub fn new(config: &VantageConfig) -> Self {
        Self {
            layout: DatasetLayout::new(&config.dataset.data_dir)
                .with_label_dir(&config.label.dir_name),
            orbit: OrbitSweep::new(&config.sweep),
            planner: AnomalyPlanner::new(&config.anomaly),
        }
    }

    pub fn layout(&self) -> &DatasetLayout {
        &self.layout
    }

    pub fn run(&mut self, host: &mut dyn SceneHost, scene: u32) -> VantageResult<SweepReport> {
        let objects = host.object_names();
        self.layout.ensure_staging_dirs(&objects)?;
        self.layout.ensure_scene_dirs(scene, &objects)?;

        let mut object_log = PoseLog::create_object_log(&self.layout.object_pose_file(scene))?;
        for name in &objects {
            if let Some(pose) = host.object_pose(name) {
                object_log.write_object(name, &pose)?;
            }
        }
        object_log.finish()?;

        let mut camera_log = PoseLog::create_camera_log(&self.layout.camera_pose_file(scene))?;
        let mut report = SweepReport::default();

        for view in self.orbit.views() {
            tracing::info!(frame = view.index, "rendering {}", view);

            host.set_camera_pose(view.pose);
            for (object, anomaly) in self.planner.plan_frame() {
                host.apply_anomaly(&object, anomaly)?;
                report.anomalies_applied += 1;
            }
            host.render_still()?;

            let outcome = harvest_frame(&self.layout, scene, &objects, view.index)?;
            report.missing_outputs += outcome.missing;

            camera_log.write_camera(&format!("{}.exr", view.index), &view.pose)?;
            report.frames += 1;
        }
        camera_log.finish()?;

        tracing::info!(
            scene,
            frames = report.frames,
            missing = report.missing_outputs,
            "sweep complete"
        );
        Ok(report)
    }
}
