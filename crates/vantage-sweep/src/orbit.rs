use std::f64::consts::PI;

use vantage_core::{Pose, SweepConfig, Vec3};

/// One camera viewpoint in the sweep grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPoint {
    /// Zero-based frame index; also the dataset frame number.
    pub index: u32,
    pub pose: Pose,
}

impl std::fmt::Display for ViewPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View({})", self.index)
    }
}

/// The camera-placement grid: a half-circle of azimuths at each height step.
///
/// At grid step (k, i) the camera sits at
/// `(radius * cos(i*pi/num_views), radius * sin(i*pi/num_views), min_height + k*height_step)`,
/// oriented to look at the origin.
#[derive(Debug, Clone)]
pub struct OrbitSweep {
    radius: f64,
    num_views: u32,
    min_height: f64,
    max_height: f64,
    height_step: f64,
}

impl OrbitSweep {
    pub fn new(config: &SweepConfig) -> Self {
        Self {
            radius: config.radius,
            num_views: config.num_views,
            min_height: config.min_height,
            max_height: config.max_height,
            height_step: config.height_step,
        }
    }

    /// Number of height steps covering `[min_height, max_height)`.
    pub fn height_count(&self) -> u32 {
        if self.height_step <= 0.0 || self.max_height <= self.min_height {
            return 0;
        }
        ((self.max_height - self.min_height) / self.height_step).ceil() as u32
    }

    /// Total number of viewpoints in the grid.
    pub fn view_count(&self) -> u32 {
        self.height_count() * self.num_views
    }

    /// The viewpoint at a flat frame index (heights outer, azimuths inner).
    pub fn view(&self, index: u32) -> ViewPoint {
        let i = index % self.num_views;
        let k = index / self.num_views;
        let theta = i as f64 * PI / self.num_views as f64;
        let position = Vec3::new(
            self.radius * theta.cos(),
            self.radius * theta.sin(),
            self.min_height + k as f64 * self.height_step,
        );
        ViewPoint {
            index,
            pose: Pose::looking_at(position, Vec3::zero()),
        }
    }

    /// Iterate over every viewpoint in frame-index order.
    pub fn views(&self) -> impl Iterator<Item = ViewPoint> {
        let sweep = self.clone();
        (0..sweep.view_count()).map(move |index| sweep.view(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_sweep() -> OrbitSweep {
        OrbitSweep::new(&SweepConfig::default())
    }

    #[test]
    fn test_grid_size_matches_defaults() {
        let sweep = reference_sweep();
        assert_eq!(sweep.height_count(), 10);
        assert_eq!(sweep.view_count(), 100);
        assert_eq!(sweep.views().count(), 100);
    }

    #[test]
    fn test_positions_sit_on_the_orbit_circle() {
        let sweep = reference_sweep();
        for view in sweep.views() {
            let pos = view.pose.position;
            assert!(
                (pos.radial_distance() - 8.0).abs() < 1e-9,
                "frame {} strayed off the circle",
                view.index
            );
        }
    }

    #[test]
    fn test_heights_and_azimuths() {
        let sweep = reference_sweep();
        // Frame 23: second height step, azimuth index 3.
        let view = sweep.view(23);
        let pos = view.pose.position;
        assert!((pos.z - 9.0).abs() < 1e-9);
        let azimuth = pos.y.atan2(pos.x);
        assert!((azimuth - 3.0 * PI / 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_camera_faces_the_origin() {
        let sweep = reference_sweep();
        let view = sweep.view(0);
        // Camera on the +x axis at height 8 looking at the origin: the
        // rotation must match the look-at formula exactly.
        let expected = Pose::looking_at(view.pose.position, Vec3::zero());
        assert_eq!(view.pose, expected);
        assert!(view.pose.rotation.x > 0.0 && view.pose.rotation.x < PI / 2.0);
    }

    #[test]
    fn test_indexing_is_stable() {
        let sweep = reference_sweep();
        let collected: Vec<ViewPoint> = sweep.views().collect();
        for (i, view) in collected.iter().enumerate() {
            assert_eq!(view.index, i as u32);
            assert_eq!(*view, sweep.view(i as u32));
        }
    }

    #[test]
    fn test_empty_grid() {
        let sweep = OrbitSweep::new(&SweepConfig {
            radius: 1.0,
            num_views: 4,
            min_height: 5.0,
            max_height: 5.0,
            height_step: 1.0,
        });
        assert_eq!(sweep.view_count(), 0);
        assert_eq!(sweep.views().count(), 0);
    }
}
