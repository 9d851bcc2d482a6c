//! # vantage-sweep
//!
//! The scene-driving half of Vantage. Sequences an external 3D scene host
//! through a grid of camera viewpoints, perturbs scene objects, and harvests
//! the renderer's fixed-name output files into the indexed dataset layout.

pub mod anomaly;
pub mod command;
pub mod harvest;
pub mod host;
pub mod orbit;
pub mod poselog;
pub mod sweep;

pub use anomaly::{Anomaly, AnomalyKind, AnomalyPlanner};
pub use command::{CommandHost, ManifestObject, SceneManifest};
pub use host::SceneHost;
pub use orbit::{OrbitSweep, ViewPoint};
pub use sweep::{SweepReport, SweepRunner};
