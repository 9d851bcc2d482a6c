use rand::{Rng, SeedableRng};
use rand_xoshiro::SplitMix64;
use serde::{Deserialize, Serialize};

use vantage_core::AnomalyConfig;

/// Kind of geometric perturbation applied to a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    /// Random surface vertices pushed inward.
    Dent,
    /// Random surface vertices displaced sideways.
    Scratch,
    /// Random surface vertices deleted.
    Missing,
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalyKind::Dent => write!(f, "dent"),
            AnomalyKind::Scratch => write!(f, "scratch"),
            AnomalyKind::Missing => write!(f, "missing"),
        }
    }
}

/// A perturbation request for one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    /// Fraction of the object's geometry affected (0.0-1.0).
    pub intensity: f64,
}

/// Decides, per frame, which objects get perturbed and how.
///
/// Each eligible object is independently perturbed with the configured
/// probability, with a uniformly chosen kind. The generator is seeded, so a
/// fixed seed reproduces the same perturbation sequence across runs.
pub struct AnomalyPlanner {
    probability: f64,
    intensity: f64,
    targets: Vec<String>,
    rng: SplitMix64,
}

impl AnomalyPlanner {
    pub fn new(config: &AnomalyConfig) -> Self {
        Self {
            probability: config.probability.clamp(0.0, 1.0),
            intensity: config.intensity,
            targets: config.targets.clone(),
            rng: SplitMix64::seed_from_u64(config.seed),
        }
    }

    /// Plan the perturbations for the next frame, in target-list order.
    pub fn plan_frame(&mut self) -> Vec<(String, Anomaly)> {
        let mut planned = Vec::new();
        for target in &self.targets {
            if !self.rng.random_bool(self.probability) {
                continue;
            }
            let kind = match self.rng.random_range(0..3) {
                0 => AnomalyKind::Dent,
                1 => AnomalyKind::Scratch,
                _ => AnomalyKind::Missing,
            };
            planned.push((
                target.clone(),
                Anomaly {
                    kind,
                    intensity: self.intensity,
                },
            ));
        }
        planned
    }
}
