use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vantage_core::{Pose, VantageResult};

/// Append-only pose log: one header line, then one whitespace-separated row
/// per record with 6-decimal floats.
pub struct PoseLog {
    writer: BufWriter<File>,
}

impl PoseLog {
    const OBJECT_HEADER: &'static str = "object_ID x y z rx ry rz";
    const CAMERA_HEADER: &'static str = "image x y z rx ry rz";

    fn create(path: &Path, header: &str) -> VantageResult<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", header)?;
        Ok(Self { writer })
    }

    /// Create `object_pose.txt`: one row per scene object.
    pub fn create_object_log(path: &Path) -> VantageResult<Self> {
        Self::create(path, Self::OBJECT_HEADER)
    }

    /// Create `camera_pose.txt`: one row per rendered frame.
    pub fn create_camera_log(path: &Path) -> VantageResult<Self> {
        Self::create(path, Self::CAMERA_HEADER)
    }

    fn write_row(&mut self, label: &str, pose: &Pose) -> VantageResult<()> {
        let p = pose.position;
        let r = pose.rotation;
        writeln!(
            self.writer,
            "{} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
            label, p.x, p.y, p.z, r.x, r.y, r.z
        )?;
        Ok(())
    }

    /// Append an object row.
    pub fn write_object(&mut self, name: &str, pose: &Pose) -> VantageResult<()> {
        self.write_row(name, pose)
    }

    /// Append a camera row for a rendered image.
    pub fn write_camera(&mut self, image: &str, pose: &Pose) -> VantageResult<()> {
        self.write_row(image, pose)
    }

    /// Flush and close the log.
    pub fn finish(mut self) -> VantageResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
