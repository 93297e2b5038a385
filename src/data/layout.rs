use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use fs_err as fs;
use serde::{Deserialize, Serialize};

/// The result of arranging a job: where every object ended up on the build
/// plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Layout {
    pub printer: String,

    /// Size of the area the objects were packed into.
    pub bin: BinSize,

    /// Position of the packed area on the build plate.
    pub offset: (f64, f64),

    /// Whether the packed area lies entirely on the build plate.
    pub fits_plate: bool,

    /// Objects in the same order as the job file.
    pub objects: Vec<PlacedObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinSize {
    pub width: f64,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
}

impl Layout {
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = BufWriter::new(fs::File::create(path)?);
        self.write(&mut file)?;
        file.flush()?;

        log::info!("Wrote layout to {}", path.display());

        Ok(())
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)
    }
}
