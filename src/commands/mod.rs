mod pack;
mod show_config;

pub use pack::*;
pub use show_config::*;

use std::path::Path;

use anyhow::bail;

use crate::data::JobConfig;

/// Reads a job file, turning a missing file into a short message instead of a
/// raw IO error.
fn read_job(path: &Path) -> anyhow::Result<JobConfig> {
    match JobConfig::read_from_file(path) {
        Ok(config) => Ok(config),
        Err(err) if err.is_not_found() => {
            bail!("job file {} does not exist", path.display())
        }
        Err(err) => Err(err.into()),
    }
}
