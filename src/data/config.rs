use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single arranging job, read from a TOML file: the printer whose build
/// plate the objects go on, how to arrange them and the objects themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct JobConfig {
    pub printer: PrinterConfig,

    #[serde(default)]
    pub arrange: ArrangeConfig,

    /// Footprints of the objects to arrange, in the order they'll be packed.
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

impl JobConfig {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Reading job file {}", path.display());

        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;

        config.validate()?;

        log::debug!("Printer: {}", config.printer.name);
        if config.printer.build_plate.is_circle {
            log::debug!("Build plate is circular");
        } else {
            log::debug!("Build plate is rectangular");
        }

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let plate = &self.printer.build_plate;

        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(plate.width) || !valid(plate.length) {
            return Err(ConfigError::InvalidBuildPlate {
                width: plate.width,
                length: plate.length,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PrinterConfig {
    /// Shown in logs and copied into the layout.
    pub name: String,

    pub build_plate: BuildPlateConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BuildPlateConfig {
    pub width: f64,
    pub length: f64,

    /// Round plates have a diameter equal to `width` and are centered on the
    /// plate's bounding square.
    #[serde(default)]
    pub is_circle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ArrangeConfig {
    /// Gap to leave between neighboring objects.
    #[serde(default)]
    pub spacing: f64,

    /// The packed area will be at least this large.
    #[serde(default)]
    pub min_seed: (f64, f64),

    /// Position of the packed area on the build plate. When left out, the
    /// packed area is centered on the plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<(f64, f64)>,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            min_seed: (0.0, 0.0),
            offset: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ObjectConfig {
    pub name: String,

    /// Footprint size along X.
    pub width: f64,

    /// Footprint size along Y.
    pub length: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("build plate must have a positive size, got {width} x {length}")]
    InvalidBuildPlate { width: f64, length: f64 },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static FULL_JOB: &str = r#"
        [printer]
        name = "Example i3"

        [printer.build-plate]
        width = 220.0
        length = 200.0
        is-circle = true

        [arrange]
        spacing = 2.5
        min-seed = [10.0, 20.0]
        offset = [5.0, 6.0]

        [[objects]]
        name = "bracket"
        width = 20.0
        length = 35.0

        [[objects]]
        name = "knob"
        width = 12.0
        length = 12.0
    "#;

    #[test]
    fn full_job() {
        let config: JobConfig = toml::from_str(FULL_JOB).unwrap();

        assert_eq!(config.printer.name, "Example i3");
        assert_eq!(
            config.printer.build_plate,
            BuildPlateConfig {
                width: 220.0,
                length: 200.0,
                is_circle: true,
            }
        );
        assert_eq!(
            config.arrange,
            ArrangeConfig {
                spacing: 2.5,
                min_seed: (10.0, 20.0),
                offset: Some((5.0, 6.0)),
            }
        );
        assert_eq!(config.objects.len(), 2);
        assert_eq!(config.objects[1].name, "knob");
    }

    #[test]
    fn defaults() {
        let config: JobConfig = toml::from_str(
            r#"
            [printer]
            name = "Bare"
            build-plate = { width = 100.0, length = 100.0 }
            "#,
        )
        .unwrap();

        assert!(!config.printer.build_plate.is_circle);
        assert_eq!(config.arrange, ArrangeConfig::default());
        assert!(config.objects.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<JobConfig, _> = toml::from_str(
            r#"
            [printer]
            name = "Bare"
            build-plate = { width = 100.0, length = 100.0, height = 5.0 }
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let config: JobConfig = toml::from_str(FULL_JOB).unwrap();
        let serialized = toml::to_string_pretty(&config).unwrap();

        assert_eq!(toml::from_str::<JobConfig>(&serialized).unwrap(), config);
    }

    #[test]
    fn invalid_plate() {
        let config: JobConfig = toml::from_str(
            r#"
            [printer]
            name = "Broken"
            build-plate = { width = 0.0, length = 100.0 }
            "#,
        )
        .unwrap();

        match config.validate() {
            Err(ConfigError::InvalidBuildPlate { width, length }) => {
                assert_eq!((width, length), (0.0, 100.0));
            }
            other => panic!("expected InvalidBuildPlate, got {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let err = JobConfig::read_from_file("this/job/does-not-exist.toml").unwrap_err();

        assert!(err.is_not_found(), "unexpected error: {}", err);
    }
}
