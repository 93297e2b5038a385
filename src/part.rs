use growpack::Footprint;

use crate::data::{ObjectConfig, PlacedObject};

/// An object from a job file, along with where it's been moved to on the
/// build plate.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    name: String,
    size: (f64, f64),
    position: (f64, f64),
}

impl Part {
    pub fn placed(&self) -> PlacedObject {
        PlacedObject {
            name: self.name.clone(),
            x: self.position.0,
            y: self.position.1,
            width: self.size.0,
            length: self.size.1,
        }
    }
}

impl From<&ObjectConfig> for Part {
    fn from(config: &ObjectConfig) -> Self {
        Self {
            name: config.name.clone(),
            size: (config.width, config.length),
            position: (0.0, 0.0),
        }
    }
}

impl Footprint for Part {
    fn width(&self) -> f64 {
        self.size.0
    }

    fn length(&self) -> f64 {
        self.size.1
    }

    fn translate(&mut self, x: f64, y: f64) {
        log::trace!("Moving {} to ({}, {})", self.name, x, y);
        self.position = (x, y);
    }
}
