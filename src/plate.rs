use growpack::Rect;

use crate::data::BuildPlateConfig;

/// The surface objects get arranged on. Rectangular plates span
/// `[0, width] x [0, length]`; round ones are the circle inscribed along the
/// width, centered on that same rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildPlate {
    width: f64,
    length: f64,
    is_circle: bool,
}

impl BuildPlate {
    /// Offset that puts an area of the given size in the middle of the plate.
    pub fn centered_offset(&self, size: (f64, f64)) -> (f64, f64) {
        (
            (self.width - size.0) / 2.0,
            (self.length - size.1) / 2.0,
        )
    }

    /// Whether `area` lies entirely on the plate.
    pub fn contains(&self, area: &Rect) -> bool {
        let bounds = Rect::new((0.0, 0.0), (self.width, self.length));

        if !bounds.contains(area) {
            return false;
        }

        if !self.is_circle {
            return true;
        }

        let center = (self.width / 2.0, self.length / 2.0);
        let radius = self.width / 2.0;
        let (min, max) = (area.pos, area.max());

        [(min.0, min.1), (max.0, min.1), (min.0, max.1), (max.0, max.1)]
            .iter()
            .all(|&(x, y)| {
                let (dx, dy) = (x - center.0, y - center.1);
                dx * dx + dy * dy <= radius * radius
            })
    }
}

impl From<&BuildPlateConfig> for BuildPlate {
    fn from(config: &BuildPlateConfig) -> Self {
        Self {
            width: config.width,
            length: config.length,
            is_circle: config.is_circle,
        }
    }
}
