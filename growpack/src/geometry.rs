/// An axis-aligned rectangle. Width runs along X, length along Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: (f64, f64),
    pub size: (f64, f64),
}

impl Rect {
    #[inline]
    pub fn new(pos: (f64, f64), size: (f64, f64)) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.0
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.size.1
    }

    #[inline]
    pub fn max(&self) -> (f64, f64) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    /// Whether the two rectangles share any area. Rectangles that only touch
    /// along an edge or at a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let self_max = self.max();
        let other_max = other.max();

        let x_overlap = self.pos.0 < other_max.0 && other.pos.0 < self_max.0;
        let y_overlap = self.pos.1 < other_max.1 && other.pos.1 < self_max.1;

        x_overlap && y_overlap
    }

    /// Whether `other` lies entirely within this rectangle, edges included.
    pub fn contains(&self, other: &Rect) -> bool {
        let self_max = self.max();
        let other_max = other.max();

        other.pos.0 >= self.pos.0
            && other.pos.1 >= self.pos.1
            && other_max.0 <= self_max.0
            && other_max.1 <= self_max.1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new((0.0, 0.0), (2.0, 2.0));
        let b = Rect::new((2.0, 0.0), (2.0, 2.0));
        let c = Rect::new((0.0, 2.0), (2.0, 2.0));

        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!b.intersects(&c));
    }

    #[test]
    fn overlapping() {
        let a = Rect::new((0.0, 0.0), (2.0, 2.0));
        let b = Rect::new((1.0, 1.0), (2.0, 2.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn containment() {
        let outer = Rect::new((0.0, 0.0), (4.0, 4.0));

        assert!(outer.contains(&Rect::new((0.0, 0.0), (4.0, 4.0))));
        assert!(outer.contains(&Rect::new((1.0, 2.0), (3.0, 2.0))));
        assert!(!outer.contains(&Rect::new((1.0, 2.0), (3.5, 2.0))));
        assert!(!outer.contains(&Rect::new((-0.5, 0.0), (1.0, 1.0))));
    }
}
