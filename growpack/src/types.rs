use std::{cell::RefCell, rc::Rc};

use crate::geometry::Rect;

/// Anything with a rectangular footprint that the packer can move around.
///
/// Width is measured along X and length along Y. Both are expected to be
/// positive and finite; [`Packer::pack`](struct.Packer.html#method.pack)
/// rejects footprints that aren't.
///
/// `translate` sets the absolute origin of the footprint. Calling it twice
/// with the same position must leave the object in the same place.
pub trait Footprint {
    fn width(&self) -> f64;
    fn length(&self) -> f64;
    fn translate(&mut self, x: f64, y: f64);
}

impl<T: Footprint + ?Sized> Footprint for &mut T {
    #[inline]
    fn width(&self) -> f64 {
        (**self).width()
    }

    #[inline]
    fn length(&self) -> f64 {
        (**self).length()
    }

    #[inline]
    fn translate(&mut self, x: f64, y: f64) {
        (**self).translate(x, y)
    }
}

impl<T: Footprint + ?Sized> Footprint for Box<T> {
    #[inline]
    fn width(&self) -> f64 {
        (**self).width()
    }

    #[inline]
    fn length(&self) -> f64 {
        (**self).length()
    }

    #[inline]
    fn translate(&mut self, x: f64, y: f64) {
        (**self).translate(x, y)
    }
}

/// Shared handles let the caller keep its own references to the objects while
/// the packer holds the list.
impl<T: Footprint + ?Sized> Footprint for Rc<RefCell<T>> {
    #[inline]
    fn width(&self) -> f64 {
        self.borrow().width()
    }

    #[inline]
    fn length(&self) -> f64 {
        self.borrow().length()
    }

    #[inline]
    fn translate(&mut self, x: f64, y: f64) {
        self.borrow_mut().translate(x, y)
    }
}

/// A bare footprint: just a 2D size and the position it was last moved to.
///
/// Useful for callers that only have numbers, or that want to pack first and
/// map positions back onto their own objects afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    size: (f64, f64),
    position: (f64, f64),
}

impl Item {
    #[inline]
    pub fn new(size: (f64, f64)) -> Self {
        Self {
            size,
            position: (0.0, 0.0),
        }
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

impl Footprint for Item {
    #[inline]
    fn width(&self) -> f64 {
        self.size.0
    }

    #[inline]
    fn length(&self) -> f64 {
        self.size.1
    }

    #[inline]
    fn translate(&mut self, x: f64, y: f64) {
        self.position = (x, y);
    }
}

/// Where the packer put one of its objects, relative to the bin origin.
///
/// `index` refers back to the position of the object in the list handed to
/// [`Packer::new`](struct.Packer.html#method.new).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub(crate) index: usize,
    pub(crate) rect: Rect,
}

impl Placement {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        self.rect.size
    }

    #[inline]
    pub fn max(&self) -> (f64, f64) {
        self.rect.max()
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}
