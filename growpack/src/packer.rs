use crate::{
    error::PackError,
    geometry::Rect,
    node::Node,
    types::{Footprint, Placement},
};

/// Packs footprints into a single bin that starts out the size of the first
/// footprint and grows as needed, trying to stay close to square.
///
/// Objects are packed in the order they were given. The same objects in the
/// same order always produce the same layout.
///
/// ```
/// use growpack::{Item, Packer};
///
/// let items = vec![Item::new((2.0, 2.0)), Item::new((2.0, 2.0))];
///
/// let mut packer = Packer::new(items);
/// let (width, length) = packer.pack()?;
/// assert_eq!(width * length, 8.0);
///
/// packer.arrange(10.0, 10.0);
/// # Ok::<(), growpack::PackError>(())
/// ```
#[derive(Debug)]
pub struct Packer<F> {
    objects: Vec<F>,
    spacing: f64,
    min_seed: (f64, f64),
    root: Option<Node>,
}

impl<F: Footprint> Packer<F> {
    pub fn new(objects: Vec<F>) -> Self {
        Self {
            objects,
            spacing: 0.0,
            min_seed: (0.0, 0.0),
            root: None,
        }
    }

    /// Empty space to leave between neighboring objects.
    pub fn spacing(self, spacing: f64) -> Self {
        Self { spacing, ..self }
    }

    /// The smallest bin that packing will start from. The reported bin size is
    /// never smaller than this, spacing included.
    pub fn min_seed(self, min_seed: (f64, f64)) -> Self {
        Self { min_seed, ..self }
    }

    pub fn objects(&self) -> &[F] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [F] {
        &mut self.objects
    }

    pub fn into_objects(self) -> Vec<F> {
        self.objects
    }

    /// Size of the bin computed by the last successful call to `pack`.
    pub fn bin_size(&self) -> Option<(f64, f64)> {
        self.root.as_ref().map(|root| self.trim(root.rect().size))
    }

    /// Builds the packing tree and returns the size of the resulting bin.
    ///
    /// Any tree left over from an earlier call is thrown away first. If
    /// packing fails, the packer is left without a tree.
    pub fn pack(&mut self) -> Result<(f64, f64), PackError> {
        self.root = None;

        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(PackError::InvalidSpacing(self.spacing));
        }

        let (seed_width, seed_length) = self.min_seed;
        if !(seed_width.is_finite() && seed_length.is_finite())
            || seed_width < 0.0
            || seed_length < 0.0
        {
            return Err(PackError::InvalidSeed(seed_width, seed_length));
        }

        for (index, object) in self.objects.iter().enumerate() {
            let (width, length) = (object.width(), object.length());

            if !is_valid_extent(width) || !is_valid_extent(length) {
                return Err(PackError::InvalidFootprint {
                    index,
                    width,
                    length,
                });
            }
        }

        let num_objects = self.objects.len();
        log::trace!("Packing {} objects", num_objects);

        let first_size = match self.objects.first() {
            Some(first) => self.padded_size(first),
            None => {
                log::trace!("Nothing to pack, bin is empty");
                return Ok((0.0, 0.0));
            }
        };

        // The root carries one trailing gap that `trim` takes back off.
        let mut root = Node::new(
            (0.0, 0.0),
            (
                first_size.0.max(seed_width + self.spacing),
                first_size.1.max(seed_length + self.spacing),
            ),
        );
        root.place(0, first_size);

        for index in 1..num_objects {
            let size = self.padded_size(&self.objects[index]);

            if let Some(node) = root.find_free(size) {
                log::trace!("Placed object {} at {:?}", index, node.rect().pos);
                node.place(index, size);
                continue;
            }

            root = grow(root, size);

            let (width, length) = root.rect().size;
            if !(width.is_finite() && length.is_finite()) {
                return Err(PackError::Unpackable {
                    index,
                    width: size.0,
                    length: size.1,
                });
            }

            match root.find_free(size) {
                Some(node) => {
                    log::trace!(
                        "Placed object {} at {:?} after growing",
                        index,
                        node.rect().pos
                    );
                    node.place(index, size);
                }
                None => {
                    return Err(PackError::Unpackable {
                        index,
                        width: size.0,
                        length: size.1,
                    });
                }
            }
        }

        let bin_size = self.trim(root.rect().size);

        log::debug!(
            "Packed {} objects into a {} x {} bin",
            num_objects,
            bin_size.0,
            bin_size.1
        );

        self.root = Some(root);

        Ok(bin_size)
    }

    /// Moves every packed object to its place in the bin, with the bin's
    /// origin at `(offset_x, offset_y)`.
    ///
    /// Positions are absolute, so arranging twice with the same offsets is the
    /// same as arranging once.
    pub fn arrange(&mut self, offset_x: f64, offset_y: f64) {
        let root = match &self.root {
            Some(root) => root,
            None => {
                log::warn!("Asked to arrange objects before they were packed");
                return;
            }
        };

        for node in root.walk() {
            if let Some(index) = node.occupant() {
                let (x, y) = node.rect().pos;
                self.objects[index].translate(x + offset_x, y + offset_y);
            }
        }
    }

    /// Lists where each object ended up within the bin, in tree order.
    ///
    /// Empty until `pack` succeeds.
    pub fn placements(&self) -> Vec<Placement> {
        let root = match &self.root {
            Some(root) => root,
            None => return Vec::new(),
        };

        root.walk()
            .filter_map(|node| {
                let index = node.occupant()?;
                let object = &self.objects[index];

                Some(Placement {
                    index,
                    rect: Rect::new(node.rect().pos, (object.width(), object.length())),
                })
            })
            .collect()
    }

    fn padded_size(&self, object: &F) -> (f64, f64) {
        (object.width() + self.spacing, object.length() + self.spacing)
    }

    fn trim(&self, size: (f64, f64)) -> (f64, f64) {
        (
            (size.0 - self.spacing).max(0.0),
            (size.1 - self.spacing).max(0.0),
        )
    }
}

fn is_valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Which way to enlarge the bin when nothing in it has room for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    Up,
    Right,
}

/// Picks the direction that leaves the bin closer to square. Ties grow up.
pub(crate) fn choose_growth(bin: (f64, f64), size: (f64, f64)) -> Growth {
    let up = aspect_ratio((bin.0.max(size.0), bin.1 + size.1));
    let right = aspect_ratio((bin.0 + size.0, bin.1.max(size.1)));

    if up <= right {
        Growth::Up
    } else {
        Growth::Right
    }
}

fn aspect_ratio((width, length): (f64, f64)) -> f64 {
    width.max(length) / width.min(length)
}

fn grow(root: Node, size: (f64, f64)) -> Node {
    let bin = root.rect().size;

    match choose_growth(bin, size) {
        Growth::Up => grow_up(root, size),
        Growth::Right => grow_right(root, size),
    }
}

/// Adds a strip across the top of the bin, tall enough for `size`. The old
/// tree becomes the right child of the new root.
fn grow_up(root: Node, size: (f64, f64)) -> Node {
    let (width, length) = root.rect().size;
    let new_size = (width.max(size.0), length + size.1);

    log::trace!(
        "Growing bin up from {} x {} to {} x {}",
        width,
        length,
        new_size.0,
        new_size.1
    );

    let strip = Node::new((0.0, length), (new_size.0, size.1));

    Node::with_children(new_size, strip, root)
}

/// Adds a strip along the right side of the bin, wide enough for `size`. The
/// old tree becomes the up child of the new root.
fn grow_right(root: Node, size: (f64, f64)) -> Node {
    let (width, length) = root.rect().size;
    let new_size = (width + size.0, length.max(size.1));

    log::trace!(
        "Growing bin right from {} x {} to {} x {}",
        width,
        length,
        new_size.0,
        new_size.1
    );

    let strip = Node::new((width, 0.0), (size.0, new_size.1));

    Node::with_children(new_size, root, strip)
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::types::Item;

    fn pack_sizes(sizes: &[(f64, f64)]) -> (Packer<Item>, (f64, f64)) {
        let items = sizes.iter().copied().map(Item::new).collect();
        let mut packer = Packer::new(items);
        let bin = packer.pack().unwrap();

        (packer, bin)
    }

    #[test]
    fn empty() {
        let (packer, bin) = pack_sizes(&[]);

        assert_eq!(bin, (0.0, 0.0));
        assert!(packer.placements().is_empty());
    }

    #[test]
    fn single_object() {
        let (mut packer, bin) = pack_sizes(&[(3.0, 7.0)]);

        assert_eq!(bin, (3.0, 7.0));
        assert_eq!(packer.bin_size(), Some((3.0, 7.0)));

        packer.arrange(0.0, 0.0);
        assert_eq!(packer.objects()[0].position(), (0.0, 0.0));
    }

    #[test]
    fn two_squares() {
        let (packer, bin) = pack_sizes(&[(2.0, 2.0), (2.0, 2.0)]);

        assert!(bin == (4.0, 2.0) || bin == (2.0, 4.0), "bin was {:?}", bin);

        let placements = packer.placements();
        assert_eq!(placements.len(), 2);
        assert!(!placements[0].rect().intersects(&placements[1].rect()));
    }

    #[test]
    fn tie_grows_up() {
        assert_eq!(choose_growth((2.0, 2.0), (2.0, 2.0)), Growth::Up);

        for _ in 0..10 {
            let (_, bin) = pack_sizes(&[(2.0, 2.0), (2.0, 2.0)]);
            assert_eq!(bin, (2.0, 4.0));
        }
    }

    #[test]
    fn growth_keeps_bin_square() {
        // A tall bin should grow sideways.
        assert_eq!(choose_growth((2.0, 6.0), (2.0, 2.0)), Growth::Right);

        // A wide bin should grow up.
        assert_eq!(choose_growth((6.0, 2.0), (2.0, 2.0)), Growth::Up);

        let (_, bin) = pack_sizes(&[(2.0, 2.0); 4]);
        assert_eq!(bin, (4.0, 4.0));
    }

    #[test]
    fn reuses_free_space_before_growing() {
        // The second object grows a 4x2 strip on top of the bin and only uses
        // half of it. The third object should take the other half.
        let (packer, bin) = pack_sizes(&[(4.0, 4.0), (2.0, 2.0), (2.0, 2.0)]);

        assert_eq!(bin, (4.0, 6.0));

        let third = packer
            .placements()
            .into_iter()
            .find(|placement| placement.index() == 2)
            .unwrap();
        assert_eq!(third.position(), (2.0, 4.0));
    }

    #[test]
    fn min_seed() {
        let items = vec![Item::new((1.0, 1.0)), Item::new((1.0, 1.0))];
        let mut packer = Packer::new(items).min_seed((5.0, 5.0));

        assert_eq!(packer.pack().unwrap(), (5.0, 5.0));
    }

    #[test]
    fn min_seed_with_spacing() {
        let items = vec![Item::new((1.0, 1.0)), Item::new((1.0, 1.0))];
        let mut packer = Packer::new(items).min_seed((5.0, 5.0)).spacing(1.0);

        assert_eq!(packer.pack().unwrap(), (5.0, 5.0));

        let placements = packer.placements();
        assert_eq!(placements[0].position(), (0.0, 0.0));
        assert_eq!(placements[1].position(), (0.0, 2.0));
    }

    #[test]
    fn spacing_separates_objects() {
        let items = vec![Item::new((2.0, 2.0)), Item::new((2.0, 2.0))];
        let mut packer = Packer::new(items).spacing(1.0);

        assert_eq!(packer.pack().unwrap(), (2.0, 5.0));

        packer.arrange(0.0, 0.0);
        assert_eq!(packer.objects()[0].position(), (0.0, 0.0));
        assert_eq!(packer.objects()[1].position(), (0.0, 3.0));
    }

    #[test]
    fn rejects_degenerate_footprints() {
        let bad_sizes = [
            (0.0, 1.0),
            (1.0, -2.0),
            (std::f64::NAN, 1.0),
            (1.0, std::f64::INFINITY),
        ];

        for &bad in &bad_sizes {
            let items = vec![Item::new((1.0, 1.0)), Item::new(bad)];
            let mut packer = Packer::new(items);

            match packer.pack() {
                Err(PackError::InvalidFootprint { index, .. }) => assert_eq!(index, 1),
                other => panic!("expected InvalidFootprint for {:?}, got {:?}", bad, other),
            }

            assert_eq!(packer.bin_size(), None);
        }
    }

    #[test]
    fn rejects_bad_config() {
        let mut packer = Packer::new(vec![Item::new((1.0, 1.0))]).spacing(-1.0);
        assert_eq!(packer.pack(), Err(PackError::InvalidSpacing(-1.0)));

        let mut packer = Packer::new(vec![Item::new((1.0, 1.0))]).min_seed((1.0, -3.0));
        assert_eq!(packer.pack(), Err(PackError::InvalidSeed(1.0, -3.0)));
    }

    #[test]
    fn overflowing_growth_is_unpackable() {
        let huge = std::f64::MAX;
        let items = vec![Item::new((huge, huge)), Item::new((huge, huge))];
        let mut packer = Packer::new(items);

        match packer.pack() {
            Err(PackError::Unpackable { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected Unpackable, got {:?}", other),
        }

        assert_eq!(packer.bin_size(), None);
    }

    #[test]
    fn arrange_before_pack_does_nothing() {
        let mut packer = Packer::new(vec![Item::new((1.0, 1.0))]);
        packer.arrange(5.0, 5.0);

        assert_eq!(packer.objects()[0].position(), (0.0, 0.0));
    }
}
