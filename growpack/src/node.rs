use std::mem;

use crate::geometry::Rect;

/// A rectangle of space inside the bin.
///
/// A leaf node is free space. Placing an object in a leaf splits the space
/// left over into an `up` child above the object and a `right` child beside
/// it. Roots created by growing the bin also have children, but no occupant.
///
/// Positions are absolute within the bin, so subtrees can be moved under a new
/// root without touching their coordinates.
#[derive(Debug)]
pub(crate) struct Node {
    rect: Rect,
    up: Option<Box<Node>>,
    right: Option<Box<Node>>,
    occupant: Option<usize>,
}

impl Node {
    pub fn new(pos: (f64, f64), size: (f64, f64)) -> Self {
        Self {
            rect: Rect::new(pos, size),
            up: None,
            right: None,
            occupant: None,
        }
    }

    /// Creates a node that covers `up` and `right` without holding anything
    /// itself.
    pub fn with_children(size: (f64, f64), up: Node, right: Node) -> Self {
        Self {
            rect: Rect::new((0.0, 0.0), size),
            up: Some(Box::new(up)),
            right: Some(Box::new(right)),
            occupant: None,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn occupant(&self) -> Option<usize> {
        self.occupant
    }

    #[inline]
    pub fn up(&self) -> Option<&Node> {
        self.up.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    #[inline]
    pub fn fits(&self, size: (f64, f64)) -> bool {
        size.0 <= self.rect.width() && size.1 <= self.rect.length()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.up.is_none() && self.right.is_none()
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Puts the object at `index` in the bottom left corner of this node and
    /// splits the rest into two free leaves: one spanning the full width above
    /// the object, and one beside the object as tall as the object.
    pub fn place(&mut self, index: usize, size: (f64, f64)) {
        debug_assert!(self.is_leaf(), "only leaves can hold objects");
        debug_assert!(!self.is_occupied(), "node is already occupied");
        debug_assert!(self.fits(size), "object does not fit in node");

        let (x, y) = self.rect.pos;
        let (width, length) = self.rect.size;

        self.occupant = Some(index);
        self.up = Some(Box::new(Node::new(
            (x, y + size.1),
            (width, length - size.1),
        )));
        self.right = Some(Box::new(Node::new(
            (x + size.0, y),
            (width - size.0, size.1),
        )));
    }

    /// Finds the first free leaf that `size` fits in, searching up before
    /// right, depth first.
    pub fn find_free(&mut self, size: (f64, f64)) -> Option<&mut Node> {
        let mut unvisited: Vec<&mut Node> = vec![self];

        while let Some(node) = unvisited.pop() {
            if node.is_leaf() {
                if node.fits(size) {
                    return Some(node);
                }

                continue;
            }

            let Node { up, right, .. } = node;

            if let Some(right) = right.as_deref_mut() {
                unvisited.push(right);
            }

            if let Some(up) = up.as_deref_mut() {
                unvisited.push(up);
            }
        }

        None
    }

    /// Visits every node in the tree rooted here, up before right, depth
    /// first.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        Walk {
            unvisited: vec![self],
        }
    }
}

struct Walk<'a> {
    unvisited: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.unvisited.pop()?;

        if let Some(right) = node.right() {
            self.unvisited.push(right);
        }

        if let Some(up) = node.up() {
            self.unvisited.push(up);
        }

        Some(node)
    }
}

// Trees grow one level per object along chains of splits, so dropping them
// recursively can run out of stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut to_drop: Vec<Box<Node>> = Vec::new();
        to_drop.extend(self.up.take());
        to_drop.extend(self.right.take());

        while let Some(mut node) = to_drop.pop() {
            to_drop.extend(node.up.take());
            to_drop.extend(node.right.take());

            // Both children are gone, so this drop doesn't recurse.
            mem::drop(node);
        }
    }
}
