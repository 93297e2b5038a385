//! Growpack packs rectangular footprints into a single bin that grows as it
//! goes. It was built for Plater, which lays out parts on a 3D printer's build
//! plate before they get sliced.
//!
//! The bin starts out the size of the first footprint. Every footprint after
//! that goes into the first free space that can hold it; when none can, the bin
//! grows either up or to the right, whichever keeps it closer to square.
//!
//! ## Example
//! ```
//! use growpack::{Footprint, Item, Packer};
//!
//! // Anything that implements Footprint can be packed. Item is the simplest
//! // one: a size and the position it was moved to.
//! let my_items = vec![
//!     Item::new((40.0, 20.0)),
//!     Item::new((20.0, 20.0)),
//!     Item::new((10.0, 35.0)),
//! ];
//!
//! // Leave 2mm between parts.
//! let mut packer = Packer::new(my_items).spacing(2.0);
//!
//! // Compute a layout, then move every item so the bin starts at (100, 100).
//! let (width, length) = packer.pack()?;
//! packer.arrange(100.0, 100.0);
//!
//! for item in packer.objects() {
//!     let (x, y) = item.position();
//!     assert!(x >= 100.0 && x + item.width() <= 100.0 + width);
//!     assert!(y >= 100.0 && y + item.length() <= 100.0 + length);
//! }
//! # Ok::<(), growpack::PackError>(())
//! ```

mod error;
mod geometry;
mod node;
mod packer;
mod types;

pub use error::*;
pub use geometry::Rect;
pub use packer::Packer;
pub use types::*;
