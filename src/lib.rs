//! Values paired with an explicit, stable identifier.
//!
//! [`IdentifiedValue`] gives a value that has no natural identity a stand-in
//! one, so it can be stored in structures keyed by identity rather than by
//! value equality. The wrapper compares and hashes by value; the id is only
//! reachable through [`IdentifiedValue::id`] or the [`Identifiable`] trait.
//!
//! ```
//! use identified::IdentifiedValue;
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut point = IdentifiedValue::with_key(Point { x: 1, y: 2 }, |p| &p.x);
//! point.y = 9;
//! assert_eq!(point.value, Point { x: 1, y: 9 });
//! assert_eq!(*point.id(), 1);
//! ```

mod identifiable;
mod identified;

pub use crate::identifiable::Identifiable;
pub use crate::identified::IdentifiedValue;
