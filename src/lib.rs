//! # fusion
//!
//! Generic collection utilities for slices and hash maps.
//!
//! ## Overview
//!
//! Every function in this crate is a stateless transformation over an
//! in-memory collection. The crate is organized into:
//!
//! - **Set Algebra**: `difference`, `intersection`, `union`, `uniq`
//! - **Traversal**: `map`, `filter`, `reduce`, `every`, `some`, `find_index`, `remove`
//! - **Sequence**: `chunk`, `concat`, `fill`, `flatten`, `includes`, `join`,
//!   `pull`, `reverse`, `shuffle`, `slice`, `zip`
//! - **Mapping**: `get_or_default`, `keys`, `values`, `map_keys`, `map_values`,
//!   `merge`, `pick`, `omit`
//!
//! Inputs are borrowed and left untouched, except for the documented in-place
//! operations (`fill`, `reverse`, `shuffle`, `remove`), which take `&mut` and
//! each come with a non-mutating counterpart.
//!
//! ## Feature Flags
//!
//! - `set-algebra`: Set algebra and deduplication
//! - `traversal`: Higher-order traversal
//! - `sequence`: Slice helpers
//! - `mapping`: `HashMap` helpers
//! - `shuffle`: Random permutation (pulls in `rand`)
//! - `fxhash` / `ahash`: Faster hashers for the internal membership sets
//! - `serde`: `Serialize`/`Deserialize` for [`sequence::Nested`]
//! - `tracing`: Trace events from the in-place operations
//! - `full`: Enable all of the above except the hasher choice
//!
//! ## Example
//!
#![cfg_attr(
    all(feature = "set-algebra", feature = "traversal", feature = "sequence"),
    doc = "```rust"
)]
#![cfg_attr(
    not(all(feature = "set-algebra", feature = "traversal", feature = "sequence")),
    doc = "```ignore"
)]
//! use fusion::prelude::*;
//!
//! let orders = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
//!
//! let distinct = uniq(&orders);
//! assert_eq!(distinct, vec![3, 1, 4, 5, 9, 2, 6]);
//!
//! let large = filter(&distinct, |_, value, threshold| value > threshold, &4);
//! assert_eq!(large, vec![5, 9, 6]);
//!
//! let total = reduce(&large, |accumulator, value, _, _| accumulator + value, 0, &());
//! assert_eq!(total, 20);
//!
//! assert_eq!(chunk(&large, 2), vec![&[5, 9][..], &[6][..]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use fusion::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;

    #[cfg(feature = "set-algebra")]
    pub use crate::set_algebra::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;
}

mod error;
pub mod hashing;

#[cfg(feature = "set-algebra")]
pub mod set_algebra;

#[cfg(feature = "traversal")]
pub mod traversal;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

pub use error::CollectionError;
