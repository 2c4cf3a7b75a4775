//! Error types for the checked collection operations.
//!
//! Most operations in this crate never fail: out-of-range bounds are clamped
//! and empty inputs produce empty outputs. The checked variants
//! (`try_slice`, `try_chunk`) report degenerate requests through
//! [`CollectionError`] instead, so that callers can tell "nothing matched"
//! apart from "the request made no sense".

/// Represents errors reported by the checked collection operations.
///
/// # Examples
///
/// ```rust
/// use fusion::CollectionError;
///
/// let error = CollectionError::InvalidRange {
///     start: 3,
///     end: 2,
///     length: 5,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invalid range 3..2 for collection of length 5"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// The requested range starts after it ends, once clamped to the collection.
    InvalidRange {
        /// The requested start index.
        start: usize,
        /// The requested end index (exclusive).
        end: usize,
        /// The length of the collection the range was applied to.
        length: usize,
    },
    /// A chunk size of zero was requested.
    ZeroChunkSize,
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { start, end, length } => write!(
                formatter,
                "invalid range {start}..{end} for collection of length {length}"
            ),
            Self::ZeroChunkSize => write!(formatter, "chunk size must be greater than zero"),
        }
    }
}

impl std::error::Error for CollectionError {}

static_assertions::assert_impl_all!(CollectionError: std::error::Error, Send, Sync, Copy);
