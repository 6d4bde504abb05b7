//! # sharelist
//!
//! A persistent (immutable) singly-linked list with structural sharing and an
//! explicit ephemeral consumption API.
//!
//! ## Overview
//!
//! The centrepiece of this crate is [`StrictList`](strict::StrictList), a
//! strict (immediately-evaluated) cons-list in which every operation leaves
//! its input untouched and shares as much of the underlying node chain as the
//! operation's semantics allow. Structural sharing is tracked with plain
//! non-atomic reference counts, so the list is strictly single-threaded.
//!
//! Two consumption disciplines coexist:
//!
//! - **Persistent** (`&self` methods): the input handle stays valid; the
//!   operation shares nodes or duplicates elements as needed.
//! - **Ephemeral** (consuming methods such as
//!   [`into_vec`](strict::StrictList::into_vec),
//!   [`into_map`](strict::StrictList::into_map), and the owning iterator):
//!   the caller gives up the handle, and the implementation moves elements
//!   out of uniquely-owned nodes instead of copying them.
//!
//! ## Example
//!
//! ```rust
//! use sharelist::strict::StrictList;
//!
//! let list: StrictList<i32> = (1..=5).collect();
//! let (prefix, suffix) = list.split_at(2);
//!
//! // The original list is untouched; prefix and suffix share its nodes.
//! assert_eq!(list.len(), 5);
//! assert_eq!(prefix.to_vec(), vec![1, 2]);
//! assert_eq!(suffix.to_vec(), vec![3, 4, 5]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for `StrictList`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use sharelist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::strict::*;
}

pub mod strict;
