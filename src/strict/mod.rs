//! Strict (immediately-evaluated) persistent list.
//!
//! This module provides [`StrictList`], an immutable singly-linked list that
//! uses structural sharing to avoid copying:
//!
//! - [`StrictList`]: persistent singly-linked list with an ephemeral
//!   (storage-reusing) consumption API
//!
//! # Structural Sharing
//!
//! Operations never mutate a list in place. Wherever the result can reuse
//! part of the input's node chain — the suffix returned by
//! [`tail`](StrictList::tail), the right operand of
//! [`append`](StrictList::append), everything produced by
//! [`take`](StrictList::take) and [`split_at`](StrictList::split_at) — the
//! nodes are shared rather than duplicated, and each node is freed exactly
//! once, when its last remaining owner lets go of it.
//!
//! # Examples
//!
//! ```rust
//! use sharelist::strict::StrictList;
//!
//! let list = StrictList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! ```

mod list;

pub use list::StrictList;
pub use list::StrictListIntoIterator;
pub use list::StrictListIterator;
