//! Persistent (immutable) strict singly-linked list.
//!
//! This module provides [`StrictList`], an immutable singly-linked list with
//! structural sharing and two coexisting consumption disciplines.
//!
//! # Overview
//!
//! `StrictList` is a cons-list inspired by Haskell's `[]`, evaluated
//! strictly. It provides:
//!
//! - O(1) prepend (`cons`), `tail`, `init`, `take`, and `drop_from_end`
//! - O(1) head access and length
//! - O(n) index access, append, and the usual map/filter/fold family
//!
//! All operations return new lists without modifying the original, and
//! structural sharing ensures memory efficiency.
//!
//! # Persistent and Ephemeral Calls
//!
//! Borrowing (`&self`) methods are *persistent*: the input handle stays valid
//! and reusable afterwards, and the operation either shares nodes (a
//! reference-count increment) or duplicates elements. Consuming (`self`)
//! methods — [`into_vec`](StrictList::into_vec),
//! [`into_map`](StrictList::into_map),
//! [`into_filter`](StrictList::into_filter), and the owning iterator — are
//! *ephemeral*: the caller asserts the input is dead, which lets the
//! implementation move elements out of uniquely-owned nodes instead of
//! cloning them. Nodes still shared with another list are never cannibalised;
//! their elements are cloned and the shared suffix survives untouched.
//!
//! # Structural Sharing
//!
//! When you create a new list by prepending an element with `cons`, the new
//! list shares all nodes with the original list:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! Decomposition shares in the other direction: `take` and `init` return a
//! handle onto the *same* chain with a shorter recorded length, so the nodes
//! past the logical end stay allocated until every handle referencing the
//! chain is gone. Every traversal in this module is bounded by the recorded
//! length, never by the physical end of the chain.
//!
//! # Dropping
//!
//! Dropping a `StrictList` walks its chain iteratively and frees each node
//! that has no other owner, stopping at the first node still shared with
//! another list. The walk is a loop, not recursion, so dropping a
//! million-element list does not overflow the stack.
//!
//! # Examples
//!
//! ```rust
//! use sharelist::strict::StrictList;
//!
//! // Build a list using cons
//! let list = StrictList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list with prepended element
//!
//! // Build from an iterator
//! let list: StrictList<i32> = (1..=5).collect();
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::rc::Rc;

use smallvec::SmallVec;

/// Inline capacity of the element buffer used by [`StrictList::fold_right`].
///
/// Right folds over lists no longer than this run without a heap allocation.
const FOLD_BUFFER_CAPACITY: usize = 32;

/// Internal node structure for the strict list.
///
/// Each node owns one element and an optional reference to its successor.
/// Using `Rc` enables structural sharing between lists: the strong count of
/// a node is exactly one (its canonical owner) plus the number of additional
/// lists or nodes holding onto it.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node (if any).
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) strict singly-linked list.
///
/// `StrictList` is an immutable data structure that uses structural sharing
/// to efficiently support functional programming patterns. Borrowing methods
/// never invalidate the receiver; consuming methods reuse uniquely-owned
/// storage. See the [module documentation](self) for the full discipline.
///
/// The recorded length may be shorter than the underlying node chain (after
/// [`take`](Self::take) or [`init`](Self::init)); all operations respect the
/// recorded length.
///
/// `StrictList` is single-threaded: sharing is tracked with plain non-atomic
/// counters, so the type is neither `Send` nor `Sync`.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1)       |
/// | `init`       | O(1)       |
/// | `take`       | O(1)       |
/// | `len`        | O(1)       |
/// | `get`        | O(n)       |
/// | `drop_first` | O(n)       |
/// | `append`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use sharelist::strict::StrictList;
///
/// let list = StrictList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct StrictList<T> {
    /// Reference to the head node (if any).
    head: Option<Rc<Node<T>>>,
    /// Number of elements reachable through this handle.
    ///
    /// Invariant: at most the physical chain length, and every operation is
    /// bounded by this field rather than by the chain's terminal.
    length: usize,
}

impl<T> StrictList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = StrictList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from a Vec, consuming it.
    ///
    /// Uses `Vec::pop()` to consume elements from the end, which is O(1),
    /// avoiding the need for reverse iteration.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        if length == 0 {
            return Self::new();
        }

        // Build from end to start using Vec::pop()
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Prepends an element to the front of the list.
    ///
    /// This operation creates a new list with the element at the front,
    /// sharing the structure of the original list (the original head node
    /// gains one owner).
    ///
    /// # Arguments
    ///
    /// * `element` - The element to prepend
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// let empty: StrictList<i32> = StrictList::new();
    /// assert_eq!(empty.head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// assert_eq!(list.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.get_from_end(0)
    }

    /// Returns the list without its first element.
    ///
    /// Returns `None` if the list is empty. The result shares its entire
    /// chain with the original list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(3).cons(2).cons(1);
    /// let tail = list.tail().unwrap();
    /// assert_eq!(tail.head(), Some(&2));
    /// assert_eq!(tail.len(), 2);
    ///
    /// let empty: StrictList<i32> = StrictList::new();
    /// assert!(empty.tail().is_none());
    /// ```
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        if self.length == 0 {
            return None;
        }
        self.head.as_ref().map(|node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Returns the list without its last element.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// The result shares the *whole* chain with the original, including the
    /// node holding the excluded last element; only the recorded length
    /// shrinks. The excluded node stays allocated until every handle
    /// referencing the chain is dropped.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// let init = list.init().unwrap();
    /// assert_eq!(init.to_vec(), vec![1, 2]);
    /// assert_eq!(init.last(), Some(&2));
    /// ```
    #[must_use]
    pub fn init(&self) -> Option<Self> {
        if self.length == 0 {
            return None;
        }
        Some(Self {
            head: self.head.clone(),
            length: self.length - 1,
        })
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(2).cons(1);
    /// if let Some((head, tail)) = list.uncons() {
    ///     assert_eq!(*head, 1);
    ///     assert_eq!(tail.head(), Some(&2));
    /// }
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        if self.length == 0 {
            return None;
        }
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Arguments
    ///
    /// * `index` - The zero-based index of the element
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.length {
            return None;
        }
        self.iter().nth(index)
    }

    /// Returns a reference to the element at the given index, counted from
    /// the end of the list.
    ///
    /// `get_from_end(0)` is the last element, `get_from_end(1)` the one
    /// before it, and so on. Returns `None` if the index is out of bounds.
    ///
    /// Implemented with the two-pointer technique in a single pass: a lead
    /// cursor advances `index + 1` steps, then both cursors advance together
    /// until the lead reaches the end; the trailing cursor then sits on the
    /// target element.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// assert_eq!(list.get_from_end(0), Some(&5));
    /// assert_eq!(list.get_from_end(4), Some(&1));
    /// assert_eq!(list.get_from_end(5), None);
    /// ```
    #[must_use]
    pub fn get_from_end(&self, index: usize) -> Option<&T> {
        let mut lead = self.iter();
        for _ in 0..=index {
            lead.next()?;
        }

        let mut trail = self.iter();
        while lead.next().is_some() {
            trail.next();
        }
        trail.next()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// Emptiness is determined by the recorded length, not by the chain: a
    /// handle produced by `take(0)` may still reference nodes while being
    /// logically empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let empty: StrictList<i32> = StrictList::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.cons(1);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if the given element is in the list.
    ///
    /// Never consumes or invalidates the list.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&7));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements from front to back. It records the
    /// remaining length at creation, so it stops at the list's logical end
    /// even when the underlying chain extends further.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> StrictListIterator<'_, T> {
        StrictListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Returns a new list containing the first `count` elements.
    ///
    /// If `count` exceeds the list's length, the whole list is kept. The
    /// result shares the chain with the original; only the recorded length
    /// differs.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// assert_eq!(list.take(3).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.take(10).to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(list.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        Self {
            head: self.head.clone(),
            length: count.min(self.length),
        }
    }

    /// Returns a new list with the first `count` elements removed.
    ///
    /// If `count` exceeds the list's length, returns an empty list. The
    /// suffix is shared, not copied.
    ///
    /// # Complexity
    ///
    /// O(count) for the walk, O(1) space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// assert_eq!(list.drop_first(2).to_vec(), vec![3, 4, 5]);
    /// assert!(list.drop_first(10).is_empty());
    /// assert_eq!(list.drop_first(0).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        if count >= self.length {
            return Self::new();
        }

        let mut node = self.head.as_ref();
        for _ in 0..count {
            node = node.and_then(|current| current.next.as_ref());
        }

        Self {
            head: node.cloned(),
            length: self.length - count,
        }
    }

    /// Returns a new list containing the last `count` elements.
    ///
    /// Equivalent to `drop_first(len - count)`, clamped at dropping nothing
    /// when `count` exceeds the length.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// assert_eq!(list.take_from_end(2).to_vec(), vec![4, 5]);
    /// assert_eq!(list.take_from_end(9).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn take_from_end(&self, count: usize) -> Self {
        self.drop_first(self.length.saturating_sub(count))
    }

    /// Returns a new list with the last `count` elements removed.
    ///
    /// Equivalent to `take(len - count)`, clamped at an empty list when
    /// `count` exceeds the length.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// assert_eq!(list.drop_from_end(2).to_vec(), vec![1, 2, 3]);
    /// assert!(list.drop_from_end(9).is_empty());
    /// ```
    #[must_use]
    pub fn drop_from_end(&self, count: usize) -> Self {
        self.take(self.length.saturating_sub(count))
    }

    /// Splits the list at the given index.
    ///
    /// Returns a tuple of two lists: the first contains elements before the
    /// index, the second contains elements from the index onward. Both share
    /// the original chain. An out-of-range index yields the whole list as
    /// the prefix and an empty suffix.
    ///
    /// # Complexity
    ///
    /// O(index): the prefix is an O(1) share, the suffix requires the walk
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// let (left, right) = list.split_at(2);
    /// assert_eq!(left.to_vec(), vec![1, 2]);
    /// assert_eq!(right.to_vec(), vec![3, 4, 5]);
    ///
    /// let (all, empty) = list.split_at(9);
    /// assert_eq!(all.len(), 5);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        (self.take(index), self.drop_first(index))
    }

    /// Splits the list at the given index, counted from the end.
    ///
    /// Equivalent to `split_at(len - index)`, clamped at the front of the
    /// list when `index` exceeds the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// let (left, right) = list.split_at_from_end(2);
    /// assert_eq!(left.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(right.to_vec(), vec![4, 5]);
    /// ```
    #[must_use]
    pub fn split_at_from_end(&self, index: usize) -> (Self, Self) {
        self.split_at(self.length.saturating_sub(index))
    }

    /// Splits the list into its longest prefix satisfying the predicate and
    /// the remaining suffix.
    ///
    /// Every element of the prefix satisfies `predicate`; the suffix is
    /// either empty or starts with the first element that fails it. The
    /// predicate is evaluated once per prefix element (plus once for the
    /// failing element, if any). Both halves share the original chain.
    ///
    /// # Complexity
    ///
    /// O(n) worst case
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=10).collect();
    /// let (small, rest) = list.span(|element| *element < 5);
    /// assert_eq!(small.to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(rest.to_vec(), vec![5, 6, 7, 8, 9, 10]);
    /// ```
    #[must_use]
    pub fn span<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&T) -> bool,
    {
        let mut node = self.head.as_ref();
        let mut count = 0;

        while count < self.length {
            match node {
                Some(current) if predicate(&current.element) => {
                    count += 1;
                    node = current.next.as_ref();
                }
                _ => break,
            }
        }

        let prefix = Self {
            head: self.head.clone(),
            length: count,
        };
        let suffix = Self {
            head: node.cloned(),
            length: self.length - count,
        };
        (prefix, suffix)
    }

    /// Transforms the list by applying `worker` to each element, in order.
    ///
    /// Builds an entirely new chain; the input elements are passed by
    /// reference and never duplicated, so `worker` is responsible for
    /// producing a freshly owned output value. The element type may change.
    ///
    /// For the consuming variant that reuses uniquely-owned storage, see
    /// [`into_map`](Self::into_map).
    ///
    /// # Complexity
    ///
    /// O(n), not counting `worker`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// let doubled = list.map(|element| element * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// // The original list is untouched
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, worker: F) -> StrictList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(worker).collect()
    }

    /// Folds the list from the left.
    ///
    /// `worker` receives ownership of the accumulator and returns the next
    /// accumulator; elements are passed by reference and must not be moved
    /// out of the list.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) extra space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=5).collect();
    /// let sum = list.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 15);
    /// ```
    #[must_use]
    pub fn fold_left<B, F>(&self, initial: B, worker: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, worker)
    }

    /// Folds the list from the right.
    ///
    /// `worker` receives each element by reference together with ownership
    /// of the accumulator, starting from the last element.
    ///
    /// A naive right fold recurses to the end of the list and applies the
    /// worker on the way back, costing O(n) call stack. This implementation
    /// buffers element references (inline for short lists) and folds the
    /// buffer in reverse instead: O(n) time, O(n) heap at worst, O(1) stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=4).collect();
    /// let result = list.fold_right(0, |element, accumulator| element - accumulator);
    /// // 1 - (2 - (3 - (4 - 0))) = -2
    /// assert_eq!(result, -2);
    /// ```
    #[must_use]
    pub fn fold_right<B, F>(&self, initial: B, mut worker: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: SmallVec<[&T; FOLD_BUFFER_CAPACITY]> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| worker(element, accumulator))
    }
}

impl<T: Clone> StrictList<T> {
    /// Creates a list from a slice.
    ///
    /// The first element of the slice becomes the first element of the list.
    /// Every element is cloned into a fresh node.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `slice.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list = StrictList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let length = slice.len();
        if length == 0 {
            return Self::new();
        }

        // Iterate slice in reverse order (DoubleEndedIterator makes this efficient)
        let mut head: Option<Rc<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(Rc::new(Node {
                element: element.clone(),
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Copies the elements into a `Vec`, in order.
    ///
    /// The result never aliases the list's internal storage. The list stays
    /// valid; for the consuming variant see [`into_vec`](Self::into_vec).
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Consumes the list and returns its elements as a `Vec`, in order.
    ///
    /// Elements in uniquely-owned nodes are moved out without cloning;
    /// elements in nodes shared with another list are cloned and the shared
    /// suffix is left intact.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<String> = ["a", "b"].iter().map(|s| (*s).to_string()).collect();
    /// let elements = list.into_vec();
    /// assert_eq!(elements, vec!["a".to_string(), "b".to_string()]);
    /// ```
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Appends another list to this list.
    ///
    /// Returns a new list containing all elements from this list followed by
    /// all elements from the other list. This list's elements are cloned
    /// into fresh nodes; the other list's chain is *shared*, never copied —
    /// the tail of the fresh prefix points directly at it.
    ///
    /// When either operand is empty the other is shared outright, which is
    /// safe because lists are immutable.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`; the other list contributes O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list1 = StrictList::new().cons(2).cons(1);
    /// let list2 = StrictList::new().cons(4).cons(3);
    /// let combined = list1.append(&list2);
    ///
    /// assert_eq!(combined.to_vec(), vec![1, 2, 3, 4]);
    /// // Both inputs remain valid
    /// assert_eq!(list1.to_vec(), vec![1, 2]);
    /// assert_eq!(list2.to_vec(), vec![3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        // Clone this list's elements, then cons them onto the shared tail
        // back to front using Vec::pop()
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut head = other.head.clone();
        let mut length = other.length;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
            length += 1;
        }

        Self { head, length }
    }

    /// Returns a new list containing only the elements that satisfy the
    /// predicate, in their original order.
    ///
    /// Retained elements are cloned into fresh nodes. For the consuming
    /// variant see [`into_filter`](Self::into_filter).
    ///
    /// # Complexity
    ///
    /// O(n), not counting `predicate`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=6).collect();
    /// let evens = list.filter(|element| element % 2 == 0);
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Consuming variant of [`map`](Self::map).
    ///
    /// Elements in uniquely-owned nodes are moved into `worker` without
    /// cloning; elements shared with another list are cloned first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// let doubled = list.into_map(|element| element * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn into_map<B, F>(self, worker: F) -> StrictList<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(worker).collect()
    }

    /// Consuming variant of [`filter`](Self::filter).
    ///
    /// Retained elements are moved rather than cloned when their nodes are
    /// uniquely owned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=6).collect();
    /// let odds = list.into_filter(|element| element % 2 == 1);
    /// assert_eq!(odds.to_vec(), vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn into_filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Returns a new list with elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharelist::strict::StrictList;
    ///
    /// let list: StrictList<i32> = (1..=3).collect();
    /// assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`StrictList`].
///
/// The cursor is a pair of remaining length and current node, captured when
/// the iterator is created. It is bounded by the list's logical length, so
/// nodes past a `take`/`init` truncation are never yielded.
pub struct StrictListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for StrictListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.current.map(|node| {
            self.remaining -= 1;
            self.current = node.next.as_ref();
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for StrictListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for StrictListIterator<'_, T> {}

/// An owning iterator over elements of a [`StrictList`].
///
/// This is the ephemeral traversal: each uniquely-owned node is dismantled
/// and its element moved out; elements of nodes shared with another list are
/// cloned, leaving the shared suffix intact. Dropping the iterator midway
/// releases the unconsumed remainder through the list's own drop walk.
pub struct StrictListIntoIterator<T> {
    list: StrictList<T>,
}

impl<T: Clone> Iterator for StrictListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.list.length == 0 {
            return None;
        }
        let node = self.list.head.take()?;
        self.list.length -= 1;
        match Rc::try_unwrap(node) {
            Ok(node) => {
                self.list.head = node.next;
                Some(node.element)
            }
            Err(node) => {
                self.list.head = node.next.clone();
                Some(node.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for StrictListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

impl<T: Clone> FusedIterator for StrictListIntoIterator<T> {}

// =============================================================================
// Ownership: Clone and Drop
// =============================================================================

/// Cloning a handle is O(1): the head node gains one owner and the recorded
/// length is copied. The source is never consumed or mutated, and the clone
/// observes exactly the same elements.
impl<T> Clone for StrictList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

/// Dropping a handle releases its chain iteratively.
///
/// Each node that has no other owner is freed (dropping its element) and the
/// walk continues to its successor; the walk stops at the first node still
/// owned elsewhere, whose subtree then survives under its remaining owners.
/// A loop rather than recursive node destructors, so long uniquely-owned
/// chains cannot overflow the stack.
impl<T> Drop for StrictList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(node) => current = node.next,
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for StrictList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for StrictList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T> From<Vec<T>> for StrictList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for StrictList<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T: Clone> IntoIterator for StrictList<T> {
    type Item = T;
    type IntoIter = StrictListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        StrictListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a StrictList<T> {
    type Item = &'a T;
    type IntoIter = StrictListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structural equality: equal lengths and pairwise equal elements, in order.
///
/// Lengths are compared first, so lists of different lengths are rejected in
/// O(1). Neither operand is consumed or mutated.
impl<T: PartialEq> PartialEq for StrictList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for StrictList<T> {}

/// Computes a hash value for this list.
///
/// The hash covers the length and then each element in order, keeping `Hash`
/// consistent with the structural `Eq`: two equal lists hash identically even
/// when their recorded lengths truncate physically longer chains.
impl<T: Hash> Hash for StrictList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StrictList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for StrictList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// Sharing is tracked with non-atomic counters; the single-threaded contract
// is part of the type.
static_assertions::assert_not_impl_any!(StrictList<i32>: Send, Sync);
static_assertions::assert_impl_all!(StrictList<i32>: Clone, Default);

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for StrictList<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct StrictListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> StrictListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for StrictListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = StrictList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(StrictList::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for StrictList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(StrictListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    /// Strong count of the head node, i.e. one plus its extra-owner count.
    fn head_owner_count<T>(list: &StrictList<T>) -> usize {
        list.head.as_ref().map_or(0, Rc::strong_count)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let list: StrictList<i32> = StrictList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
    }

    #[rstest]
    fn test_singleton() {
        let list = StrictList::singleton(42);
        assert_eq!(list.head(), Some(&42));
        assert_eq!(list.len(), 1);
    }

    #[rstest]
    fn test_from_slice_preserves_order() {
        let list = StrictList::from_slice(&[1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_from_iterator_and_from_vec_agree() {
        let collected: StrictList<i32> = (1..=4).collect();
        let converted = StrictList::from(vec![1, 2, 3, 4]);
        assert_eq!(collected, converted);
    }

    // =========================================================================
    // Sharing discipline
    // =========================================================================

    #[rstest]
    fn test_clone_is_constant_time_share() {
        let list: StrictList<i32> = (1..=3).collect();
        assert_eq!(head_owner_count(&list), 1);

        let copy = list.clone();
        assert_eq!(head_owner_count(&list), 2);
        assert_eq!(copy, list);

        drop(copy);
        assert_eq!(head_owner_count(&list), 1);
    }

    #[rstest]
    fn test_cons_shares_the_old_head() {
        let list: StrictList<i32> = (1..=3).collect();
        let extended = list.cons(0);
        // The old head is now owned by both `list` and the new node.
        assert_eq!(head_owner_count(&list), 2);
        assert_eq!(extended.to_vec(), vec![0, 1, 2, 3]);
        drop(extended);
        assert_eq!(head_owner_count(&list), 1);
    }

    #[rstest]
    fn test_tail_shares_the_suffix() {
        let list: StrictList<i32> = (1..=3).collect();
        let tail = list.tail().unwrap();
        assert_eq!(tail.to_vec(), vec![2, 3]);
        assert_eq!(head_owner_count(&tail), 2);
        // Dropping the original leaves the suffix solely owned by `tail`.
        drop(list);
        assert_eq!(head_owner_count(&tail), 1);
        assert_eq!(tail.to_vec(), vec![2, 3]);
    }

    #[rstest]
    fn test_append_shares_the_right_operand() {
        let left: StrictList<i32> = (1..=2).collect();
        let right: StrictList<i32> = (3..=4).collect();
        let combined = left.append(&right);
        // The right operand's chain is shared, not copied.
        assert_eq!(head_owner_count(&right), 2);
        // The left operand's chain is copied, not shared.
        assert_eq!(head_owner_count(&left), 1);
        assert_eq!(combined.to_vec(), vec![1, 2, 3, 4]);
    }

    // =========================================================================
    // Logical length vs. physical chain
    // =========================================================================

    #[rstest]
    fn test_take_zero_is_logically_empty() {
        let list: StrictList<i32> = (1..=3).collect();
        let empty = list.take(0);
        assert!(empty.is_empty());
        assert_eq!(empty.head(), None);
        assert_eq!(empty.iter().count(), 0);
        assert_eq!(empty, StrictList::new());
    }

    #[rstest]
    fn test_init_truncates_by_length_only() {
        let list: StrictList<i32> = (1..=3).collect();
        let init = list.init().unwrap();
        assert_eq!(init.len(), 2);
        assert_eq!(init.last(), Some(&2));
        assert_eq!(init.get(2), None);
        // The truncated handle still shares the full chain.
        assert_eq!(head_owner_count(&list), 2);
    }

    #[rstest]
    fn test_operations_on_truncated_lists_respect_length() {
        let list: StrictList<i32> = (1..=5).collect();
        let truncated = list.take(3);
        assert_eq!(truncated.to_vec(), vec![1, 2, 3]);
        assert_eq!(truncated.last(), Some(&3));
        assert_eq!(truncated.get_from_end(0), Some(&3));
        assert!(!truncated.contains(&4));
        assert_eq!(truncated.tail().unwrap().to_vec(), vec![2, 3]);
        assert_eq!(truncated.cons(0).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(format!("{truncated}"), "[1, 2, 3]");
        let other: StrictList<i32> = (1..=3).collect();
        assert_eq!(truncated, other);
    }

    // =========================================================================
    // Query
    // =========================================================================

    #[rstest]
    fn test_get() {
        let list: StrictList<i32> = (1..=3).collect();
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    #[rstest]
    #[case(0, Some(5))]
    #[case(2, Some(3))]
    #[case(4, Some(1))]
    #[case(5, None)]
    #[case(usize::MAX, None)]
    fn test_get_from_end(#[case] index: usize, #[case] expected: Option<i32>) {
        let list: StrictList<i32> = (1..=5).collect();
        assert_eq!(list.get_from_end(index), expected.as_ref());
    }

    #[rstest]
    fn test_get_from_end_on_singleton() {
        let list = StrictList::singleton(7);
        assert_eq!(list.last(), Some(&7));
        assert_eq!(list.get_from_end(1), None);
    }

    #[rstest]
    fn test_contains() {
        let list: StrictList<i32> = (1..=3).collect();
        assert!(list.contains(&1));
        assert!(list.contains(&3));
        assert!(!list.contains(&0));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_structural_equality() {
        let list1: StrictList<i32> = (1..=3).collect();
        let list2: StrictList<i32> = (1..=3).collect();
        let list3: StrictList<i32> = (1..=4).collect();
        assert_eq!(list1, list2);
        assert_ne!(list1, list3);
        // A truncated handle compares by logical contents.
        assert_eq!(list2, list3.init().unwrap());
    }

    // =========================================================================
    // Decomposition
    // =========================================================================

    #[rstest]
    fn test_tail_and_init_of_empty_are_absent() {
        let empty: StrictList<i32> = StrictList::new();
        assert!(empty.tail().is_none());
        assert!(empty.init().is_none());
        assert!(empty.uncons().is_none());
    }

    #[rstest]
    fn test_uncons() {
        let list: StrictList<i32> = (1..=2).collect();
        let (head, tail) = list.uncons().unwrap();
        assert_eq!(*head, 1);
        assert_eq!(tail.to_vec(), vec![2]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(5, 5)]
    #[case(9, 5)]
    fn test_take_length_is_clamped(#[case] count: usize, #[case] expected: usize) {
        let list: StrictList<i32> = (1..=5).collect();
        assert_eq!(list.take(count).len(), expected);
    }

    #[rstest]
    fn test_drop_first() {
        let list: StrictList<i32> = (1..=5).collect();
        assert_eq!(list.drop_first(2).to_vec(), vec![3, 4, 5]);
        assert!(list.drop_first(5).is_empty());
        assert!(list.drop_first(99).is_empty());
    }

    #[rstest]
    fn test_take_and_drop_from_end() {
        let list: StrictList<i32> = (1..=5).collect();
        assert_eq!(list.take_from_end(2).to_vec(), vec![4, 5]);
        assert_eq!(list.drop_from_end(2).to_vec(), vec![1, 2, 3]);
        assert_eq!(list.take_from_end(7).to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(list.drop_from_end(7).is_empty());
    }

    #[rstest]
    fn test_split_at_edges() {
        let list: StrictList<i32> = (1..=5).collect();

        let (left, right) = list.split_at(0);
        assert!(left.is_empty());
        assert_eq!(right, list);

        let (left, right) = list.split_at(5);
        assert_eq!(left, list);
        assert!(right.is_empty());

        let (left, right) = list.split_at(99);
        assert_eq!(left, list);
        assert!(right.is_empty());
    }

    #[rstest]
    fn test_split_at_from_end() {
        let list: StrictList<i32> = (1..=5).collect();
        let (left, right) = list.split_at_from_end(1);
        assert_eq!(left.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(right.to_vec(), vec![5]);

        let (left, right) = list.split_at_from_end(9);
        assert!(left.is_empty());
        assert_eq!(right, list);
    }

    #[rstest]
    fn test_span() {
        let list: StrictList<i32> = (1..=10).collect();
        let (prefix, suffix) = list.span(|element| *element < 5);
        assert_eq!(prefix.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(suffix.to_vec(), vec![5, 6, 7, 8, 9, 10]);
    }

    #[rstest]
    fn test_span_all_and_none() {
        let list: StrictList<i32> = (1..=3).collect();

        let (prefix, suffix) = list.span(|_| true);
        assert_eq!(prefix, list);
        assert!(suffix.is_empty());

        let (prefix, suffix) = list.span(|_| false);
        assert!(prefix.is_empty());
        assert_eq!(suffix, list);
    }

    #[rstest]
    fn test_span_evaluates_predicate_once_per_prefix_element() {
        let calls = Cell::new(0_usize);
        let list: StrictList<i32> = (1..=10).collect();
        let (prefix, _suffix) = list.span(|element| {
            calls.set(calls.get() + 1);
            *element < 5
        });
        assert_eq!(prefix.len(), 4);
        // Four passing elements plus the first failing one.
        assert_eq!(calls.get(), 5);
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    #[rstest]
    fn test_map_changes_element_type() {
        let list: StrictList<i32> = (1..=3).collect();
        let rendered: StrictList<String> = list.map(|element| element.to_string());
        assert_eq!(rendered.to_vec(), vec!["1", "2", "3"]);
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_filter() {
        let list: StrictList<i32> = (1..=6).collect();
        let evens = list.filter(|element| element % 2 == 0);
        assert_eq!(evens.to_vec(), vec![2, 4, 6]);
        assert_eq!(list.len(), 6);
    }

    #[rstest]
    fn test_fold_left_order() {
        let list: StrictList<i32> = (1..=4).collect();
        let result = list.fold_left(0, |accumulator, element| accumulator * 10 + element);
        assert_eq!(result, 1234);
    }

    #[rstest]
    fn test_fold_right_order() {
        let list: StrictList<i32> = (1..=4).collect();
        let result = list.fold_right(0, |element, accumulator| element - accumulator);
        // 1 - (2 - (3 - (4 - 0)))
        assert_eq!(result, -2);
    }

    #[rstest]
    fn test_folds_on_empty_return_initial() {
        let empty: StrictList<i32> = StrictList::new();
        assert_eq!(empty.fold_left(7, |accumulator, _| accumulator + 1), 7);
        assert_eq!(empty.fold_right(7, |_, accumulator| accumulator + 1), 7);
    }

    #[rstest]
    fn test_reverse() {
        let list: StrictList<i32> = (1..=3).collect();
        assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
    }

    // =========================================================================
    // Ephemeral (consuming) operations
    // =========================================================================

    #[rstest]
    fn test_into_vec_matches_to_vec() {
        let list: StrictList<i32> = (1..=4).collect();
        let copied = list.to_vec();
        assert_eq!(list.into_vec(), copied);
    }

    #[rstest]
    fn test_into_map_and_into_filter() {
        let list: StrictList<i32> = (1..=6).collect();
        let doubled = list.clone().into_map(|element| element * 2);
        assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8, 10, 12]);
        let odds = list.into_filter(|element| element % 2 == 1);
        assert_eq!(odds.to_vec(), vec![1, 3, 5]);
    }

    #[rstest]
    fn test_into_iter_leaves_shared_suffix_intact() {
        let list: StrictList<i32> = (1..=4).collect();
        let suffix = list.drop_first(2);
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
        // The suffix shared with the consumed list survives.
        assert_eq!(suffix.to_vec(), vec![3, 4]);
        assert_eq!(head_owner_count(&suffix), 1);
    }

    #[rstest]
    fn test_partially_consumed_into_iter_releases_remainder() {
        let list: StrictList<i32> = (1..=100).collect();
        let mut iterator = list.into_iter();
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.next(), Some(2));
        assert_eq!(iterator.len(), 98);
        drop(iterator);
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    #[rstest]
    fn test_iter_is_exact_size_and_fused() {
        let list: StrictList<i32> = (1..=3).collect();
        let mut iterator = list.iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.next(), Some(&2));
        assert_eq!(iterator.next(), Some(&3));
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_iterators_are_independent_cursors() {
        let list: StrictList<i32> = (1..=3).collect();
        let mut first = list.iter();
        let mut second = list.iter();
        assert_eq!(first.next(), Some(&1));
        assert_eq!(second.next(), Some(&1));
        assert_eq!(first.next(), Some(&2));
        assert_eq!(second.next(), Some(&2));
    }

    // =========================================================================
    // Display / Debug / Hash
    // =========================================================================

    #[rstest]
    fn test_display() {
        let empty: StrictList<i32> = StrictList::new();
        assert_eq!(format!("{empty}"), "[]");
        let list: StrictList<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_debug() {
        let list: StrictList<i32> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_hash_consistent_with_equality() {
        use std::collections::HashMap;

        let mut map: HashMap<StrictList<i32>, &str> = HashMap::new();
        let key: StrictList<i32> = (1..=3).collect();
        map.insert(key.clone(), "value");

        // A truncated handle equal to the key must find the same entry.
        let longer: StrictList<i32> = (1..=5).collect();
        let truncated = longer.take(3);
        assert_eq!(map.get(&truncated), Some(&"value"));
    }

    // =========================================================================
    // Nested lists (recursive composability)
    // =========================================================================

    #[rstest]
    fn test_list_of_lists() {
        let inner1: StrictList<i32> = (1..=2).collect();
        let inner2: StrictList<i32> = (3..=4).collect();
        let outer: StrictList<StrictList<i32>> = vec![inner1.clone(), inner2].into_iter().collect();

        assert_eq!(outer.len(), 2);
        assert!(outer.contains(&inner1));
        assert_eq!(outer.get(1).map(StrictList::to_vec), Some(vec![3, 4]));

        let copy = outer.clone();
        assert_eq!(copy, outer);
        drop(outer);
        assert_eq!(copy.len(), 2);
    }
}
