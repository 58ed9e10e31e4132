use core::ptr::NonNull;

use alloc::boxed::Box;

use crate::iter::RingIter;
use crate::link::{next_of, prev_of, Link};
use crate::traits::Anchored;

/// An intrusive doubly-linked list, closed into a ring by a sentinel.
///
/// The list owns nothing but its sentinel: entries are caller-owned and are
/// spliced in and out purely by pointer rewiring, so no operation allocates
/// per node. The sentinel is a real [`Link`] participating in the ring
/// (`sentinel.next` is the first entry, `sentinel.prev` the last, both the
/// sentinel itself when empty), which keeps every traversal and boundary test
/// free of null checks.
///
/// The sentinel is boxed so its address survives moves of the `RingList`
/// value; this construction-time allocation is the only one the container
/// ever performs. Cloning is deliberately not provided, since a clone would
/// alias externally-owned entries.
#[derive(Debug)]
pub struct RingList {
    sentinel: Box<Link>,
}

impl RingList {
    /// Creates a new, empty ring.
    pub fn new() -> Self {
        let mut sentinel = Box::new(Link::new());
        let ptr = NonNull::from(sentinel.as_mut());
        sentinel.set_prev(Some(ptr));
        sentinel.set_next(Some(ptr));
        RingList { sentinel }
    }

    /// Pointer to the sentinel closing the ring.
    ///
    /// Useful as the stop marker during manual traversal over entry links.
    #[inline]
    pub fn sentinel(&self) -> NonNull<Link> {
        NonNull::from(self.sentinel.as_ref())
    }

    /// Sentinel pointer with write provenance, for the mutating paths.
    #[inline]
    fn sentinel_mut(&mut self) -> NonNull<Link> {
        NonNull::from(self.sentinel.as_mut())
    }

    /// Whether the ring holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sentinel.next() == Some(self.sentinel())
    }

    /// Number of entries, by full traversal.
    ///
    /// No cached count is kept: `swap` and `unlink_unchecked` mutate the ring
    /// without going through a counter update path, so a cached length could
    /// silently drift.
    pub fn len(&self) -> usize {
        let sentinel = self.sentinel();
        let mut count = 0;
        let mut current = next_of(sentinel);
        while current != sentinel {
            count += 1;
            current = next_of(current);
        }
        count
    }

    /// Splice `node` in as the first entry.
    ///
    /// `node` must be unlinked and must stay alive and unmoved while linked
    /// (see the crate-level safety notes).
    pub fn push_front(&mut self, node: NonNull<Link>) {
        let sentinel = self.sentinel_mut();
        insert_between(node, sentinel, next_of(sentinel));
    }

    /// Splice `node` in as the last entry.
    ///
    /// `node` must be unlinked and must stay alive and unmoved while linked
    /// (see the crate-level safety notes).
    pub fn push_back(&mut self, node: NonNull<Link>) {
        let sentinel = self.sentinel_mut();
        insert_between(node, prev_of(sentinel), sentinel);
    }

    /// Unlink and return the first entry, or `None` when empty.
    ///
    /// The returned node is reset to the unlinked state.
    pub fn pop_front(&mut self) -> Option<NonNull<Link>> {
        if self.is_empty() {
            return None;
        }
        let node = next_of(self.sentinel_mut());
        unsafe { self.unlink_unchecked(node) };
        Some(node)
    }

    /// Unlink and return the last entry, or `None` when empty.
    ///
    /// The returned node is reset to the unlinked state.
    pub fn pop_back(&mut self) -> Option<NonNull<Link>> {
        if self.is_empty() {
            return None;
        }
        let node = prev_of(self.sentinel_mut());
        unsafe { self.unlink_unchecked(node) };
        Some(node)
    }

    /// Unlink `node` if it is a member of this ring.
    ///
    /// Scans from the front comparing by pointer identity. On a hit the node
    /// is unlinked, reset to the unlinked state, and `true` is returned; on a
    /// miss the ring is left untouched and `false` is returned.
    pub fn erase(&mut self, node: NonNull<Link>) -> bool {
        let sentinel = self.sentinel_mut();
        let mut current = next_of(sentinel);
        while current != sentinel {
            if current == node {
                unsafe { self.unlink_unchecked(node) };
                return true;
            }
            current = next_of(current);
        }
        false
    }

    /// Unlink `node` without scanning for membership.
    ///
    /// The node is reset to the unlinked state.
    ///
    /// # Safety
    ///
    /// `node` must currently be linked into this list. Callers usually prove
    /// this through an external index over their entries.
    pub unsafe fn unlink_unchecked(&mut self, node: NonNull<Link>) {
        let prev = prev_of(node);
        let next = next_of(node);
        unsafe {
            (*prev.as_ptr()).set_next(Some(next));
            (*next.as_ptr()).set_prev(Some(prev));

            let node_ref = &mut *node.as_ptr();
            node_ref.set_prev(None);
            node_ref.set_next(None);
        }
    }

    /// Typed pointer to the first entry, or `None` when empty.
    ///
    /// # Safety
    ///
    /// The first entry must actually be a live `T`; no runtime check is
    /// performed.
    pub unsafe fn front<T: Anchored>(&self) -> Option<NonNull<T>> {
        self.front_link().map(|link| unsafe { T::from_link(link) })
    }

    /// Typed pointer to the last entry, or `None` when empty.
    ///
    /// # Safety
    ///
    /// The last entry must actually be a live `T`; no runtime check is
    /// performed.
    pub unsafe fn back<T: Anchored>(&self) -> Option<NonNull<T>> {
        self.back_link().map(|link| unsafe { T::from_link(link) })
    }

    /// Link of the first entry, or `None` when empty.
    #[inline]
    pub fn front_link(&self) -> Option<NonNull<Link>> {
        if self.is_empty() {
            None
        } else {
            Some(next_of(self.sentinel()))
        }
    }

    /// Link of the last entry, or `None` when empty.
    #[inline]
    pub fn back_link(&self) -> Option<NonNull<Link>> {
        if self.is_empty() {
            None
        } else {
            Some(prev_of(self.sentinel()))
        }
    }

    /// Whether `a` and `b` are immediate neighbors in either direction.
    ///
    /// Operates purely on the nodes' own pointers; both must be linked
    /// members of the same ring.
    pub fn is_adjacent(a: NonNull<Link>, b: NonNull<Link>) -> bool {
        Self::is_before(a, b)
            || Self::is_after(a, b)
            || Self::is_before(b, a)
            || Self::is_after(b, a)
    }

    /// Whether `a` immediately precedes `b`.
    #[inline]
    pub fn is_before(a: NonNull<Link>, b: NonNull<Link>) -> bool {
        unsafe { a.as_ref() }.next() == Some(b)
    }

    /// Whether `a` immediately follows `b`.
    #[inline]
    pub fn is_after(a: NonNull<Link>, b: NonNull<Link>) -> bool {
        unsafe { a.as_ref() }.prev() == Some(b)
    }

    /// Exchange the ring positions of two linked entries.
    ///
    /// Both must be members of this ring. No-op when `a == b`. The adjacent
    /// cases rewire in place; the disjoint case captures all four neighbors
    /// before cross-wiring so no pointer is overwritten before it is read.
    pub fn swap(&mut self, a: NonNull<Link>, b: NonNull<Link>) {
        if a == b {
            return;
        }

        if Self::is_before(a, b) {
            swap_adjacent(a, b);
        } else if Self::is_after(a, b) {
            swap_adjacent(b, a);
        } else {
            let a_prev = prev_of(a);
            let a_next = next_of(a);
            let b_prev = prev_of(b);
            let b_next = next_of(b);

            unsafe {
                (*a_prev.as_ptr()).set_next(Some(b));
                (*a_next.as_ptr()).set_prev(Some(b));

                (*b_prev.as_ptr()).set_next(Some(a));
                (*b_next.as_ptr()).set_prev(Some(a));

                (*b.as_ptr()).set_prev(Some(a_prev));
                (*b.as_ptr()).set_next(Some(a_next));

                (*a.as_ptr()).set_prev(Some(b_prev));
                (*a.as_ptr()).set_next(Some(b_next));
            }
        }
    }

    /// Get a double-ended iterator over the links of this ring.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the ring is not mutated while the iterator
    /// is in use; an iterator holding an unlinked node dangles.
    pub unsafe fn iter(&self) -> RingIter<'_> {
        RingIter::new(self)
    }
}

impl Default for RingList {
    fn default() -> Self {
        Self::new()
    }
}

/// Splice `node` between two adjacent ring members.
fn insert_between(node: NonNull<Link>, prev: NonNull<Link>, next: NonNull<Link>) {
    unsafe {
        let node_ref = &mut *node.as_ptr();
        debug_assert!(!node_ref.is_linked(), "node is already linked");

        node_ref.set_prev(Some(prev));
        node_ref.set_next(Some(next));
        (*prev.as_ptr()).set_next(Some(node));
        (*next.as_ptr()).set_prev(Some(node));
    }
}

/// Swap `lhs` and `rhs` where `lhs` immediately precedes `rhs`.
fn swap_adjacent(lhs: NonNull<Link>, rhs: NonNull<Link>) {
    let lhs_prev = prev_of(lhs);
    let rhs_next = next_of(rhs);

    unsafe {
        (*lhs.as_ptr()).set_prev(Some(rhs));
        (*lhs.as_ptr()).set_next(Some(rhs_next));

        (*rhs.as_ptr()).set_prev(Some(lhs_prev));
        (*rhs.as_ptr()).set_next(Some(lhs));

        (*lhs_prev.as_ptr()).set_next(Some(rhs));
        (*rhs_next.as_ptr()).set_prev(Some(lhs));
    }
}
