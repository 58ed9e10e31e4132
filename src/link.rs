use core::ptr::NonNull;

use crate::traits::Anchored;

/// The linkage record of an intrusive ring.
///
/// A `Link` is embedded in every caller-owned entry (see [`Anchored`]) and in
/// the sentinel of a [`RingList`](crate::list::RingList). It is either
/// unlinked (both pointers `None`, the initial state) or linked, in which case
/// both pointers refer to ring members of exactly one list.
///
/// The pointers are non-owning: dropping or moving an entry that is still
/// linked leaves its neighbors dangling. Only [`RingList`](crate::list::RingList)
/// rewires links; the setters are crate-private.
#[derive(Debug, Default)]
pub struct Link {
    prev: Option<NonNull<Link>>,
    next: Option<NonNull<Link>>,
}

impl Link {
    /// Creates a new, unlinked link.
    pub const fn new() -> Self {
        Link {
            prev: None,
            next: None,
        }
    }

    /// Whether this link currently belongs to a ring.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.prev.is_some()
    }

    /// Get the previous ring member, or `None` when unlinked.
    ///
    /// On the first real node of a list this is the sentinel, not a user
    /// entry; compare against [`RingList::sentinel`](crate::list::RingList::sentinel)
    /// to detect the boundary.
    #[inline]
    pub fn prev(&self) -> Option<NonNull<Link>> {
        self.prev
    }

    /// Get the next ring member, or `None` when unlinked.
    ///
    /// On the last real node of a list this is the sentinel.
    #[inline]
    pub fn next(&self) -> Option<NonNull<Link>> {
        self.next
    }

    /// Typed view of the previous ring member.
    ///
    /// # Safety
    ///
    /// The previous member must actually be a live `T`. In particular it must
    /// not be the list's sentinel; no runtime check is performed.
    #[inline]
    pub unsafe fn prev_entry<T: Anchored>(&self) -> Option<NonNull<T>> {
        self.prev.map(|link| unsafe { T::from_link(link) })
    }

    /// Typed view of the next ring member.
    ///
    /// # Safety
    ///
    /// The next member must actually be a live `T`. In particular it must not
    /// be the list's sentinel; no runtime check is performed.
    #[inline]
    pub unsafe fn next_entry<T: Anchored>(&self) -> Option<NonNull<T>> {
        self.next.map(|link| unsafe { T::from_link(link) })
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, prev: Option<NonNull<Link>>) {
        self.prev = prev;
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NonNull<Link>>) {
        self.next = next;
    }
}

unsafe impl Send for Link {}
unsafe impl Sync for Link {}

/// Next ring member of a linked node.
#[inline]
pub(crate) fn next_of(node: NonNull<Link>) -> NonNull<Link> {
    unsafe { node.as_ref() }.next().expect("node is linked")
}

/// Previous ring member of a linked node.
#[inline]
pub(crate) fn prev_of(node: NonNull<Link>) -> NonNull<Link> {
    unsafe { node.as_ref() }.prev().expect("node is linked")
}
