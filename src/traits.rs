use core::ptr::NonNull;

use crate::link::Link;

/// A trait for entry types that embed a [`Link`] at offset zero.
///
/// Implementing this trait asserts that a pointer to the entry and a pointer
/// to its embedded link are the same address, so the typed accessors
/// ([`Link::next_entry`], [`RingList::front`](crate::list::RingList::front))
/// can convert between the two with a plain cast and no runtime check.
///
/// Prefer `#[derive(Anchored)]`, which verifies the layout requirements at
/// macro expansion time.
///
/// # Safety
///
/// Implementors must guarantee:
///
/// - `Self` is `#[repr(C)]` and its first field is the embedded [`Link`];
/// - the embedded link is only ever linked into rings of entries of type
///   `Self`, so that typed neighbor access stays exact.
pub unsafe trait Anchored: Sized {
    /// Borrow the embedded link.
    fn link(&self) -> &Link;

    /// Mutably borrow the embedded link.
    fn link_mut(&mut self) -> &mut Link;

    /// Pointer to the embedded link of `entry`.
    #[inline]
    fn as_link(entry: NonNull<Self>) -> NonNull<Link> {
        entry.cast()
    }

    /// Recover the full entry from a pointer to its embedded link.
    ///
    /// # Safety
    ///
    /// `link` must be the embedded link of a live `Self`. Passing any other
    /// ring member, the sentinel included, is a contract violation.
    #[inline]
    unsafe fn from_link(link: NonNull<Link>) -> NonNull<Self> {
        link.cast()
    }
}
