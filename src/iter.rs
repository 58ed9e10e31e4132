use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::link::{next_of, prev_of, Link};
use crate::list::RingList;

/// A double-ended iterator over the links of a [`RingList`].
///
/// Yields raw links; typed access is the consumer's job via
/// [`Anchored`](crate::traits::Anchored) since the ring itself is untyped.
/// Created by [`RingList::iter`], whose contract forbids mutating the ring
/// while the iterator is alive.
pub struct RingIter<'a> {
    head: NonNull<Link>,
    tail: NonNull<Link>,
    sentinel: NonNull<Link>,
    exhausted: bool,
    _list: PhantomData<&'a RingList>,
}

impl<'a> RingIter<'a> {
    pub(crate) fn new(list: &'a RingList) -> Self {
        let sentinel = list.sentinel();
        RingIter {
            head: next_of(sentinel),
            tail: prev_of(sentinel),
            sentinel,
            exhausted: false,
            _list: PhantomData,
        }
    }
}

impl<'a> Iterator for RingIter<'a> {
    type Item = NonNull<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.head == self.sentinel {
            self.exhausted = true;
            return None;
        }
        let current = self.head;
        if current == self.tail {
            // front cursor met the back cursor
            self.exhausted = true;
        } else {
            self.head = next_of(current);
        }
        Some(current)
    }
}

impl<'a> DoubleEndedIterator for RingIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.tail == self.sentinel {
            self.exhausted = true;
            return None;
        }
        let current = self.tail;
        if current == self.head {
            self.exhausted = true;
        } else {
            self.tail = prev_of(current);
        }
        Some(current)
    }
}

impl<'a> FusedIterator for RingIter<'a> {}

unsafe impl<'a> Send for RingIter<'a> {}
unsafe impl<'a> Sync for RingIter<'a> {}
