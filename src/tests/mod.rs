extern crate std;

use std::vec::Vec;

use core::ptr::NonNull;

use crate::link::Link;
use crate::list::RingList;
use crate::Anchored;


/// A typical list entry: link first, payload after.
#[repr(C)]
#[derive(Anchored)]
#[anchored(crate_path = "crate")]
struct Entry {
    link: Link,
    value: i32,
}

impl Entry {
    fn new(value: i32) -> Self {
        Entry {
            link: Link::new(),
            value,
        }
    }
}

/// Walk the full ring and assert `n.next.prev == n` for every member,
/// returning to the sentinel in exactly `len() + 1` steps.
fn check_ring(list: &RingList) {
    let sentinel = list.sentinel();
    let mut current = sentinel;
    for _ in 0..list.len() + 1 {
        let next = unsafe { current.as_ref() }.next().expect("ring member is linked");
        assert_eq!(unsafe { next.as_ref() }.prev(), Some(current));
        current = next;
    }
    assert_eq!(current, sentinel);
}

/// Payloads in front-to-back order.
fn values(list: &RingList) -> Vec<i32> {
    unsafe { list.iter() }
        .map(|link| unsafe { Entry::from_link(link).as_ref().value })
        .collect()
}

fn link_of(entry: &mut Entry) -> NonNull<Link> {
    NonNull::from(entry.link_mut())
}
