//! # Intrusive sentinel-ring doubly-linked list
//!
//! This crate provides a doubly-linked list whose link pointers live inside
//! caller-owned entries rather than in separately allocated list cells. It is
//! meant for environments where per-node allocation is undesirable or
//! forbidden (kernel-style code, schedulers, hot paths): entries are typically
//! stack- or struct-embedded and the container splices them purely by pointer
//! rewiring.
//!
//! ## Core Components
//!
//! - [`Link`]: the two-pointer linkage record embedded in every entry.
//! - [`RingList`]: a sentinel-based circular list with O(1) push/pop at both
//!   ends, O(1) adjacency tests and swap of adjacent entries, O(n)
//!   erase-by-identity, and bidirectional iteration via [`RingIter`].
//! - [`Anchored`]: the capability trait for entry types embedding a [`Link`],
//!   with a derive macro that checks the layout requirements.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw pointers.
//! The user of this crate is responsible for upholding several invariants:
//!
//! - Entries must outlive the list they are in and must not be moved while
//!   linked.
//! - An entry must not be in two lists at the same time, nor pushed twice.
//! - When iterating, the list must not be modified.
//! - Typed accessors assert the concrete entry type; the list never checks it.
//! - Access from multiple threads must be serialized externally; the list
//!   performs no synchronization of its own.

#![no_std]

extern crate alloc;

pub mod iter;
pub mod link;
pub mod list;
pub mod traits;

pub use iter::RingIter;
pub use link::Link;
pub use list::RingList;
pub use traits::Anchored;

pub use ringlist_derive::Anchored;

#[cfg(test)]
mod tests;
