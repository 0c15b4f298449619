//! Channel and user name registry.
//!
//! This module contains the `Registry` struct, which owns the two
//! append-only name sequences and provides ordered traversal over them.

use std::iter::FusedIterator;
use std::slice;

use tracing::trace;

/// Append-only store for channel and user names.
///
/// The Registry is responsible for:
/// - Owning the channel-name and user-name sequences.
/// - Preserving insertion order, which is also the traversal order.
///
/// The two sequences are independent; there is no membership relation
/// between them. Duplicate names are kept as separate records, and no
/// record is ever mutated or removed once added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registry {
    channels: Vec<String>,
    users: Vec<String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a channel name.
    ///
    /// The name is copied into storage owned by the registry, so the
    /// caller's buffer is not retained. Duplicates are not collapsed.
    pub fn add_channel(&mut self, name: impl Into<String>) {
        let name = name.into();
        trace!(name = %name, "channel added");
        self.channels.push(name);
    }

    /// Append a user name.
    ///
    /// Same contract as [`Registry::add_channel`], operating on the
    /// user sequence.
    pub fn add_user(&mut self, name: impl Into<String>) {
        let name = name.into();
        trace!(name = %name, "user added");
        self.users.push(name);
    }

    /// Iterate over stored channel names in insertion order.
    ///
    /// The iterator is lazy and yields one read-only view per record;
    /// call this again for a fresh pass.
    pub fn channels(&self) -> Names<'_> {
        Names {
            inner: self.channels.iter(),
        }
    }

    /// Iterate over stored user names in insertion order.
    pub fn users(&self) -> Names<'_> {
        Names {
            inner: self.users.iter(),
        }
    }

    /// Invoke `visit` once per stored channel name, in insertion order.
    pub fn for_each_channel<F>(&self, visit: F)
    where
        F: FnMut(&str),
    {
        self.channels().for_each(visit);
    }

    /// Invoke `visit` once per stored user name, in insertion order.
    pub fn for_each_user<F>(&self, visit: F)
    where
        F: FnMut(&str),
    {
        self.users().for_each(visit);
    }
}

/// Iterator over one name sequence, in insertion order.
///
/// Returned by [`Registry::channels`] and [`Registry::users`]. Each
/// item borrows from the registry and is valid for as long as that
/// borrow lives.
#[derive(Debug, Clone)]
pub struct Names<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Names<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Names<'_> {}

impl FusedIterator for Names<'_> {}
