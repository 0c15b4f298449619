//! # slirc-registry
//!
//! Append-only, insertion-ordered storage for IRC channel and user
//! names.
//!
//! ## Features
//!
//! - An explicitly owned [`Registry`] value, no process-wide globals
//! - Lazy, restartable traversal yielding borrowed `&str` views
//! - Callback-style `for_each_*` traversal for callers that prefer it
//! - Duplicates preserved; insertion order is the traversal order
//! - Optional `serde` support for the registry contents

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ### Recording names
//!
//! ```rust
//! use slirc_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_channel("#general");
//! registry.add_channel("#random");
//! registry.add_user("alice");
//!
//! let channels: Vec<&str> = registry.channels().collect();
//! assert_eq!(channels, ["#general", "#random"]);
//! ```
//!
//! ### Walking both sequences together
//!
//! Traversal borrows the registry immutably, so the two sequences can
//! be iterated in a nested fashion:
//!
//! ```rust
//! use slirc_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_channel("#gamedev");
//! registry.add_channel("#rust");
//! registry.add_user("alice");
//!
//! for user in registry.users() {
//!     let mut notice = format!("NOTICE {user} :Try these channels:");
//!     for channel in registry.channels() {
//!         notice.push(' ');
//!         notice.push_str(channel);
//!     }
//!     assert_eq!(notice, "NOTICE alice :Try these channels: #gamedev #rust");
//! }
//! ```
//!
//! Appending while a traversal is in progress is rejected at compile
//! time: `add_channel` and `add_user` take `&mut self`, while the
//! iterators hold a shared borrow.

pub mod registry;

pub use self::registry::{Names, Registry};
