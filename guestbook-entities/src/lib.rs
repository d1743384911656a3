#![deny(missing_debug_implementations)]

//! # guestbook-entities
//!
//! Reusable, agnostic domain entities for the guestbook.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod author;
pub mod caller;
pub mod comment;
pub mod email;
pub mod id;
pub mod section;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
