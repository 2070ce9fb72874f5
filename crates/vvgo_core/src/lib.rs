//! Core identity types for the VVGO website backend.
//!
//! An [`Identity`] is the caller's role set. The backend only ever asks it
//! one question: does it hold a given [`Role`]?

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod identity;
mod role;

pub use identity::Identity;
pub use role::Role;
