//! Domain types shared across the user directory crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers as well as `infra/`, which
//! accepts these types at the store boundary.

pub mod credential;
pub mod email;
pub mod id;
pub mod tenant;
