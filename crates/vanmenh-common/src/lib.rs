//! vanmenh-common — Shared types and errors used across all Vanmenh crates.

pub mod error;
pub mod profile;

pub use profile::BirthProfile;
