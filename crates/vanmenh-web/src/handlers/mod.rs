//! HTTP handlers for all web routes.

pub mod fortune;
pub mod system;
