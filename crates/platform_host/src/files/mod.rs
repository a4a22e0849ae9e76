//! Remote file-store contracts and shared types.

pub mod service;
pub mod types;
