//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or heavy logic—just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod registry;
