//! Database models backing the repository implementations.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod enrollment;
pub mod exam;
pub mod lecturer;
pub mod location;
pub mod roadmap;
pub mod student;
