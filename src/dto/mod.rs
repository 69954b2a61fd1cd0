//! DTO modules that bridge services with templates and APIs.

pub mod api;
pub mod catalog;
pub mod enrollment;
pub mod exam;
pub mod lecturer;
pub mod location;
pub mod roadmap;
pub mod student;
