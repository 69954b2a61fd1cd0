//! Domain entities exposed by the administration service layer.

pub mod catalog;
pub mod enrollment;
pub mod exam;
pub mod lecturer;
pub mod location;
pub mod roadmap;
pub mod student;
