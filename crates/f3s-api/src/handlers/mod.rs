//! Route handlers organized by domain.

pub mod assistant;
pub mod catalog;
pub mod generators;
pub mod health;
