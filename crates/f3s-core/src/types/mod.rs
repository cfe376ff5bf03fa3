//! Core type definitions used across the F3S workspace.

pub mod pagination;

pub use pagination::{PageRequest, Pagination};
