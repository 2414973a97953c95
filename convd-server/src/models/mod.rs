//! Request-side model types

pub mod pagination;

pub use pagination::Page;
