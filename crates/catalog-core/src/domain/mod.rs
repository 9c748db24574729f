/// Product domain models and validation
pub mod product;

/// Repository interfaces
pub mod repository;
