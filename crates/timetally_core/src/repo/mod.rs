//! Right Port contracts for fetching task data.
//!
//! # Responsibility
//! - Define the repository interface the core calls out through.
//! - Keep transport details (HTTP, storage, fakes) behind the trait.
//!
//! # Invariants
//! - Adapters return whole task lists or a `FetchError`, never both.
//! - The core never depends on a concrete adapter type.

pub mod task_repo;
