//! Document Store contract and implementations.
//!
//! The engine only reads through the `DocumentStore` trait; stores are
//! read-only from its perspective.

mod fs_vault;
mod memory_store;
mod traits;

pub use fs_vault::FsVaultStore;
pub use memory_store::MemoryDocumentStore;
pub use traits::DocumentStore;
