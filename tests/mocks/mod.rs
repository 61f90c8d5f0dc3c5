//! Test doubles for the Document Store contract.

mod mock_document_store;

pub use mock_document_store::MockDocumentStore;
