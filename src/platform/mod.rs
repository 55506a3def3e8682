//! Host document implementations.

pub mod memory_document;

pub use memory_document::MemoryDocument;
