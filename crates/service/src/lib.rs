//! Service layer for the phonebook directory.
//! - Enforces the Person invariants independent of storage and transport.
//! - Storage is pluggable behind [`directory::repository::EntryStore`].

pub mod errors;
pub mod directory;
#[cfg(test)]
pub mod test_support;

pub use directory::DirectoryService;
