//! Directory module: three-layer architecture (domain, repository, service).
//!
//! `repo` holds the entry store implementations: in-memory and SeaORM.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::DirectoryService;
