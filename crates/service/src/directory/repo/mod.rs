pub mod memory;
pub mod seaorm;

pub use memory::InMemoryStore;
pub use seaorm::SeaOrmStore;
