/// Durable file-backed session store
pub mod file;
/// Session store trait
pub mod interface;
/// In-memory session store
pub mod memory;

pub use file::FileStore;
pub use interface::SessionStore;
pub use memory::MemoryStore;
