pub mod json_store;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod normalize;
pub mod pool;
pub mod sqlite;
pub mod stats;
pub mod store;

pub use json_store::JsonStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{RecordStore, open_store};
