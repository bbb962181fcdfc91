pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::cafe::{Cafe, NewCafe};
pub use storage::{CafeStore, MemoryStore, PgCafeStore, StoreError};
