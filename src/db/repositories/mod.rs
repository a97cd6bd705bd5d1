mod memory_store;
mod report_repository;

pub use memory_store::MemoryStore;
pub use report_repository::{JsonFileStore, ReportStore};
