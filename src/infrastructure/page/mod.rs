//! Page surface adapters

mod memory;

pub use memory::MemoryPage;
