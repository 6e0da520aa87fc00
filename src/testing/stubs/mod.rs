pub mod memory_model_store;
pub mod scripted_driver;

pub use memory_model_store::MemoryModelStore;
pub use scripted_driver::{Answer, ScriptedDriver};
