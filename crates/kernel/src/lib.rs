//! Kernel for the LivinLease service: layered settings, the module trait,
//! and the registry that sequences module lifecycles.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
