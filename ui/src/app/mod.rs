pub mod registry;

pub use registry::RegistryApp;
