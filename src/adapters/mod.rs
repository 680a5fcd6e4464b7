// Adapters layer: concrete implementations of the domain ports (device storage, HTTP catalog).

pub mod file;
pub mod http;
pub mod memory;
