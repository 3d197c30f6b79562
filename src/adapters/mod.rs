// Adapters layer: concrete implementations of the domain ports (http, in-memory, diagnostics).

pub mod diagnostics;
pub mod http;
pub mod memory;
