// Adapters layer: concrete implementations for external systems (http transport, product files).

pub mod http;
pub mod products;
