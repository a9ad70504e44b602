// Adapters layer: concrete implementations for external systems (http, etc.)

pub mod github;
