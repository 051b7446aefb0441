pub mod fetch;

#[cfg(feature = "wasm")]
pub mod location;

#[cfg(feature = "wasm")]
pub mod tracing;
