pub use shared;

pub mod api;
pub mod session;
pub mod state;

#[cfg(feature = "wasm")]
mod bindings;
#[cfg(feature = "wasm")]
pub use bindings::*;

#[cfg(test)]
mod test_support;
