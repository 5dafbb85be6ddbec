pub mod api;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod invitation_service;

pub use api::*;
pub use error::*;
#[cfg(target_arch = "wasm32")]
pub use invitation_service::*;
