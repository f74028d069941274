//! The shared map handle and its backends.
//!
//! The host map is an opaque collaborator; this module pins down the part of
//! its surface we actually consume as the [`MapApi`] trait, with a wasm
//! backend bound to the real map object and an in-memory double for tests.

mod api;
pub mod fake;

#[cfg(target_arch = "wasm32")]
mod mapbox;

pub use api::{MapApi, SourceData};

#[cfg(target_arch = "wasm32")]
pub use mapbox::MapboxMap;
