//! Ventabot Core - shared commerce adapter contract.
//!
//! This crate defines the surface the chat layer programs against:
//!
//! - [`types`] - normalized Product / Order / Customer / Coupon shapes
//! - [`adapter`] - the uniform operation set every backend implements
//! - [`transport`] - the HTTP boundary the adapters call through
//! - [`error`] - the error kinds adapters surface
//! - [`text`] - chat-text helpers shared by the formatting modules
//!
//! # Architecture
//!
//! Backend-specific crates (`ventabot-medusa`, `ventabot-woocommerce`) map
//! their platform's REST resources into the shapes defined here, so calling
//! code never branches on platform identity. Adapters hold no entity state
//! across calls; the only shared resource is the lazily-built transport
//! handle, which is write-once, read-many.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod adapter;
pub mod error;
pub mod text;
pub mod transport;
pub mod types;

pub use adapter::{CommerceAdapter, DEFAULT_SEARCH_LIMIT};
pub use error::CommerceError;
pub use types::*;
