//! Integration tests for the Ventabot commerce adapters.
//!
//! The actual tests live in `tests/`; each file targets one backend and is
//! `#[ignore]`d by default because it needs a live instance and real
//! credentials. See the crate README for how to run them.

#![cfg_attr(not(test), forbid(unsafe_code))]
