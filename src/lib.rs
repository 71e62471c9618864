//! Blockfall (workspace facade crate).
//!
//! Keeps the public `blockfall::{types, core, store}` API in one place while
//! the implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_store as store;
pub use blockfall_types as types;
