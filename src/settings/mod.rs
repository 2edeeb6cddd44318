//! Configuration loading and resolution utilities.
//!
//! `load` layers default files, `--config` files, `TABVIEW__*` environment
//! variables and CLI flags, then returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
