//! Configuration loading and resolution.
//!
//! `load` layers the default config files, `--config` files, `TABPICK__*`
//! environment variables and CLI flags, then resolves the result into a
//! [`ResolvedConfig`] the workflow consumes.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
