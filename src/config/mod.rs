//! Configuration loading
//!
//! Handles loading from an optional config file and `ENVYEET_*` environment
//! variables with precedence (CLI > Env > File > Defaults). CLI flags are applied
//! by the command handlers on top of the loaded [`Config`].

pub mod loader;

pub use loader::{load_config, Config};
