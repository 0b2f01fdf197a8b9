//! shellcomplete CLI
//!
//! Completes any command described by a YAML or JSON command tree, and
//! wires itself into bash and zsh as the completion hook.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;
