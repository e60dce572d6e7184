//! CLI command implementations.
//!
//! Each submodule handles a specific command with its configuration,
//! validation, and execution logic.
//!
//! Available commands:
//! - **calculate**: Evaluate one weight/height reading and render the report
//! - **interactive**: Prompt-driven session with a calculation counter
//! - **init**: Initialize a new bmical configuration file

pub mod calculate;
pub mod init;
pub mod interactive;

pub use calculate::{run_calculate, CalculateConfig};
pub use init::init_config;
pub use interactive::run_interactive;
