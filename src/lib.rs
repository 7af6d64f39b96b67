// User Registry - Core Library
// Exposes the entity model, the registry container, and the interactive
// shell for use by the CLI binary and tests

pub mod entities;
pub mod registry;
pub mod shell;

// Re-export commonly used types
pub use entities::{InvalidBalanceError, User, UserKind};
pub use registry::UserRegistry;
pub use shell::{run_shell, ShellState, EXIT_SENTINEL};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
