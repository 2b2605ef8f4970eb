//! Interactive query session.

mod commands;
mod session_repl;

pub use commands::ReplCommand;
pub use session_repl::QueryRepl;
