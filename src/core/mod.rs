//! Input abstractions shared by the kernel and its hosts:
//! - Key: platform-neutral key press
//! - Command: semantic command a key resolves to

pub mod command;
pub mod event;

pub use command::Command;
pub use event::Key;
