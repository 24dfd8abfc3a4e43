//! Default session for applications that only ever need one shell.
//!
//! There is one session for the whole process, shared by every thread, so
//! commands registered during start-up are visible to whichever thread reads
//! the console. Calls are serialized by a lock. Everything the session
//! borrows (sink, handlers, static table) must be `'static`.
//!
//! ```rust
//! use tinyshell::global;
//!
//! fn reboot(_argc: usize, _argv: &[&str]) -> i32 {
//!     0
//! }
//!
//! global::register_command("reboot", &reboot, "Restart the device").unwrap();
//! global::input(b"reboot\r\n").unwrap();
//! ```

use std::sync::{Mutex, PoisonError};

use crate::command::{Command, CommandHandler};
use crate::error::Result;
use crate::shell::{OutputSink, Shell};

static DEFAULT: Mutex<Shell<'static>> = Mutex::new(Shell::new());

/// Run `f` with exclusive access to the default session.
///
/// A panic inside an earlier call does not disable the session; the lock is
/// recovered and the shell used as it was left.
///
/// # Deadlocks
///
/// `f` must not reach the default session again, for example through a
/// command handler that feeds input back into [`input`]. The lock is not
/// reentrant.
pub fn with_default<R>(f: impl FnOnce(&mut Shell<'static>) -> R) -> R {
    let mut shell = DEFAULT.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut shell)
}

/// [`Shell::input`] on the default session.
pub fn input(data: &[u8]) -> Result<()> {
    with_default(|shell| shell.input(data))
}

/// [`Shell::set_output`] on the default session.
pub fn set_output(output: Option<&'static dyn OutputSink>) {
    with_default(|shell| shell.set_output(output))
}

/// [`Shell::register_command`] on the default session.
pub fn register_command(
    name: &'static str,
    handler: &'static dyn CommandHandler,
    description: &'static str,
) -> Result<()> {
    with_default(|shell| shell.register_command(name, handler, description))
}

/// [`Shell::register_static_commands`] on the default session.
pub fn register_static_commands(commands: &'static [Command<'static>]) -> Result<()> {
    with_default(|shell| shell.register_static_commands(commands))
}
