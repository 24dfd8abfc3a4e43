//! Command records, the handler capability and the command registry.
//!
//! A shell knows about commands through two partitions:
//!
//! - **dynamic** commands, appended one at a time with
//!   [`Shell::register_command`](crate::Shell::register_command) into a
//!   fixed-size table owned by the shell;
//! - **static** commands, a caller-owned slice installed in one call with
//!   [`Shell::register_static_commands`](crate::Shell::register_static_commands).
//!
//! Lookup walks the dynamic table in registration order first and only then
//! the static slice. The first command whose name *starts with* the typed
//! token wins, so `add` selects whichever of `addint` / `adddbl` was
//! registered first and a short token may bind to a longer, earlier name.
//!
//! # Examples
//!
//! ```rust
//! use tinyshell::{Command, Shell};
//!
//! fn status(_argc: usize, _argv: &[&str]) -> i32 {
//!     0
//! }
//!
//! const COMMANDS: &[Command<'static>] = &[
//!     Command { name: "status", description: "Show device status", handler: &status },
//! ];
//!
//! let mut shell = Shell::new();
//! shell.register_static_commands(COMMANDS);
//! ```

use heapless::Vec;

use crate::error::{Error, Result};

/// Capability invoked when a typed line matches a command.
///
/// `argv[0]` is the token the user typed for the command name (which may be
/// a prefix of the registered name). The returned status is handed back to
/// nobody: the shell does not inspect it. By convention a negative value
/// means the caller supplied too few arguments.
///
/// Every `Sync` `Fn(usize, &[&str]) -> i32`, including plain `fn` items, is
/// a handler. `Sync` lets a shell move between threads, so closures keep
/// their state in atomics or a `Mutex` rather than a `Cell`.
pub trait CommandHandler: Sync {
    /// Run the command with the parsed arguments.
    fn call(&self, argc: usize, argv: &[&str]) -> i32;
}

impl<F> CommandHandler for F
where
    F: Fn(usize, &[&str]) -> i32 + Sync,
{
    fn call(&self, argc: usize, argv: &[&str]) -> i32 {
        self(argc, argv)
    }
}

/// A named command with its help text and handler.
#[derive(Clone, Copy)]
pub struct Command<'a> {
    /// Name the typed token is matched against. Case-sensitive.
    pub name: &'a str,

    /// Text printed for `<name> -h`.
    pub description: &'a str,

    /// Logic to run when the command is invoked.
    pub handler: &'a dyn CommandHandler,
}

impl core::fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Command<'_> {
    /// Whether `token` selects this command: the token must be a literal,
    /// case-sensitive prefix of the command name.
    pub fn matches(&self, token: &str) -> bool {
        self.name.as_bytes().starts_with(token.as_bytes())
    }
}

/// Dynamic and static command tables.
pub(crate) struct Registry<'a, const K: usize> {
    dynamic: Vec<Command<'a>, K>,
    fixed: &'a [Command<'a>],
}

impl<'a, const K: usize> Registry<'a, K> {
    pub(crate) const fn new() -> Self {
        Self {
            dynamic: Vec::new(),
            fixed: &[],
        }
    }

    pub(crate) fn register(&mut self, command: Command<'a>) -> Result<()> {
        if command.name.is_empty() {
            warn!("rejected command with empty name");
            return Err(Error::InvalidParameter);
        }

        self.dynamic.push(command).map_err(|rejected| {
            warn!("command table full, dropping {}", rejected.name);
            Error::OutOfMemory
        })?;

        debug!("registered command {}", command.name);
        Ok(())
    }

    pub(crate) fn install_static(&mut self, commands: &'a [Command<'a>]) {
        debug!("installed {} static commands", commands.len());
        self.fixed = commands;
    }

    pub(crate) fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }

    pub(crate) fn static_len(&self) -> usize {
        self.fixed.len()
    }

    /// All commands in lookup order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Command<'a>> {
        self.dynamic.iter().chain(self.fixed.iter())
    }

    /// First command, in lookup order, whose name starts with `token`.
    pub(crate) fn find(&self, token: &str) -> Option<Command<'a>> {
        self.iter().find(|command| command.matches(token)).copied()
    }
}
