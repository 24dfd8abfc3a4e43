//! Line accumulator and command dispatcher.
//!
//! A [`Shell`] is one console session. Bytes are pushed into it with
//! [`Shell::input`] in whatever chunks the transport delivers them; the shell
//! echoes them, edits the pending line on backspace, and on carriage return
//! or line feed tokenizes the line and runs the matching command.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Input Layer   │───▶│   Tokenizer     │───▶│   Command       │
//! │   (byte by      │    │   (in place)    │    │   Registry      │
//! │    byte)        │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                       │                       │
//!          ▼                       ▼                       ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Line Buffer   │    │   Argument      │    │   Help text or  │
//! │   + echo        │    │   Spans         │    │   Handler call  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Capacities
//!
//! All storage is fixed at compile time through const generics:
//!
//! - `LINE`: line buffer size. At most `LINE - 1` characters are kept; extra
//!   printable characters are still echoed but dropped from the line.
//! - `ARGS`: maximum arguments per line, command name included. Anything past
//!   the limit is ignored.
//! - `CMDS`: maximum dynamically registered commands.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Mutex;
//! use tinyshell::Shell;
//!
//! fn hello(argc: usize, argv: &[&str]) -> i32 {
//!     if argc > 1 {
//!         println!("Hello, {}!", argv[1]);
//!     } else {
//!         println!("Hello, World!");
//!     }
//!     0
//! }
//!
//! let echoed = Mutex::new(String::new());
//! let sink = |text: &str| echoed.lock().unwrap().push_str(text);
//!
//! let mut shell = Shell::new();
//! shell.set_output(Some(&sink));
//! shell.register_command("hello", &hello, "Say hello").unwrap();
//!
//! shell.input(b"hello world\r").unwrap();
//! assert_eq!(*echoed.lock().unwrap(), "hello world\r");
//! ```

use core::str;

use heapless::Vec;

use crate::command::{Command, CommandHandler, Registry};
use crate::error::{Error, Result};
use crate::parser::{self, Span};

/// Default line buffer size, terminator slot included.
pub const DEFAULT_LINE_LENGTH: usize = 128;

/// Default maximum number of arguments per line, command name included.
pub const DEFAULT_MAX_ARGS: usize = 8;

/// Default size of the dynamic command table.
pub const DEFAULT_MAX_COMMANDS: usize = 10;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;
/// ASCII tilde (0x7E), the last printable character.
pub const ASCII_TILDE: u8 = 0x7E;

/// Sequence echoed when a character is erased: back, blank, back.
pub const ERASE_SEQUENCE: &str = "\x08 \x08";

/// Capability the shell writes echo and help text to.
///
/// The text is only borrowed for the duration of the call. Every `Sync`
/// `Fn(&str)` is a sink.
pub trait OutputSink: Sync {
    /// Emit `text` to the user.
    fn output(&self, text: &str);
}

impl<F> OutputSink for F
where
    F: Fn(&str) + Sync,
{
    fn output(&self, text: &str) {
        self(text)
    }
}

/// Compile-time limits of a [`Shell`], as reported by [`Shell::capacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// Line buffer size; one less character than this fits on a line.
    pub max_line_length: usize,
    /// Maximum arguments per line, command name included.
    pub max_arguments: usize,
    /// Maximum dynamically registered commands.
    pub max_dynamic_commands: usize,
}

/// One console session: line buffer, argument spans, command registry and
/// output sink.
///
/// Nothing is allocated. The shell borrows its sink, its handlers and any
/// static command table for `'a`.
pub struct Shell<
    'a,
    const LINE: usize = DEFAULT_LINE_LENGTH,
    const ARGS: usize = DEFAULT_MAX_ARGS,
    const CMDS: usize = DEFAULT_MAX_COMMANDS,
> {
    // Pending line
    buffer: [u8; LINE],
    buffer_len: usize,

    // Spans of the line being dispatched, into `buffer`
    argv: Vec<Span, ARGS>,

    registry: Registry<'a, CMDS>,
    output: Option<&'a dyn OutputSink>,

    echo_enabled: bool,
    help_enabled: bool,
}

impl<const LINE: usize, const ARGS: usize, const CMDS: usize> core::fmt::Debug
    for Shell<'_, LINE, ARGS, CMDS>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("line", &self.line())
            .field("commands", &self.registry.dynamic_len())
            .field("static_commands", &self.registry.static_len())
            .field("has_output", &self.output.is_some())
            .field("echo_enabled", &self.echo_enabled)
            .field("help_enabled", &self.help_enabled)
            .finish()
    }
}

impl Default for Shell<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Shell<'a> {
    /// Create a shell with the default capacities: a 128 byte line,
    /// 8 arguments and 10 dynamic commands.
    ///
    /// Echo and `-h` help are enabled; there is no output sink and no
    /// registered command.
    ///
    /// ```rust
    /// use tinyshell::Shell;
    ///
    /// let shell = Shell::new();
    /// assert_eq!(shell.capacity().max_line_length, 128);
    /// ```
    pub const fn new() -> Self {
        Self::with_capacity()
    }
}

impl<'a, const LINE: usize, const ARGS: usize, const CMDS: usize> Shell<'a, LINE, ARGS, CMDS> {
    /// Create a shell whose capacities are given by the type parameters.
    ///
    /// ```rust
    /// use tinyshell::Shell;
    ///
    /// let shell = Shell::<64, 4, 2>::with_capacity();
    /// assert_eq!(shell.capacity().max_arguments, 4);
    /// ```
    pub const fn with_capacity() -> Self {
        Self {
            buffer: [0; LINE],
            buffer_len: 0,
            argv: Vec::new(),
            registry: Registry::new(),
            output: None,
            echo_enabled: true,
            help_enabled: true,
        }
    }

    /// Limits this shell was built with.
    pub const fn capacity(&self) -> Capacity {
        Capacity {
            max_line_length: LINE,
            max_arguments: ARGS,
            max_dynamic_commands: CMDS,
        }
    }

    /// Install or remove the output sink.
    ///
    /// With `None`, nothing is echoed and `-h` prints nothing (the handler
    /// is still not called).
    pub fn set_output(&mut self, output: Option<&'a dyn OutputSink>) {
        self.output = output;
    }

    /// Enable or disable echoing of typed characters. Help text is printed
    /// either way.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// Enable or disable the `<command> -h` description shortcut. When
    /// disabled, `-h` is passed to the handler like any other argument.
    pub fn set_help(&mut self, enabled: bool) {
        self.help_enabled = enabled;
    }

    /// Append a command to the dynamic table.
    ///
    /// Duplicate names are accepted; the one registered first shadows the
    /// others.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidParameter`] - `name` is empty
    /// * [`Error::OutOfMemory`] - the table already holds `CMDS` commands
    ///
    /// The table is unchanged on error.
    ///
    /// ```rust
    /// use tinyshell::Shell;
    ///
    /// let uptime = |_argc: usize, _argv: &[&str]| -> i32 { 0 };
    ///
    /// let mut shell = Shell::new();
    /// shell.register_command("uptime", &uptime, "Show uptime").unwrap();
    /// assert_eq!(shell.command_count(), 1);
    /// ```
    pub fn register_command(
        &mut self,
        name: &'a str,
        handler: &'a dyn CommandHandler,
        description: &'a str,
    ) -> Result<()> {
        self.registry.register(Command {
            name,
            description,
            handler,
        })
    }

    /// Install a caller-owned command table, replacing any previous one.
    ///
    /// The slice is neither copied nor validated. It is searched after the
    /// dynamic table.
    pub fn register_static_commands(&mut self, commands: &'a [Command<'a>]) -> Result<()> {
        self.registry.install_static(commands);
        Ok(())
    }

    /// Number of dynamically registered commands.
    pub fn command_count(&self) -> usize {
        self.registry.dynamic_len()
    }

    /// Number of commands in the installed static table.
    pub fn static_command_count(&self) -> usize {
        self.registry.static_len()
    }

    /// All commands in lookup order: dynamic ones as registered, then the
    /// static table.
    pub fn commands(&self) -> impl Iterator<Item = &Command<'a>> {
        self.registry.iter()
    }

    /// The line typed so far.
    pub fn line(&self) -> &str {
        str::from_utf8(&self.buffer[..self.buffer_len]).unwrap_or_default()
    }

    /// Write position in the line buffer.
    pub fn cursor(&self) -> usize {
        self.buffer_len
    }

    /// Process input bytes.
    ///
    /// # Character Handling
    ///
    /// - **CR / LF**: echoed, then the pending line is dispatched and the
    ///   buffer reset. A CR LF pair completes twice; the second line is empty
    ///   and does nothing.
    /// - **Backspace (0x08)**: removes the last character and echoes
    ///   [`ERASE_SEQUENCE`]. Nothing happens on an empty line.
    /// - **Printable ASCII (0x20..=0x7E)**: echoed, then appended while the
    ///   line holds fewer than `LINE - 1` characters.
    /// - **Anything else**: ignored, not echoed.
    ///
    /// Chunking does not matter: feeding bytes one at a time or all at once
    /// produces the same output and dispatches.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidParameter`] - `data` is empty; the shell is untouched
    pub fn input(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::InvalidParameter);
        }

        for &byte in data {
            match byte {
                ASCII_CR | ASCII_LF => {
                    self.echo(if byte == ASCII_CR { "\r" } else { "\n" });
                    self.process_line();
                    self.reset_buffer();
                }
                ASCII_BACKSPACE => {
                    if self.buffer_len > 0 {
                        self.buffer_len -= 1;
                        self.buffer[self.buffer_len] = 0;
                        self.echo(ERASE_SEQUENCE);
                    }
                }
                ASCII_SPACE..=ASCII_TILDE => {
                    let ch = [byte];
                    self.echo(str::from_utf8(&ch).unwrap_or_default());

                    if self.buffer_len < LINE.saturating_sub(1) {
                        self.buffer[self.buffer_len] = byte;
                        self.buffer_len += 1;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub(crate) fn output(&self, text: &str) {
        if let Some(output) = self.output {
            output.output(text);
        }
    }

    fn echo(&self, text: &str) {
        if self.echo_enabled {
            self.output(text);
        }
    }

    fn reset_buffer(&mut self) {
        self.buffer.fill(0);
        self.buffer_len = 0;
        self.argv.clear();
    }

    /// Tokenize the pending line and run the command it names.
    ///
    /// Argument views borrow the line buffer and only live for this call.
    fn process_line(&mut self) {
        if self.buffer_len == 0 {
            return;
        }
        trace!("line complete, {} bytes", self.buffer_len);

        if parser::tokenize(&mut self.buffer[..self.buffer_len], &mut self.argv) {
            trace!("argument limit {} reached, rest of line dropped", ARGS);
        }

        let argc = self.argv.len();
        if argc == 0 {
            return;
        }

        let mut argv = [""; ARGS];
        for (slot, span) in argv.iter_mut().zip(self.argv.iter()) {
            *slot = str::from_utf8(&self.buffer[span.start..span.end()]).unwrap_or_default();
        }
        let argv = &argv[..argc];

        let Some(command) = self.registry.find(argv[0]) else {
            trace!("no command matches {}", argv[0]);
            return;
        };

        if self.help_enabled && argc == 2 && argv[1] == "-h" {
            trace!("help for {}", command.name);
            self.output(command.description);
            self.output("\r\n");
            return;
        }

        let status = command.handler.call(argc, argv);
        trace!("{} returned {}", command.name, status);
    }
}
