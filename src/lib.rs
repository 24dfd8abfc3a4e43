//! # tinyshell - embeddable line shell
//!
//! A small command shell for device consoles. Bytes typed on a UART (or any
//! other stream) are fed in as they arrive; the shell echoes them, handles
//! backspace, and when a line is complete splits it into arguments and runs
//! the registered command it names. It is designed for embedded systems and
//! supports `no_std` environments.
//!
//! ## Features
//!
//! - **Zero-allocation**: line buffer, argument list and command table are
//!   fixed-size and sized through const generics
//! - **Incremental input**: any chunking, from one byte to a whole buffer
//! - **Quoting**: `"quoted arguments"` with `\"` escapes, parsed in place
//! - **Two command tables**: runtime registration and a caller-owned static slice
//! - **Prefix matching**: a command runs when its name starts with what was typed
//! - **Built-in help**: `<command> -h` prints the command's description
//!
//! ## Usage
//!
//! ```rust
//! use tinyshell::{Command, Shell};
//!
//! fn mycmd(argc: usize, argv: &[&str]) -> i32 {
//!     println!("mycmd called. Number of argv: {}", argc);
//!     for (i, arg) in argv.iter().enumerate() {
//!         println!("ARG[{}]: {}", i, arg);
//!     }
//!     0
//! }
//!
//! let mut shell = Shell::new();
//! shell.register_command("mycmd", &mycmd, "Print the arguments").unwrap();
//! shell.input(b"mycmd param1 \"param 2 with space\"\r").unwrap();
//! ```
//!
//! ## Platform Support
//!
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Hosted targets, for testing and desktop consoles
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the `global` default session
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

#[macro_use]
mod fmt;

/// Command records, handler capability and lookup rules.
pub mod command;

/// Error type shared by all fallible operations.
pub mod error;

/// Line accumulator, output sink and dispatcher.
pub mod shell;

/// Lenient integer and floating-point parsing for handler arguments.
pub mod args;

/// Process-wide default session.
#[cfg(feature = "std")]
pub mod global;

mod parser;

pub use command::{Command, CommandHandler};
pub use error::{Error, Result};
pub use shell::{Capacity, OutputSink, Shell};
