//! Interactive calculator console on stdin/stdout.
//!
//! ```text
//! cargo run --example console --features std
//! addint 2 3
//! 5
//! adddbl -h
//! Adds 2 double numbers and prints them
//! ```

use std::io::{self, BufRead, Write};

use tinyshell::args::{parse_double, parse_long_long};
use tinyshell::{Command, global};

fn int_operands(argc: usize, argv: &[&str]) -> Option<(i64, i64)> {
    if argc < 3 {
        return None;
    }
    Some((parse_long_long(argv[1])?, parse_long_long(argv[2])?))
}

fn double_operands(argc: usize, argv: &[&str]) -> Option<(f64, f64)> {
    if argc < 3 {
        return None;
    }
    Some((parse_double(argv[1])?, parse_double(argv[2])?))
}

fn addint(argc: usize, argv: &[&str]) -> i32 {
    let Some((a, b)) = int_operands(argc, argv) else {
        return -1;
    };
    println!("{}\r", a.wrapping_add(b));
    0
}

fn subint(argc: usize, argv: &[&str]) -> i32 {
    let Some((a, b)) = int_operands(argc, argv) else {
        return -1;
    };
    println!("{}\r", a.wrapping_sub(b));
    0
}

fn adddbl(argc: usize, argv: &[&str]) -> i32 {
    let Some((a, b)) = double_operands(argc, argv) else {
        return -1;
    };
    println!("{:.6}\r", a + b);
    0
}

fn subdbl(argc: usize, argv: &[&str]) -> i32 {
    let Some((a, b)) = double_operands(argc, argv) else {
        return -1;
    };
    println!("{:.6}\r", a - b);
    0
}

fn addintstatic(argc: usize, argv: &[&str]) -> i32 {
    println!("Static command...\r");
    addint(argc, argv)
}

fn subintstatic(argc: usize, argv: &[&str]) -> i32 {
    println!("Static command...\r");
    subint(argc, argv)
}

fn adddblstatic(argc: usize, argv: &[&str]) -> i32 {
    println!("Static command...\r");
    adddbl(argc, argv)
}

fn subdblstatic(argc: usize, argv: &[&str]) -> i32 {
    println!("Static command...\r");
    subdbl(argc, argv)
}

const STATIC_COMMANDS: &[Command<'static>] = &[
    Command {
        name: "addintstatic",
        description: "Add 2 integers, a static implementation",
        handler: &addintstatic,
    },
    Command {
        name: "subintstatic",
        description: "Subtract 2 integers, a static implementation",
        handler: &subintstatic,
    },
    Command {
        name: "adddblstatic",
        description: "Add 2 doubles, a static implementation",
        handler: &adddblstatic,
    },
    Command {
        name: "subdblstatic",
        description: "Subtract 2 doubles, a static implementation",
        handler: &subdblstatic,
    },
];

fn stdout_sink(text: &str) {
    let mut out = io::stdout().lock();
    // A sink has no error channel; a closed stdout just loses the text.
    out.write_all(text.as_bytes()).ok();
    out.flush().ok();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    global::set_output(Some(&stdout_sink));
    // Lines arrive already echoed by the terminal
    global::with_default(|shell| shell.set_echo(false));

    global::register_command("addint", &addint, "Adds 2 integer numbers and prints them")?;
    global::register_command("subint", &subint, "Subtracts 2 integer numbers and prints them")?;
    global::register_command("adddbl", &adddbl, "Adds 2 double numbers and prints them")?;
    global::register_command("subdbl", &subdbl, "Subtracts 2 double numbers and prints them")?;
    global::register_static_commands(STATIC_COMMANDS)?;

    println!("Start entering your command and press enter...\r");
    for line in io::stdin().lock().lines() {
        let mut line = line?;
        line.push('\n');
        global::input(line.as_bytes())?;
    }

    Ok(())
}
