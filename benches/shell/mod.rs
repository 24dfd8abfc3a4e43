use criterion::{Criterion, Throughput};
use std::hint::black_box;
use tinyshell::{Command, Shell};

fn nop(argc: usize, argv: &[&str]) -> i32 {
    let _ = black_box((argc, argv));
    0
}

const STATIC_COMMANDS: &[Command<'static>] = &[
    Command { name: "addintstatic", description: "Add 2 integers", handler: &nop },
    Command { name: "subintstatic", description: "Subtract 2 integers", handler: &nop },
    Command { name: "adddblstatic", description: "Add 2 doubles", handler: &nop },
    Command { name: "subdblstatic", description: "Subtract 2 doubles", handler: &nop },
];

fn setup() -> Shell<'static> {
    let mut shell = Shell::new();
    shell.register_command("addint", &nop, "Add 2 integers").unwrap();
    shell.register_command("subint", &nop, "Subtract 2 integers").unwrap();
    shell.register_command("adddbl", &nop, "Add 2 doubles").unwrap();
    shell.register_command("subdbl", &nop, "Subtract 2 doubles").unwrap();
    shell.register_static_commands(STATIC_COMMANDS).unwrap();
    shell
}

const LINE: &[u8] = b"addint 12345 67890\r";
const QUOTED: &[u8] = b"subdbl \"param 2 with space\" \"esc\\\"aped\" 3 4 5\r";

pub fn bench_input_bulk(c: &mut Criterion) {
    let mut shell = setup();
    let mut group = c.benchmark_group("input");
    group.throughput(Throughput::Bytes(LINE.len() as u64));
    group.bench_function("bulk", |b| {
        b.iter(|| shell.input(black_box(LINE)).unwrap());
    });
    group.finish();
}

pub fn bench_input_bytewise(c: &mut Criterion) {
    let mut shell = setup();
    let mut group = c.benchmark_group("input");
    group.throughput(Throughput::Bytes(LINE.len() as u64));
    group.bench_function("bytewise", |b| {
        b.iter(|| {
            for byte in LINE.chunks(1) {
                shell.input(black_box(byte)).unwrap();
            }
        });
    });
    group.finish();
}

pub fn bench_dispatch_quoted(c: &mut Criterion) {
    let mut shell = setup();
    c.bench_function("dispatch_quoted", |b| {
        b.iter(|| shell.input(black_box(QUOTED)).unwrap());
    });
}

pub fn bench_lookup_last_static(c: &mut Criterion) {
    let mut shell = setup();
    c.bench_function("lookup_last_static", |b| {
        b.iter(|| shell.input(black_box(b"subdblstatic 1 2\r")).unwrap());
    });
}
