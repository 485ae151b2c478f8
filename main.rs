use clap::Parser;
use log::debug;
use std::io::{self, Write};

use smoketest_core::add;
use smoketest_core::greeting::Greeter;

/// Minimal smoke test: verifies that the toolchain can build and run a binary
/// with library and CLI dependencies linked in. Takes no arguments and prints
/// exactly two lines.
#[derive(Parser, Debug)]
#[clap(name = "smoketest", version, about = "Prints a sum and a greeting")]
struct Opts {}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default()).init();
}

/// Write the two output lines to `out`: the labelled sum, then the greeting.
fn write_output<W: Write>(out: &mut W) -> io::Result<()> {
    let sum = add(5, 3);
    debug!("computed sum of 5 and 3: {}", sum);
    writeln!(out, "Sum: {}", sum)?;

    let greeter = Greeter::new();
    let greeting = greeter.greet("World");
    debug!("formatted greeting: {:?}", greeting);
    writeln!(out, "{}", greeting)?;

    Ok(())
}

fn main() -> io::Result<()> {
    let _opts = Opts::parse();
    init_logging();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle)
}
