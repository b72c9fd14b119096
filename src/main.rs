use std::io;
use std::io::{Read, Write};
use std::process;

use anyhow::Context as _;

use lambda_strip::clean;

fn main() -> anyhow::Result<()> {
    // An interrupt while waiting on stdin ends the run quietly: no output,
    // exit status 0.
    ctrlc::set_handler(|| process::exit(0))
        .context("could not install the interrupt handler")?;

    let input = read_from_stdin()?;
    print(&clean(&input))?;
    Ok(())
}

fn print(s: &str) -> io::Result<()> {
    io::stdout().write_all(s.as_bytes())?;
    io::stdout().flush()
}

fn read_from_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("could not read input")?;
    Ok(buf)
}
