use std::env;
use std::process::ExitCode;

use wish::error::{print_error, ShellError};
use wish::flags::Flags;
use wish::shell::Shell;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut flags = Flags::new();

    if let Err(e) = flags.parse(&args) {
        return fail(&e, false);
    }
    let debug = flags.is_set("debug");

    match run(flags) {
        Ok(status) => ExitCode::from(status),
        Err(e) => fail(&e, debug),
    }
}

fn run(flags: Flags) -> Result<u8, ShellError> {
    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("wish {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let mut shell = Shell::new(flags)?;
    shell.run()
}

fn fail(error: &ShellError, debug: bool) -> ExitCode {
    print_error();
    if debug {
        eprintln!("wish: {}", error);
    }
    ExitCode::FAILURE
}
