use std::{env, io, process};

use pulsewrap_core::{cli, init};

fn main() {
    init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli::run(env::args().skip(1), &mut out) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
