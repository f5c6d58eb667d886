use std::io;

use rastclip::{app, cli, logging};

fn main() -> Result<(), String> {
    logging::init();

    let invocation = cli::parse_args(std::env::args().skip(1)).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&invocation, stdin.lock(), &mut out).map_err(|e| e.to_string())
}
