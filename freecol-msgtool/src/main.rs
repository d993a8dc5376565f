//! CLI entrypoint for `freecol-msgtool`.

use std::io::{self, Write};

use clap::Parser;
use freecol_msgtool::cli::Args;
use freecol_msgtool::error::MsgtoolError;
use freecol_msgtool::{commands, logging};

fn main() -> Result<(), MsgtoolError> {
    let args = Args::parse();
    logging::init(args.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}
