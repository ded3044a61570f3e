//! `canvas` — run a .canvas scene script in the terminal.
//!
//! A script with no `frame` blocks prints its scene once and exits; a script
//! with at least one `frame` block loops its frames until interrupted.

use std::fs;
use std::io;
use std::path::Path;
use std::process;

use clap::Parser;

use canvas_lang::build_plan;
use canvas_term::{Player, TermRenderer};

#[derive(Parser)]
#[command(name = "canvas")]
#[command(about = "Render animated ASCII-art scenes from .canvas scripts")]
struct Cli {
    /// Scene script to run
    script: std::path::PathBuf,
}

fn main() {
    // a missing or malformed argument prints usage to stderr and exits 1,
    // like every other failure; --help and --version keep clap's own exit path
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{err}");
            process::exit(1);
        }
        Err(err) => err.exit(),
    };
    if let Err(message) = run(&cli.script) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn run(script: &Path) -> Result<(), String> {
    let source = fs::read_to_string(script)
        .map_err(|e| format!("{}: {e}", script.display()))?;

    let renderer = TermRenderer::new();
    let plan = build_plan(&source, &renderer).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    Player::new(stdout.lock())
        .play(&plan, None)
        .map_err(|e| e.to_string())
}
