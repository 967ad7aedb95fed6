mod options;
mod render;
mod session;

pub use options::*;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use tupper_engine_edit::{codec, grid::GridEditState, PixelMatrix};

use crate::{render::render, session::EditSession};

pub type CliResult<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(version, about = "Decode, draw and encode Tupper's self-referential formula", long_about = None)]
pub struct Args {
    #[arg(help = "Print a JSON snapshot instead of a text grid", long, global = true, default_value_t = false)]
    json: bool,

    #[arg(help = "Options file (defaults to options.toml in the config directory)", long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show the grid of k (default)")]
    Show { k: Option<String> },

    #[command(about = "Print the binary quotient of k")]
    Binary { k: String },

    #[command(about = "Print the k of a binary quotient")]
    FromBinary { bits: String },

    #[command(about = "Read a text grid ('#' on, '.' off) and print its k")]
    Encode { path: PathBuf },

    #[command(about = "Edit a grid interactively, one command per line on stdin")]
    Edit { k: Option<String> },
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "tupper") {
        let dir = proj_dirs.config_dir().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn start_logger() -> Option<LoggerHandle> {
    let result = if let Some(log_dir) = get_log_dir() {
        Logger::try_with_env_or_str("info").and_then(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(&log_dir).basename("tupper").suffix("log").suppress_timestamp())
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                .start()
        })
    } else {
        Logger::try_with_env_or_str("warn").and_then(|logger| logger.log_to_stderr().start())
    };
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn run(args: Args) -> CliResult<()> {
    let options = Options::load_options(args.config.as_deref())?;
    let command = args.command.unwrap_or(Commands::Show { k: None });
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(command, &options, args.json, io::stdin().lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run one subcommand. A `k` typed on the command line is fresh input and must be at least 1.
fn execute(command: Commands, options: &Options, json: bool, input: impl BufRead, out: &mut impl Write) -> CliResult<()> {
    match command {
        Commands::Show { k } => {
            let state = GridEditState::from_k(k.as_deref().unwrap_or(&options.default_k))?;
            out.write_all(render(state.k(), &state.display_binary(), state.pixels(), options, json)?.as_bytes())?;
        }
        Commands::Binary { k } => {
            let state = GridEditState::from_k(&k)?;
            writeln!(out, "{}", state.display_binary())?;
        }
        Commands::FromBinary { bits } => {
            let pixels = codec::decode_binary(&bits)?;
            writeln!(out, "{}", codec::encode(&pixels))?;
        }
        Commands::Encode { path } => {
            let text = fs::read_to_string(&path)?;
            let pixels: PixelMatrix = text.parse()?;
            let k = codec::encode(&pixels);
            if json {
                let binary = codec::quotient_binary(&k)?;
                out.write_all(render(&k, &binary, &pixels, options, true)?.as_bytes())?;
            } else {
                writeln!(out, "{k}")?;
            }
        }
        Commands::Edit { k } => {
            let state = GridEditState::from_k(k.as_deref().unwrap_or(&options.default_k))?;
            let mut session = EditSession::new(state, options.clone(), json);
            session.run(input, out)?;
            log::info!("Edit session ended with a {} digit k", session.state().k().len());
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let _logger = start_logger();

    log::info!("Starting tupper {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
