use anyhow::Result;
use clap::Parser;

use taskvault::auth::Session;
use taskvault::cli::run_shell;
use taskvault::config::{SerializationMode, VaultPaths};
use taskvault::storage::Storage;

#[derive(Parser)]
#[command(
    name = "taskvault",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based task tracker with flat-file persistence",
    long_about = "TaskVault is an interactive terminal task tracker. Register an \
                  account, sign in, file tasks under your own categories, and list \
                  them; everything is mirrored to flat text files between runs."
)]
struct Cli {
    /// Serialization mode for the users file (mandaravadri or json)
    #[arg(
        long = "serialize-mode",
        env = "TASKVAULT_SERIALIZE_MODE",
        default_value = "mandaravadri"
    )]
    serialize_mode: String,

    /// Command to run before the first prompt
    #[arg(long)]
    command: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Welcome to TaskVault");

    let (mode, fell_back) = SerializationMode::resolve(&cli.serialize_mode);
    if fell_back {
        println!(
            "Invalid serialization mode '{}', defaulting to {}",
            cli.serialize_mode, mode
        );
    }

    let paths = VaultPaths::new();
    let mut storage = Storage::new(paths, mode);

    // A broken data file should not stop the program from starting;
    // unreadable collections simply come up empty (and refuse writes).
    if let Err(e) = storage.load_all() {
        eprintln!(
            "Error loading saved data from {}: {}",
            storage.paths().base_dir().display(),
            e
        );
    }

    let mut session = Session::new();
    run_shell(&mut storage, &mut session, cli.command)?;

    Ok(())
}
