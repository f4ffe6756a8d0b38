use clap::Parser;
use tailwind_remap::{analyze, Cli, Commands, RemapError};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => match analyze(&args) {
            Ok(_) => Ok(()),
            // A missing input aborts the run gracefully, matching the
            // original tool: the diagnostic goes to stderr and the process
            // exits cleanly.
            Err(e @ RemapError::MissingInput(_)) => {
                eprintln!("{}", e);
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
