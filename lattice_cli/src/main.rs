use anyhow::Result;
use clap::Parser;
use lattice_core::LatticeError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod report;

use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so stdout stays a clean JSON report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let command = cli.command.name();

    if let Err(err) = run(cli.command) {
        tracing::error!(command, "{err:#}");
        match err.downcast_ref::<LatticeError>() {
            Some(lattice_err) => match serde_json::to_string_pretty(lattice_err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{lattice_err}"),
            },
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Systems { lattice, kind, active } => commands::systems::run(&lattice, kind, active),
        Commands::Schmid {
            lattice,
            kind,
            active,
            sense,
            coefficients,
        } => commands::schmid::run(&lattice, kind, &active, sense, &coefficients),
        Commands::Interaction {
            lattice,
            kind,
            acting,
            active,
            acting_active,
            coefficients,
        } => commands::interaction::run(lattice, kind, acting, &active, acting_active.as_ref(), &coefficients),
        Commands::Shear { lattice, active } => commands::shear::run(&lattice, &active),
        Commands::Moduli {
            stiffness,
            averaging,
            symmetry,
        } => commands::moduli::run(&stiffness, averaging, symmetry),
        Commands::SelfTest { seed } => commands::self_test::run(seed),
    }
}
