mod config;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use config::{Cli, RunConfig, Source};
use log::info;
use matgen_math::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

const EXIT_INVALID_OPTIONS: u8 = 255;
const EXIT_FAILURE: u8 = 254;

/// Produce the matrix the config asks for, then write it out.
fn run(cfg: &RunConfig) -> anyhow::Result<Matrix> {
    let mut matrix = Matrix::empty();

    match &cfg.source {
        Source::Random { rows, cols, seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(*s),
                None => StdRng::from_entropy(),
            };
            matgen_fill::random_into(*rows, *cols, &mut rng, &mut matrix)
                .with_context(|| format!("cannot generate a {}x{} matrix", rows, cols))?;
            info!("Generated {}x{} random matrix", rows, cols);
        }
        Source::File { path, format } => {
            matgen_store::load(path, *format, &mut matrix)
                .with_context(|| format!("cannot read {} matrix from {}", format, path.display()))?;
            info!(
                "Loaded {}x{} matrix from {}",
                matrix.rows(),
                matrix.cols(),
                path.display()
            );
        }
    }

    matgen_store::save(&cfg.output, cfg.output_format, &matrix).with_context(|| {
        format!(
            "cannot write {} matrix to {}",
            cfg.output_format,
            cfg.output.display()
        )
    })?;
    info!(
        "Wrote {} matrix to {}",
        cfg.output_format,
        cfg.output.display()
    );

    Ok(matrix)
}

fn print_help() {
    let _ = Cli::command().print_help();
    println!();
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            println!("Unrecognized options");
            print_help();
            return ExitCode::from(EXIT_INVALID_OPTIONS);
        }
    };

    let cfg = match RunConfig::try_from(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("{}", e);
            print_help();
            return ExitCode::from(EXIT_INVALID_OPTIONS);
        }
    };

    match run(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
