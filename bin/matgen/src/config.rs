use clap::Parser;
use matgen_core::Format;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "matgen", version, about = "Generate a random integer matrix or convert one between text and binary files")]
pub struct Cli {
    /// Fill matrix with random values
    #[arg(short = 'r', long)]
    pub random: bool,
    /// Rows in output matrix
    #[arg(short = 'm', long)]
    pub rows: Option<u32>,
    /// Columns in output matrix
    #[arg(short = 'n', long)]
    pub cols: Option<u32>,
    /// Input file with matrix data
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Produce output in plain text format (default: binary)
    #[arg(long)]
    pub txt: bool,
    /// Consume input in binary format (default: text)
    #[arg(long)]
    pub bin: bool,
    /// Seed for the random fill; a fresh OS seed is used when absent
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Random { rows: usize, cols: usize, seed: Option<u64> },
    File { path: PathBuf, format: Format },
}

/// Resolved run settings, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: Source,
    pub output: PathBuf,
    pub output_format: Format,
}

/// Neither the random nor the file mode has all its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOptions;

impl fmt::Display for InvalidOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid options: expected --random --rows --cols --output, or --input --output"
        )
    }
}

impl std::error::Error for InvalidOptions {}

impl TryFrom<Cli> for RunConfig {
    type Error = InvalidOptions;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let output = cli.output.ok_or(InvalidOptions)?;
        let output_format = if cli.txt { Format::Text } else { Format::Binary };

        // Random mode wins when both are complete.
        let source = match (cli.random, cli.rows, cli.cols, cli.input) {
            (true, Some(rows), Some(cols), _) => Source::Random {
                rows: rows as usize,
                cols: cols as usize,
                seed: cli.seed,
            },
            (_, _, _, Some(path)) => Source::File {
                path,
                format: if cli.bin { Format::Binary } else { Format::Text },
            },
            _ => return Err(InvalidOptions),
        };

        Ok(Self { source, output, output_format })
    }
}
