mod diagnostics;
mod record;
mod render;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub(crate) type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "bench-chart-gen")]
#[command(about = "Render a benchmark results CSV as a Google Charts table snippet", long_about = None)]
struct Cli {
    /// CSV file with <date,scenario,connections,send,sendTPuts,recvTPuts,link> rows.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input = match cli.input {
        Some(path) => path,
        None => {
            println!("Input file is not specified!");
            return Ok(());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::generate(&input, &mut out)?;
    out.flush()?;

    Ok(())
}
