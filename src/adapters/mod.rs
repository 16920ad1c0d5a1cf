#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::derived::calculator::compute_summary;

    let args = Args::parse();
    let (inputs, assumptions) = parse_inputs(&args)?;

    let out = compute_summary(&inputs, &assumptions)?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
