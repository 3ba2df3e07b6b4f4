//! folio - Entry Point

use clap::Parser;
use folio::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
};
use folio::links::SystemOpener;
use folio::model::AppError;
use folio::source::detect_content_source;
use folio::view::{dump, run_portfolio, ViewConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// folio - a responsive portfolio screen for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Responsive portfolio screen: hero, skills, contacts and footer")]
pub struct Args {
    /// Path to a TOML content file (built-in portfolio if not provided)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Logical width of one terminal column
    #[arg(long, value_parser = parse_cell_width)]
    pub cell_width: Option<f64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the first frame at COLSxROWS to stdout and exit
    #[arg(long, value_name = "COLSxROWS")]
    pub dump: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_cell_width(value: &str) -> Result<f64, String> {
    let width: f64 = value
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(format!("cell width must be positive, got {value}"))
    }
}

/// Parse `COLSxROWS`, both at least 1.
fn parse_dump_size(value: &str) -> Result<(u16, u16), AppError> {
    let invalid = || AppError::InvalidDumpSize(value.to_string());
    let (columns, rows) = value
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let columns: u16 = columns.trim().parse().map_err(|_| invalid())?;
    let rows: u16 = rows.trim().parse().map_err(|_| invalid())?;
    if columns == 0 || rows == 0 {
        return Err(invalid());
    }
    Ok((columns, rows))
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file)?;
        let with_env = apply_env_overrides(merged)?;
        let no_color_override = args.no_color.then_some(true);
        apply_cli_overrides(
            with_env,
            args.cell_width,
            args.content.clone(),
            no_color_override,
        )
    };

    folio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let portfolio = detect_content_source(config.content_path.clone()).load()?;
    let view = ViewConfig::from_resolved(&config);

    if let Some(size) = args.dump.as_deref() {
        let (columns, rows) = parse_dump_size(size)?;
        println!("{}", dump(portfolio, columns, rows, &view)?);
        return Ok(());
    }

    run_portfolio(portfolio, view, Box::new(SystemOpener))?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
