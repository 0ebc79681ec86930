//! weekchart CLI - render the weekly gradient chart to a draw list.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;
use weekchart_core::{RecordingCanvas, Size};
use weekchart_widgets::{sample_week, ChartEntry, ChartStyle, WeeklyChart};
use weekchart_yaml::ConfigError;

mod output;

#[derive(Parser)]
#[command(name = "weekchart")]
#[command(about = "Weekly gradient chart renderer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a week and print the draw commands
    Render {
        /// Surface width in pixels
        #[arg(long, default_value = "800")]
        width: f32,

        /// Surface height in pixels
        #[arg(long, default_value = "600")]
        height: f32,

        /// Style overrides (YAML)
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Entries to plot (YAML or JSON); the sample week if omitted
        #[arg(short, long)]
        entries: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Validate a style file and print the resolved style
    CheckStyle {
        /// Path to style file
        style: PathBuf,
    },

    /// Print the sample week as YAML
    Sample,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per draw command
    Text,
    /// JSON array of draw commands
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render {
            width,
            height,
            style,
            entries,
            format,
        } => {
            let style = match style {
                Some(path) => weekchart_yaml::load_style(path)?,
                None => ChartStyle::default(),
            };
            let entries = match entries {
                Some(path) => weekchart_yaml::load_entries(path)?,
                None => sample_week(),
            };
            print!(
                "{}",
                render(style, entries, Size::new(width, height), format)?
            );
        }
        Commands::CheckStyle { style } => {
            let style = weekchart_yaml::load_style(&style)?;
            print!("{}", weekchart_yaml::style_to_yaml(&style)?);
        }
        Commands::Sample => {
            print!("{}", weekchart_yaml::entries_to_yaml(&sample_week())?);
        }
    }
    Ok(())
}

fn render(
    style: ChartStyle,
    entries: Vec<ChartEntry>,
    size: Size,
    format: Format,
) -> Result<String, CliError> {
    let mut chart = WeeklyChart::with_style(style);
    chart.submit(entries);

    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, size);
    chart.mark_painted();
    log::info!(
        "rendered {} draw commands at {}x{}",
        canvas.command_count(),
        size.width,
        size.height
    );

    let commands = canvas.take_commands();
    Ok(match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&commands)?;
            json.push('\n');
            json
        }
        Format::Text => commands
            .iter()
            .map(|c| output::describe(c) + "\n")
            .collect(),
    })
}
