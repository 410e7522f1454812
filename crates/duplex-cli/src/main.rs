use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use duplex_impose::{ImposeError, ImpositionSettings, ImpositionStatistics};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dxi",
    about = "Impose A4 pages onto A3 sheets for duplex printing",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a PDF, two pages per A3 sheet with fronts and backs aligned
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Settings file to start from (see `dxi config`)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: SettingsArgs,

        /// Only impose the first batch, to check alignment before a full run
        #[arg(long)]
        test_sheet: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Write a settings file with default values
    Config {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Calibration flags; each one overrides the settings file
#[derive(Args)]
struct SettingsArgs {
    /// Horizontal offset in mm
    #[arg(long, allow_hyphen_values = true)]
    x_offset: Option<f32>,

    /// Vertical offset in mm
    #[arg(long, allow_hyphen_values = true)]
    y_offset: Option<f32>,

    /// Gutter between the two pages in mm
    #[arg(long, allow_hyphen_values = true)]
    gutter: Option<f32>,

    /// Scale factor (1.0 = 100%)
    #[arg(long)]
    scale: Option<f32>,

    /// Extra horizontal shift for back sheets in mm
    #[arg(long, allow_hyphen_values = true)]
    duplex_correction: Option<f32>,

    /// Don't draw the center line and side labels
    #[arg(long)]
    no_guides: bool,
}

impl SettingsArgs {
    fn apply(&self, mut settings: ImpositionSettings) -> ImpositionSettings {
        if let Some(x) = self.x_offset {
            settings = settings.with_x_offset_mm(x);
        }
        if let Some(y) = self.y_offset {
            settings = settings.with_y_offset_mm(y);
        }
        if let Some(gutter) = self.gutter {
            settings = settings.with_gutter_mm(gutter);
        }
        if let Some(scale) = self.scale {
            settings = settings.with_scale(scale);
        }
        if let Some(correction) = self.duplex_correction {
            settings = settings.with_duplex_correction_mm(correction);
        }
        if self.no_guides {
            settings = settings.with_center_line(false);
        }
        settings
    }
}

fn print_statistics(stats: &ImpositionStatistics) {
    println!("Imposition Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Batches: {}", stats.batches);
    println!("  Front sheets: {}", stats.front_sheets);
    println!("  Back sheets: {}", stats.back_sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Empty slots: {}", stats.empty_slots);
}

/// Load failures are reported with the short user-facing message
fn user_facing(err: ImposeError) -> anyhow::Error {
    if err.is_load_error() {
        log::debug!("load failed: {}", err);
        anyhow::anyhow!(err.user_message())
    } else {
        err.into()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Impose {
            input,
            output,
            config,
            overrides,
            test_sheet,
            stats_only,
        } => {
            let base = match &config {
                Some(path) => ImpositionSettings::load(path).await?,
                None => ImpositionSettings::default(),
            };
            let settings = overrides.apply(base);
            settings.validate()?;
            log::info!("settings: {:?}", settings);

            let document = duplex_impose::load_pdf(&input).await.map_err(user_facing)?;

            // Calculate and show statistics
            let stats = duplex_impose::document_statistics(&document);
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let imposed = if test_sheet {
                duplex_impose::generate_preview(&document, &settings, 1).await?
            } else {
                duplex_impose::impose_document(&document, &settings)?
            };
            let sheets = imposed.get_pages().len();
            duplex_impose::save_pdf(imposed, &output).await?;
            println!("Imposed {} sheets → {}", sheets, output.display());
        }

        Commands::Config { output } => {
            ImpositionSettings::default().save(&output).await?;
            println!("Default settings → {}", output.display());
        }
    }

    Ok(())
}
