use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use qr_labels::{FontVec, Label, LabelOptions, LabelSource};
use qr_sheets::{Page, SheetOptions};
use qr_sheets::image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrt", about = "QR label and print sheet tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate captioned QR labels
    Generate {
        #[command(flatten)]
        labels: LabelArgs,

        /// Output directory for label PNGs
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output ZIP archive of label PNGs
        #[arg(long)]
        zip: Option<PathBuf>,
    },

    /// Tile a directory of equally-sized images onto print sheets
    Sheets {
        /// Directory of item PNGs, packed in file name order
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,

        #[command(flatten)]
        output: SheetOutputArgs,
    },

    /// Generate labels and tile them onto sheets in one step
    Batch {
        #[command(flatten)]
        labels: LabelArgs,

        #[command(flatten)]
        sheet: SheetArgs,

        #[command(flatten)]
        output: SheetOutputArgs,

        /// Also write the individual labels to a ZIP archive
        #[arg(long)]
        labels_zip: Option<PathBuf>,
    },
}

#[derive(Args)]
struct LabelArgs {
    /// First number of the range
    #[arg(long, default_value = "1")]
    start: u64,

    /// How many numbers the range covers
    #[arg(long, default_value = "5")]
    count: u64,

    /// Comma separated numbers; replaces the range when non-empty
    #[arg(long)]
    list: Option<String>,

    /// File with one number per line (first CSV column); replaces the range
    #[arg(long)]
    list_file: Option<PathBuf>,

    /// Label text prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Zero-pad numbers to this many digits
    #[arg(long)]
    digits: Option<usize>,

    /// Caption font (TTF/OTF); the bundled DejaVu Sans is used when omitted
    #[arg(long)]
    font: Option<PathBuf>,

    /// Label options JSON file
    #[arg(long)]
    label_config: Option<PathBuf>,
}

#[derive(Args)]
struct SheetArgs {
    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Sheet resolution
    #[arg(long)]
    dpi: Option<u32>,

    /// Border around the grid in pixels
    #[arg(long)]
    margin: Option<u32>,

    /// Gap between items in pixels
    #[arg(long)]
    padding: Option<u32>,

    /// Sheet options JSON file
    #[arg(long)]
    sheet_config: Option<PathBuf>,
}

#[derive(Args)]
struct SheetOutputArgs {
    /// Output directory for sheet PNGs
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output ZIP archive of sheet PNGs
    #[arg(long)]
    zip: Option<PathBuf>,

    /// Output PDF with one sheet per page
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Show statistics only, don't render sheets
    #[arg(long)]
    stats_only: bool,
}

impl SheetOutputArgs {
    fn is_empty(&self) -> bool {
        self.output.is_none() && self.zip.is_none() && self.pdf.is_none()
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for qr_sheets::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for qr_sheets::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            labels,
            output,
            zip,
        } => {
            if output.is_none() && zip.is_none() {
                bail!("Nothing to write: pass --output and/or --zip");
            }

            let labels = build_labels(&labels).await?;
            if labels.is_empty() {
                println!("Nothing to do: no labels requested");
                return Ok(());
            }

            if let Some(dir) = &output {
                qr_sheets::save_images(label_entries(&labels), dir).await?;
                println!("Generated {} labels → {}", labels.len(), dir.display());
            }
            if let Some(path) = &zip {
                qr_sheets::save_zip(label_entries(&labels), path).await?;
                println!("Archived {} labels → {}", labels.len(), path.display());
            }
        }

        Commands::Sheets {
            input,
            sheet,
            output,
        } => {
            let options = sheet_options(&sheet).await?;
            let items = qr_sheets::load_items(&input).await?;
            pack_and_write(&items, &options, &output).await?;
        }

        Commands::Batch {
            labels,
            sheet,
            output,
            labels_zip,
        } => {
            let options = sheet_options(&sheet).await?;
            let labels = build_labels(&labels).await?;

            if let Some(path) = &labels_zip {
                qr_sheets::save_zip(label_entries(&labels), path).await?;
                println!("Archived {} labels → {}", labels.len(), path.display());
            }

            let items: Vec<_> = labels.into_iter().map(|label| label.image).collect();
            pack_and_write(&items, &options, &output).await?;
        }
    }

    Ok(())
}

async fn build_labels(args: &LabelArgs) -> Result<Vec<Label>> {
    let mut options = match &args.label_config {
        Some(path) => LabelOptions::load(path).await?,
        None => LabelOptions::default(),
    };
    if let Some(prefix) = &args.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(digits) = args.digits {
        options.digits = digits;
    }

    let mut list = match &args.list {
        Some(text) => qr_labels::parse_number_list(text)?,
        None => Vec::new(),
    };
    if let Some(path) = &args.list_file {
        list.extend(qr_labels::load_number_list(path).await?);
    }

    let source = LabelSource::new(list, args.start, args.count);
    let texts = qr_labels::label_texts(&source, &options)?;
    tracing::info!(count = texts.len(), "resolved label texts");

    let font = caption_font(args.font.as_deref()).await?;
    Ok(qr_labels::generate_labels(&texts, &font, &options)?)
}

/// The font given on the command line, or the bundled one
async fn caption_font(path: Option<&Path>) -> Result<FontVec> {
    match path {
        Some(path) => {
            tracing::debug!(font = %path.display(), "using caption font");
            Ok(qr_labels::load_font(path).await?)
        }
        None => Ok(qr_labels::builtin_font()?),
    }
}

async fn sheet_options(args: &SheetArgs) -> Result<SheetOptions> {
    let mut options = match &args.sheet_config {
        Some(path) => SheetOptions::load(path).await?,
        None => SheetOptions::default(),
    };
    if let Some(paper) = args.paper {
        options.paper = paper.into();
    }
    if let Some(orientation) = args.orientation {
        options.orientation = orientation.into();
    }
    if let Some(dpi) = args.dpi {
        options.dpi = dpi;
    }
    if let Some(margin) = args.margin {
        options.margin_px = margin;
    }
    if let Some(padding) = args.padding {
        options.padding_px = padding;
    }
    options.validate()?;
    Ok(options)
}

async fn pack_and_write(
    items: &[RgbaImage],
    options: &SheetOptions,
    output: &SheetOutputArgs,
) -> Result<()> {
    if items.is_empty() {
        println!("Nothing to do: no items to pack");
        return Ok(());
    }
    qr_sheets::ensure_uniform(items)?;

    let geometry = options.geometry();
    let stats = qr_sheets::calculate_statistics(items.len(), items[0].dimensions(), &geometry);
    println!("Sheet Statistics:");
    println!("  Page size: {} x {} px", geometry.page_width, geometry.page_height);
    println!("  Items: {}", stats.items);
    println!("  Grid: {} columns x {} rows", stats.cols, stats.rows);
    println!("  Items per page: {}", stats.per_page);
    println!("  Pages: {}", stats.pages);
    println!("  Empty slots on last page: {}", stats.empty_slots);

    if output.stats_only {
        return Ok(());
    }
    if output.is_empty() {
        bail!("Nothing to write: pass --output, --zip and/or --pdf");
    }

    let pages: Vec<Page> =
        qr_sheets::pack_with_background(items, &geometry, options.background_color());

    if let Some(dir) = &output.output {
        qr_sheets::save_pages(&pages, dir).await?;
        println!("Packed {} sheets → {}", pages.len(), dir.display());
    }
    if let Some(path) = &output.zip {
        qr_sheets::save_pages_zip(&pages, path).await?;
        println!("Archived {} sheets → {}", pages.len(), path.display());
    }
    if let Some(path) = &output.pdf {
        qr_sheets::save_pdf(&pages, options, path).await?;
        println!("Wrote {} sheets → {}", pages.len(), path.display());
    }

    Ok(())
}

fn label_entries(labels: &[Label]) -> Vec<(String, RgbaImage)> {
    let names = qr_labels::archive_names(labels.iter().map(|label| label.text.as_str()));
    names
        .into_iter()
        .zip(labels)
        .map(|(name, label)| (name, label.image.clone()))
        .collect()
}
