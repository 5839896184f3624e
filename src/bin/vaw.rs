use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use vaw_rs::{Dataset, Normalizer, NormalizerConfig};
use vaw_rs::{storage, style, viz};

#[derive(Parser, Debug)]
#[command(
    name = "vaw",
    version,
    about = "Clean country-level gender statistics and style them for charting"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drop aggregate rows, relabel aliases, and write the cleaned table.
    Clean(CleanArgs),
    /// Print the footnote for the cleaned table (empty line if none).
    Footnote(InputArgs),
    /// Print the style table (or a single entry) as JSON.
    Style(StyleArgs),
    /// Clean the table and render a female-vs-male dot plot (.svg).
    Plot(PlotArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input CSV with a header row.
    #[arg(short, long)]
    input: PathBuf,
    /// Name of the country/region code column.
    #[arg(short, long, default_value = "geo")]
    column: String,
    /// JSON file overriding patterns, canonical label, or footnote.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CleanArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Save results to file (format inferred by --format or extension). Defaults to CSV on stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Entry name, e.g. female_fill or plot_width.
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args, Debug)]
struct PlotArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Column holding the female values.
    #[arg(long)]
    female: String,
    /// Column holding the male values.
    #[arg(long)]
    male: String,
    /// Output path (.svg).
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = style::PLOT_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = style::PLOT_HEIGHT)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Clean(args) => cmd_clean(args),
        Command::Footnote(args) => cmd_footnote(args),
        Command::Style(args) => cmd_style(args),
        Command::Plot(args) => cmd_plot(args),
    }
}

fn load_normalizer(config: Option<&Path>) -> Result<Normalizer> {
    let cfg = match config {
        Some(p) => NormalizerConfig::from_json_file(p)?,
        None => NormalizerConfig::default(),
    };
    Ok(Normalizer::new(&cfg))
}

fn normalize_input(args: &InputArgs) -> Result<(Dataset, String)> {
    let data = storage::load_csv(&args.input)?;
    let out = load_normalizer(args.config.as_deref())?
        .run(&data, &args.column)
        .with_context(|| format!("normalize {}", args.input.display()))?;
    info!(
        "{}: excluded {} rows, relabeled {} rows",
        args.input.display(),
        out.excluded,
        out.relabeled
    );
    Ok((out.dataset, out.footnote))
}

fn cmd_clean(args: CleanArgs) -> Result<()> {
    let (data, footnote) = normalize_input(&args.input)?;

    match args.out.as_ref() {
        Some(path) => {
            let fmt = match args.format {
                Some(OutFormat::Csv) => "csv",
                Some(OutFormat::Json) => "json",
                None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
            }
            .to_ascii_lowercase();
            match fmt.as_str() {
                "csv" => storage::save_csv(&data, path)?,
                "json" => storage::save_json(&data, path)?,
                other => anyhow::bail!("unsupported format: {}", other),
            }
            eprintln!("Saved {} rows to {}", data.len(), path.display());
        }
        None => match args.format {
            Some(OutFormat::Json) => {
                serde_json::to_writer_pretty(io::stdout().lock(), &data)?;
                println!();
            }
            _ => storage::write_csv(&data, io::stdout().lock())?,
        },
    }

    if !footnote.is_empty() {
        eprintln!("{footnote}");
    }
    Ok(())
}

fn cmd_footnote(args: InputArgs) -> Result<()> {
    let (_, footnote) = normalize_input(&args)?;
    println!("{footnote}");
    Ok(())
}

fn cmd_style(args: StyleArgs) -> Result<()> {
    match args.name {
        Some(name) => {
            let v = style::lookup(&name)
                .ok_or_else(|| anyhow::anyhow!("unknown style entry: {}", name))?;
            println!("{}", serde_json::to_string(&v)?);
        }
        None => println!("{}", serde_json::to_string_pretty(style::style_table())?),
    }
    Ok(())
}

fn cmd_plot(args: PlotArgs) -> Result<()> {
    let (data, footnote) = normalize_input(&args.input)?;
    viz::plot_gap(
        &data,
        &args.input.column,
        &args.female,
        &args.male,
        &args.out,
        args.width,
        args.height,
    )?;
    eprintln!("Wrote plot to {}", args.out.display());
    if !footnote.is_empty() {
        eprintln!("{footnote}");
    }
    Ok(())
}
