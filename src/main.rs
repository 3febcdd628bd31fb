//! device-label: render identification labels for network devices

use clap::{Parser, ValueEnum};
use device_label::{
    BatchOptions, LabelError, LabelStyle, MarginSpec, MergeTool, Orientation, PageSpec,
    UrlTemplate, batch::written_paths, constants::DEFAULT_MERGE_TOOL, render_batch,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Render printable device labels with barcode and QR code")]
struct Args {
    /// Hardware addresses, one label each
    #[arg(required = true)]
    addresses: Vec<String>,

    /// Management host used in the QR code URL
    #[arg(long, conflicts_with = "url_template")]
    host: Option<String>,

    /// Full URL template containing {address}
    #[arg(long)]
    url_template: Option<String>,

    /// Footer text printed bottom-right
    #[arg(short, long)]
    footer: Option<String>,

    /// Page size in millimetres, WIDTHxHEIGHT
    #[arg(long, default_value = "148x210")]
    page_size: String,

    /// Margins in millimetres, HORIZONTALxVERTICAL
    #[arg(long, default_value = "30x25")]
    margin: String,

    /// Force the page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Base font size in points
    #[arg(long, default_value = "9")]
    font_size: f32,

    /// Standard PDF font family
    #[arg(long, default_value = "Helvetica")]
    font_family: String,

    /// Barcode band height in points
    #[arg(long, default_value = "65")]
    barcode_height: f32,

    /// Directory the label files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Merge all generated labels into this file
    #[arg(short, long)]
    merge: Option<PathBuf>,

    /// Program used for merging, called as PROGRAM INPUT... OUTPUT
    #[arg(long, default_value = DEFAULT_MERGE_TOOL)]
    merge_tool: String,

    /// Write uncompressed content streams
    #[arg(long)]
    no_compress: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every label (and the merge) succeeded
fn run() -> Result<bool, LabelError> {
    let args = Args::parse();
    let options = batch_options(&args)?;

    let results = render_batch(&args.addresses[..], &options);
    let mut ok = true;
    for (address, result) in args.addresses.iter().zip(&results) {
        match result {
            Ok(written) => println!("Written {} to {}", written.address, written.path.display()),
            Err(e) => {
                eprintln!("Error: {}: {}", address.trim(), e);
                ok = false;
            }
        }
    }

    if let Some(destination) = &args.merge {
        let paths = written_paths(&results);
        match MergeTool::new(&args.merge_tool).merge(&paths, destination) {
            Ok(()) => println!("Merged {} files into {}", paths.len(), destination.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                ok = false;
            }
        }
    }

    Ok(ok)
}

fn batch_options(args: &Args) -> Result<BatchOptions, LabelError> {
    let url_template = match (&args.host, &args.url_template) {
        (Some(host), _) => UrlTemplate::for_host(host)?,
        (None, Some(template)) => UrlTemplate::new(template.clone())?,
        (None, None) => UrlTemplate::default(),
    };

    let style = LabelStyle {
        font_size: args.font_size,
        font_family: args.font_family.clone(),
        barcode_height: args.barcode_height,
        compress: !args.no_compress,
        ..LabelStyle::default()
    };

    Ok(BatchOptions {
        url_template,
        output_dir: args.output_dir.clone(),
        footer: args.footer.clone(),
        page: PageSpec::parse(&args.page_size)?,
        margin: MarginSpec::parse(&args.margin)?,
        orientation: args.orientation.map(Orientation::from),
        style,
    })
}
