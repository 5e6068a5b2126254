//! Packs a JSON design file and prints the result.
//!
//! ```text
//! wordpack design.json                     # bucket listing
//! wordpack design.json --format diagram    # register description for the renderer
//! cat design.json | wordpack - --capacity 64 --format json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for placement decisions.

mod output;

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wordpack::{design::Design, diagram::DiagramBuilder, serde::DesignDef};

#[derive(Debug, Parser)]
#[command(name = "wordpack", version, about = "Pack bit fields into fixed-size words")]
struct Args {
    /// Design file, or `-` to read from stdin.
    design: PathBuf,

    /// Override the word capacity from the design file.
    #[arg(long)]
    capacity: Option<usize>,

    /// Override the per-word header width from the design file.
    #[arg(long)]
    header_width: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Report)]
    format: Format,

    /// Label for header boxes in diagram output.
    #[arg(long, default_value = "Frag #")]
    header_label: String,

    /// Type tag for header boxes in diagram output.
    #[arg(long)]
    header_type: Option<u32>,

    /// Log placement decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable bucket listing.
    Report,
    /// Register description for a bit-field diagram renderer.
    Diagram,
    /// Words and fragments with bit positions.
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut def = read_design(&args.design)?;
    if let Some(capacity) = args.capacity {
        def.capacity = capacity;
    }
    if let Some(header_width) = args.header_width {
        def.header_width = header_width;
    }

    let design = Design::try_from(def).context("invalid design")?;
    let layout = design.pack().context("packing failed")?;

    match args.format {
        Format::Report => print!("{}", layout.report()),
        Format::Diagram => {
            let mut builder = DiagramBuilder::new(&layout, &design.catalog);
            builder.set_header_label(args.header_label);
            if let Some(kind) = args.header_type {
                builder.set_header_kind(kind);
            }
            println!("{}", serde_json::to_string_pretty(&builder.build())?);
        }
        Format::Json => {
            let out = output::LayoutOut::from(&layout);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "wordpack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_design(path: &Path) -> anyhow::Result<DesignDef> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading design from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading design file {}", path.display()))?
    };

    let def: DesignDef = serde_json::from_str(&text).context("parsing design JSON")?;
    tracing::debug!(fields = def.fields.len(), capacity = def.capacity, "loaded design");
    Ok(def)
}
