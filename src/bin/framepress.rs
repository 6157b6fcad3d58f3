use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "framepress", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite photos into a frame and write a print-ready JPEG.
    Compose(ComposeArgs),
    /// Parse and validate a frame layout JSON file.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Frame layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Frame artwork image (alpha preserved).
    #[arg(long)]
    artwork: PathBuf,

    /// Photo files in slot order; repeat once per slot.
    #[arg(long = "photo")]
    photos: Vec<PathBuf>,

    /// Output JPEG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Frame layout JSON.
    #[arg(long)]
    layout: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let layout = framepress::FrameLayout::from_path(&args.layout)?;

    let artwork_bytes = std::fs::read(&args.artwork)
        .with_context(|| format!("read artwork '{}'", args.artwork.display()))?;
    let artwork = framepress::decode_artwork(&artwork_bytes)?;

    let mut photos = Vec::with_capacity(args.photos.len());
    for (index, path) in args.photos.iter().enumerate() {
        let bytes =
            std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
        photos.push(framepress::decode_photo(&bytes, index)?);
    }

    let jpeg = framepress::compose(&layout, &artwork, &photos)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &jpeg)
        .with_context(|| format!("write jpeg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let layout = framepress::FrameLayout::from_path(&args.layout)?;
    layout.validate()?;
    eprintln!(
        "{}: {}x{} canvas, {} slot(s)",
        args.layout.display(),
        layout.width,
        layout.height,
        layout.slot_count()
    );
    Ok(())
}
