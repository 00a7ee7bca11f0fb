use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};

use gbgraphics::{
    codec::BitDepth,
    config::{get_global_config_path, load_global_config},
    export::{dump_range, export_tiles, Report},
    finder::{ScanMode, TileFinder},
    helpers::parse_hex,
    palette::{PaletteName, PaletteTable},
    persist::{clean_numbered_outputs, load_png, save_json},
    scan::{Rom, RomAddr},
};

#[derive(Parser, Debug)]
#[command(
    name = "gbgraphics",
    version,
    about = "Extract graphics from a Game Boy ROM using a screenshot"
)]
struct Cli {
    /// Config file (defaults to config.json in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate the tiles of a screenshot in the ROM and save each one as a PNG
    Find(FindArgs),
    /// Render a range of ROM bytes as tiles
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct FindArgs {
    /// Path to the ROM file
    rom: PathBuf,
    /// Path of an in-game screenshot (160x144 PNG)
    #[arg(long = "img", value_name = "SCREENSHOT")]
    screenshot: PathBuf,
    /// Output file; tiles are written as <stem>_<n>.png
    #[arg(long, default_value = "out.png")]
    output: PathBuf,
    /// Palette the screenshot was rendered with
    #[arg(long, value_enum)]
    palette: Option<PaletteName>,
    /// Run the shift passes one after another on the current thread
    #[arg(long)]
    sequential: bool,
    /// Fail unless some alignment of the screenshot has all of its tiles in the ROM
    #[arg(long)]
    strict: bool,
    /// Write a JSON summary of the located tiles
    #[arg(long)]
    report: Option<PathBuf>,
    /// Delete <stem>_<n>.png files from earlier runs first
    #[arg(long)]
    clean: bool,
}

#[derive(Args, Debug)]
struct DumpArgs {
    /// Path to the ROM file
    rom: PathBuf,
    /// Beginning of the range
    #[arg(long, value_parser = parse_hex)]
    offset: usize,
    /// Length of the range
    #[arg(long, value_parser = parse_hex, default_value = "0x10")]
    length: usize,
    /// Width of the image in pixels
    #[arg(long, default_value_t = 8)]
    width: usize,
    /// Bits per pixel
    #[arg(long, value_enum, default_value = "2")]
    bpp: BitDepth,
    #[arg(long, default_value = "out.png")]
    output: PathBuf,
}

fn load_rom(path: &Path) -> Result<Rom> {
    info!("Loading ROM at {}", path.display());
    let data = std::fs::read(path).with_context(|| format!("Unable to read {}", path.display()))?;
    let rom = Rom::new(data);
    if rom.is_empty() {
        warn!("{} is empty", path.display());
    }
    Ok(rom)
}

fn find(args: FindArgs, config_path: PathBuf) -> Result<()> {
    let config = load_global_config(&config_path)?;
    let palette = args.palette.unwrap_or(config.palette);
    let rom = load_rom(&args.rom)?;
    let screen = load_png(&args.screenshot)?;

    let palettes = PaletteTable::standard();
    let mut finder = TileFinder::new(&palettes, palette.id());
    finder.parallel = config.parallel && !args.sequential;
    finder.mode = if config.strict || args.strict {
        ScanMode::Strict
    } else {
        ScanMode::Lenient
    };
    let addrs = finder
        .find(&screen, &rom)
        .with_context(|| format!("Unable to match {}", args.screenshot.display()))?;
    info!("Located {} tiles", addrs.len());

    if args.clean {
        let removed = clean_numbered_outputs(&args.output)?;
        info!("Removed {} old tile images", removed);
    }
    let tiles = export_tiles(&rom, &addrs, &args.output)?;
    if let Some(report_path) = &args.report {
        let report = Report {
            rom: args.rom.clone(),
            screenshot: args.screenshot.clone(),
            palette,
            tiles,
        };
        save_json(report_path, &report)?;
    }
    Ok(())
}

fn dump(args: DumpArgs) -> Result<()> {
    let rom = load_rom(&args.rom)?;
    dump_range(
        &rom,
        RomAddr(args.offset),
        args.length,
        args.width,
        args.bpp,
        &args.output,
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Find(args) => {
            let config_path = match cli.config {
                Some(path) => path,
                None => get_global_config_path()?,
            };
            find(args, config_path)
        }
        Command::Dump(args) => dump(args),
    }
}
