//! Headless driver for the tinct color picker.
//!
//! Subcommands:
//! - `render`: open a picker session, replay touches, write the frame as PNG
//! - `spectrum`: write the hue spectrum and one area raster as PNGs

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tinct_engine::logging::{LoggingConfig, init_logging};
use tinct_engine::paint::Hsv;
use tinct_engine::raster::{Raster, write_png};
use tinct_engine::render::SoftwareRenderer;
use tinct_ui::prelude::*;
use tinct_ui::widgets::color_area::{AREA_SIZE, render_area};
use tinct_ui::widgets::hue_bar::{HUE_COUNT, build_spectrum};

#[derive(Parser)]
#[command(name = "tinct", about = "Hue bar and area color picker, rendered headless")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a picker session, replay touches and write the final frame.
    Render {
        /// Color the session starts from (#RRGGBB or #AARRGGBB).
        #[arg(short, long, default_value = "#FF8800")]
        color: Color,

        /// Touch the hue bar at this hue in degrees.
        #[arg(long)]
        hue: Option<f32>,

        /// Touch the area picker at this raster position, "x,y" in 0..=255.
        #[arg(long, value_parser = parse_point)]
        area: Option<Vec2>,

        /// Screen density multiplier.
        #[arg(short, long, default_value_t = 1.0)]
        density: f32,

        /// Session key reported back with the result.
        #[arg(short, long, default_value = "studio")]
        key: String,

        /// End the session with cancel instead of confirm.
        #[arg(long)]
        cancel: bool,

        /// Output file path.
        #[arg(short, long, default_value = "picker.png")]
        output: PathBuf,
    },
    /// Write the 360×1 hue spectrum and the 256×256 area raster for a color.
    Spectrum {
        /// Base color of the area raster.
        #[arg(short, long, default_value = "#FF0000", conflicts_with = "hue")]
        color: Color,

        /// Use the pure color at this hue in degrees as the base instead.
        #[arg(long)]
        hue: Option<f32>,

        /// Directory receiving hue.png and area.png.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let coord = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok(Vec2::new(coord(x)?, coord(y)?))
}

/// Prints the session outcome on stdout.
struct PrintListener;

impl ColorSelectionListener for PrintListener {
    fn on_color_selected(&mut self, key: &str, color: Color) {
        println!("{key}: {color}");
    }

    fn on_selection_cancelled(&mut self, key: &str) {
        println!("{key}: cancelled");
    }
}

/// Presses and releases at `pos`, one frame each.
fn tap(scene: &mut UiScene, dialog: &mut ColorPickerDialog, viewport: Vec2, pos: Vec2) {
    let _ = scene.frame_ref(dialog, viewport, &UiInput::pressed_at(pos));
    let _ = scene.frame_ref(dialog, viewport, &UiInput::released_at(pos));
}

fn render(
    color: Color,
    hue: Option<f32>,
    area: Option<Vec2>,
    density: f32,
    key: String,
    cancel: bool,
    output: PathBuf,
) -> Result<()> {
    let config = PickerConfig::default().density(density);
    let mut dialog = ColorPickerDialog::new(&config, key, color, Box::new(PrintListener))
        .context("opening picker session")?;

    let mut scene = UiScene::new();
    let viewport = UiScene::natural_size(&dialog).floor();
    let _ = scene.frame_ref(&mut dialog, viewport, &UiInput::default());
    let Some(regions) = dialog.regions() else {
        bail!("picker was not laid out");
    };

    if let Some(hue) = hue {
        if !(0.0..360.0).contains(&hue) {
            bail!("hue must be in [0, 360), got {hue}");
        }
        let index = hue.round() as usize % HUE_COUNT;
        let scale = dialog.hue_bar().borrow().scale();
        let bar = regions.hue_bar;
        let pos = bar.origin + scale.to_display((index, 0)) + Vec2::new(0.0, bar.size.y * 0.5);
        log::info!("touching hue bar at {hue}° (entry {index})");
        tap(&mut scene, &mut dialog, viewport, pos);
    }

    if let Some(p) = area {
        let last = (AREA_SIZE - 1) as f32;
        let index = (p.x.clamp(0.0, last) as usize, p.y.clamp(0.0, last) as usize);
        let scale = dialog.area().borrow().scale();
        // The area floors pointer positions; the first whole pixel of the
        // cell lands back on the same raster entry.
        let local = scale.to_display(index).ceil();
        log::info!("touching area at raster ({}, {})", index.0, index.1);
        tap(&mut scene, &mut dialog, viewport, regions.area.origin + local);
    }

    let list = scene.frame_ref(&mut dialog, viewport, &UiInput::default());
    let mut frame = Raster::new(viewport.x as usize, viewport.y as usize, Color::BLACK);
    SoftwareRenderer::default().render(list, &mut frame);
    write_png(&frame, &output).with_context(|| format!("writing {}", output.display()))?;
    eprintln!("Wrote {}×{} frame to {}", frame.width(), frame.height(), output.display());

    if cancel {
        dialog.cancel();
    } else {
        dialog.confirm();
    }
    Ok(())
}

fn spectrum(color: Color, hue: Option<f32>, out_dir: PathBuf) -> Result<()> {
    let color = match hue {
        Some(h) => Hsv { h, s: 1.0, v: 1.0 }.to_color(),
        None => color,
    };
    let hue_path = out_dir.join("hue.png");
    write_png(&build_spectrum(), &hue_path)
        .with_context(|| format!("writing {}", hue_path.display()))?;

    let mut area = Raster::new(AREA_SIZE, AREA_SIZE, Color::BLACK);
    render_area(&mut area, color);
    let area_path = out_dir.join("area.png");
    write_png(&area, &area_path).with_context(|| format!("writing {}", area_path.display()))?;

    eprintln!("Wrote {} and {} (base {color})", hue_path.display(), area_path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_verbosity(cli.verbose));

    match cli.command {
        Command::Render { color, hue, area, density, key, cancel, output } => {
            render(color, hue, area, density, key, cancel, output)
        }
        Command::Spectrum { color, hue, out_dir } => spectrum(color, hue, out_dir),
    }
}
