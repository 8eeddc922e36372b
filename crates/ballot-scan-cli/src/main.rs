//! Command-line ballot scanner.
//!
//! Loads a scanned ballot image, traces its contours, calibrates against
//! the timing marks and writes one vote per question to the output record.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::GrayImage;
use imageproc::contours::find_contours;
use log::LevelFilter;
use nalgebra::Point2;

use ballot_scan::{init_with_level, BallotLayout, BallotScanner, Shape};

/// Gray levels below this are treated as ink.
const INK_THRESHOLD: u8 = 150;

#[derive(Parser, Debug)]
#[command(name = "ballot-scan", about = "Optical scan of a single ballot", version)]
struct Args {
    /// Ballot image to scan.
    input_image: PathBuf,
    /// Mark-coordinate list: one `(col, row)` per line, two lines per question.
    mark_coordinates: PathBuf,
    /// Vote record to write, one line per question.
    output_file: PathBuf,
    /// Optional ballot layout JSON overriding the built-in geometry.
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("input file does not exist: {0}")]
    MissingInput(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("bad layout file: {0}")]
    Layout(#[from] serde_json::Error),
    #[error(transparent)]
    Scan(#[from] ballot_scan::ScanError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    for input in [&args.input_image, &args.mark_coordinates] {
        if !input.is_file() {
            return Err(CliError::MissingInput(input.clone()));
        }
    }

    let layout = match &args.layout {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BallotLayout::default(),
    };

    let img = image::ImageReader::open(&args.input_image)?
        .decode()?
        .to_luma8();
    let shapes = detect_shapes(&img);
    log::info!(
        "{}: {} shapes from a {}x{} scan",
        args.input_image.display(),
        shapes.len(),
        img.width(),
        img.height()
    );

    let scanner = BallotScanner::new(layout);
    let ctx = scanner.calibrate(&shapes, img.width())?;

    let mark_list = fs::read_to_string(&args.mark_coordinates)?;
    write_record(&args.output_file, &scanner, &ctx, &shapes, &mark_list)
}

/// Threshold the scan and trace every contour into a vertex polygon.
fn detect_shapes(img: &GrayImage) -> Vec<Shape> {
    let mask = GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y)[0] < INK_THRESHOLD {
            image::Luma([255u8])
        } else {
            image::Luma([0u8])
        }
    });

    find_contours::<i32>(&mask)
        .into_iter()
        .map(|contour| {
            Shape::new(
                contour
                    .points
                    .into_iter()
                    .map(|p| Point2::new(p.x, p.y))
                    .collect(),
            )
        })
        .collect()
}

/// Decode every question and append its result to the record as it
/// completes. The record is truncated up front; a failed question is
/// logged and skipped without aborting the run.
fn write_record(
    path: &Path,
    scanner: &BallotScanner,
    ctx: &ballot_scan::CalibrationContext,
    shapes: &[Shape],
    mark_list: &str,
) -> Result<(), CliError> {
    let mut record = fs::File::create(path)?;
    for vote in scanner.scan(ctx, shapes, mark_list) {
        match vote {
            Ok(vote) => {
                writeln!(record, "{vote}")?;
                record.flush()?;
            }
            Err(err) => log::warn!("skipping question: {err}"),
        }
    }
    Ok(())
}
