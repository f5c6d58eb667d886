//! Runs a parsed [`Invocation`] against the library and writes the report.

use std::io::{self, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::cli::{CliError, Command, InputSource, Invocation, USAGE};
use crate::clipper::{clip_polygon, clip_segments, ClipRegion};
use crate::colors;
use crate::config::RenderConfig;
use crate::geometry::{Pixel, Polygon};
use crate::input::{parse_polygon, parse_segments, ParseError};
use crate::raster::{bresenham_circle, slope_intercept, LineAlgorithm};
use crate::render::Canvas;
use crate::report;

/// Repetitions per algorithm when timing `compare`.
const TIMING_RUNS: u32 = 1000;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("clip polygon must be convex with at least 3 vertices")]
    NonConvexClip,
}

/// Executes `invocation`, reading file input from `stdin` when it names `-`.
pub fn run<R: Read, W: Write>(
    invocation: &Invocation,
    stdin: R,
    out: &mut W,
) -> Result<(), AppError> {
    debug!("running {:?}", invocation.command);
    match &invocation.command {
        Command::Help => writeln!(out, "{}", USAGE)?,
        Command::Line {
            algorithm,
            from,
            to,
        } => {
            let Some(line) = algorithm.line() else {
                return Err(CliError::NotRasterization(*algorithm).into());
            };
            let points = line.rasterize(from.0, from.1, to.0, to.1);
            write!(out, "{}", report::points_table(&line.to_string(), &points))?;
            if line == LineAlgorithm::StepByStep {
                match slope_intercept(from.0, from.1, to.0, to.1) {
                    Some((k, b)) => writeln!(out, "{}", report::line_equation(k, b))?,
                    None => writeln!(out, "x = {}", from.0)?,
                }
            }
            save_pixels(invocation, &points, colors::LINE_PIXEL)?;
        }
        Command::Circle { center, radius } => {
            let points = bresenham_circle(center.0, center.1, *radius);
            write!(out, "{}", report::points_table("Bresenham circle", &points))?;
            save_pixels(invocation, &points, colors::CIRCLE_PIXEL)?;
        }
        Command::Compare { from, to } => compare(*from, *to, out)?,
        Command::Clip(source) => {
            let input = parse_segments(&read_source(source, stdin)?)?;
            let clipped = clip_segments(&input.segments, &input.window);
            let visible = clipped.iter().filter(|c| c.is_some()).count();
            debug!("{visible} of {} segments visible", input.segments.len());

            for (i, (segment, result)) in input.segments.iter().zip(&clipped).enumerate() {
                writeln!(out, "{}", report::clip_line(i, segment, result.as_ref()))?;
            }

            if let Some(path) = &invocation.png {
                let mut canvas = Canvas::new(&invocation.render);
                canvas.draw_window(&input.window, colors::WINDOW);
                for segment in &input.segments {
                    canvas.draw_segment(segment, colors::REJECTED);
                }
                for segment in clipped.iter().flatten() {
                    canvas.draw_segment(segment, colors::CLIPPED);
                }
                save(&canvas, path)?;
            }
        }
        Command::ClipPolygon(source) => {
            let input = parse_polygon(&read_source(source, stdin)?)?;
            if let ClipRegion::Convex(clip) = &input.region {
                if clip.len() < 3 || !clip.is_convex() {
                    return Err(AppError::NonConvexClip);
                }
            }

            writeln!(out, "subject: {}", report::polygon_line(&input.subject))?;
            writeln!(out, "against {}", input.region)?;
            let result = clip_polygon(&input.subject, &input.region);
            match &result {
                Some(polygon) => writeln!(out, "clipped: {}", report::polygon_line(polygon))?,
                None => writeln!(out, "clipped: empty")?,
            }

            if let Some(path) = &invocation.png {
                save_polygons(&invocation.render, path, &input.subject, &input.region, result.as_ref())?;
            }
        }
    }
    Ok(())
}

fn compare<W: Write>(from: (i32, i32), to: (i32, i32), out: &mut W) -> Result<(), AppError> {
    let mut timings: Vec<(String, Duration)> = Vec::with_capacity(LineAlgorithm::ALL.len());
    for line in LineAlgorithm::ALL {
        let points = line.rasterize(from.0, from.1, to.0, to.1);
        write!(out, "{}", report::points_table(&line.to_string(), &points))?;

        let start = Instant::now();
        for _ in 0..TIMING_RUNS {
            std::hint::black_box(line.rasterize(from.0, from.1, to.0, to.1));
        }
        let elapsed = start.elapsed() / TIMING_RUNS;
        debug!("{line}: {elapsed:?} per run");
        timings.push((line.to_string(), elapsed));
    }
    writeln!(out)?;
    write!(out, "{}", report::timing_table(&timings))?;
    Ok(())
}

fn read_source<R: Read>(source: &InputSource, mut stdin: R) -> Result<String, AppError> {
    let text = match source {
        InputSource::Stdin => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        }
        InputSource::File(path) => std::fs::read_to_string(path)?,
    };
    debug!("read {} bytes of input", text.len());
    Ok(text)
}

fn save_pixels(invocation: &Invocation, pixels: &[Pixel], color: u32) -> Result<(), AppError> {
    if let Some(path) = &invocation.png {
        let mut canvas = Canvas::new(&invocation.render);
        canvas.plot(pixels, color);
        save(&canvas, path)?;
    }
    Ok(())
}

fn save_polygons(
    config: &RenderConfig,
    path: &Path,
    subject: &Polygon,
    region: &ClipRegion,
    result: Option<&Polygon>,
) -> Result<(), AppError> {
    let mut canvas = Canvas::new(config);
    match region {
        ClipRegion::Window(window) => canvas.draw_window(window, colors::WINDOW),
        ClipRegion::Convex(clip) => canvas.draw_polygon(clip, colors::WINDOW),
    }
    canvas.draw_polygon(subject, colors::REJECTED);
    if let Some(polygon) = result {
        canvas.draw_polygon(polygon, colors::CLIPPED);
    }
    save(&canvas, path)
}

fn save(canvas: &Canvas, path: &Path) -> Result<(), AppError> {
    canvas.save_png(path)?;
    debug!("wrote {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
