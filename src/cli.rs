//! Command line parsing for the `rastclip` binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::algorithm::{Algorithm, Family, UnknownAlgorithm};
use crate::config::{RenderConfig, MAX_CELL_SIZE, MAX_COORDINATE, MAX_EXTENT};

pub const USAGE: &str = "\
usage:
  rastclip raster <step|dda|bresenham_line> X1 Y1 X2 Y2 [options]
  rastclip raster bresenham_circle CX CY R [options]
  rastclip compare X1 Y1 X2 Y2
  rastclip clip <FILE|-> [options]
  rastclip polygon <FILE|-> [options]

options:
  --png PATH     write a picture of the result
  --extent N     plot coordinates in [-N, N] (default 20)
  --cell N       cell size in image pixels (default 16)
  --no-grid      omit grid lines

Coordinates and R are integers in [-1000000, 1000000].";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Line {
        algorithm: Algorithm,
        from: (i32, i32),
        to: (i32, i32),
    },
    Circle {
        center: (i32, i32),
        radius: u32,
    },
    Compare {
        from: (i32, i32),
        to: (i32, i32),
    },
    Clip(InputSource),
    ClipPolygon(InputSource),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub png: Option<PathBuf>,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("missing command\n{}", USAGE)]
    MissingCommand,
    #[error("unknown command `{0}`\n{}", USAGE)]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("option `{0}` needs a value")]
    MissingValue(String),
    #[error("{what} must be an integer, got `{text}`")]
    InvalidInteger { what: &'static str, text: String },
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error("`{0}` is not a rasterization algorithm")]
    NotRasterization(Algorithm),
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut positional = Vec::new();
    let mut png = None;
    let mut render = RenderConfig::default();

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Invocation {
                    command: Command::Help,
                    png,
                    render,
                })
            }
            "--png" => png = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--extent" => {
                let text = value(&mut args, &arg)?;
                render.extent = bounded("extent", &text, 1, MAX_EXTENT as i64)? as i32;
            }
            "--cell" => {
                let text = value(&mut args, &arg)?;
                render.cell_size = bounded("cell size", &text, 2, MAX_CELL_SIZE as i64)? as u32;
            }
            "--no-grid" => render.draw_grid = false,
            other if other.starts_with("--") => {
                return Err(CliError::UnexpectedArgument(other.to_string()))
            }
            _ => positional.push(arg),
        }
    }

    let command = command(&positional)?;
    Ok(Invocation {
        command,
        png,
        render,
    })
}

fn command(positional: &[String]) -> Result<Command, CliError> {
    let (name, rest) = positional.split_first().ok_or(CliError::MissingCommand)?;
    match name.as_str() {
        "raster" => {
            let (algorithm, coords) = rest
                .split_first()
                .ok_or(CliError::MissingArgument("algorithm"))?;
            let algorithm: Algorithm = algorithm.parse()?;
            match algorithm.family() {
                Family::Line => {
                    let [x1, y1, x2, y2] = integers(coords, ["X1", "Y1", "X2", "Y2"])?;
                    Ok(Command::Line {
                        algorithm,
                        from: (x1, y1),
                        to: (x2, y2),
                    })
                }
                Family::Circle => {
                    let [cx, cy, r] = integers(coords, ["CX", "CY", "R"])?;
                    if r < 0 {
                        return Err(CliError::OutOfRange {
                            what: "R",
                            min: 0,
                            max: MAX_COORDINATE as i64,
                            value: r as i64,
                        });
                    }
                    Ok(Command::Circle {
                        center: (cx, cy),
                        radius: r as u32,
                    })
                }
                _ => Err(CliError::NotRasterization(algorithm)),
            }
        }
        "compare" => {
            let [x1, y1, x2, y2] = integers(rest, ["X1", "Y1", "X2", "Y2"])?;
            Ok(Command::Compare {
                from: (x1, y1),
                to: (x2, y2),
            })
        }
        "clip" => Ok(Command::Clip(source(rest)?)),
        "polygon" => Ok(Command::ClipPolygon(source(rest)?)),
        "help" => Ok(Command::Help),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn integer(what: &'static str, text: &str) -> Result<i32, CliError> {
    let limit = MAX_COORDINATE as i64;
    bounded(what, text, -limit, limit).map(|value| value as i32)
}

fn bounded(what: &'static str, text: &str, min: i64, max: i64) -> Result<i64, CliError> {
    let value = text.parse::<i64>().map_err(|_| CliError::InvalidInteger {
        what,
        text: text.to_string(),
    })?;
    if value < min || value > max {
        return Err(CliError::OutOfRange {
            what,
            min,
            max,
            value,
        });
    }
    Ok(value)
}

fn integers<const N: usize>(args: &[String], names: [&'static str; N]) -> Result<[i32; N], CliError> {
    if let Some(extra) = args.get(N) {
        return Err(CliError::UnexpectedArgument(extra.clone()));
    }
    let mut out = [0; N];
    for (i, name) in names.into_iter().enumerate() {
        let text = args.get(i).ok_or(CliError::MissingArgument(name))?;
        out[i] = integer(name, text)?;
    }
    Ok(out)
}

fn source(args: &[String]) -> Result<InputSource, CliError> {
    match args {
        [] => Err(CliError::MissingArgument("FILE")),
        [dash] if dash == "-" => Ok(InputSource::Stdin),
        [path] => Ok(InputSource::File(PathBuf::from(path))),
        [_, extra, ..] => Err(CliError::UnexpectedArgument(extra.clone())),
    }
}
