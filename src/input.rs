//! Text input formats.
//!
//! Segment lists:
//!
//! ```text
//! n
//! x1 y1 x2 y2            (n lines)
//! xmin ymin xmax ymax    (optional; default -10 -10 10 10)
//! ```
//!
//! Polygons:
//!
//! ```text
//! n
//! x y                    (n subject vertices)
//! xmin ymin xmax ymax    (optional window)
//! ```
//!
//! or, for a convex clip polygon instead of a window, a vertex count `m`
//! followed by `m` lines of `x y`.
//!
//! Blank lines are ignored. Any malformed or short input is an error; a
//! partial result is never returned.

use std::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

use crate::clipper::ClipRegion;
use crate::geometry::{ClipWindow, InvalidWindow, Point, Polygon, Segment};

/// Counts come from the text, so storage grows with lines actually read.
const PREALLOCATE_LIMIT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("input is empty, expected a count on the first line")]
    MissingCount,
    #[error("line {line}: invalid count `{text}`")]
    InvalidCount { line: usize, text: String },
    #[error("expected {expected} {what} lines, found {found}")]
    MissingLines {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: expected {expected} numbers, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid number `{text}`")]
    InvalidNumber { line: usize, text: String },
    #[error("line {line}: {source}")]
    InvalidWindow { line: usize, source: InvalidWindow },
    #[error("line {line}: unexpected trailing content")]
    TrailingContent { line: usize },
}

/// Parsed segment list with its clip window.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentInput {
    pub segments: Vec<Segment>,
    pub window: ClipWindow,
}

/// Parsed subject polygon with the region it is clipped against.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonInput {
    pub subject: Polygon,
    pub region: ClipRegion,
}

pub fn parse_segments(text: &str) -> Result<SegmentInput, ParseError> {
    let mut lines = Lines::new(text);
    let count = lines.count()?;

    let mut segments = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
    for found in 0..count {
        let (line, fields) = lines.next_line().ok_or(ParseError::MissingLines {
            what: "segment",
            expected: count,
            found,
        })?;
        let [x1, y1, x2, y2] = numbers::<4>(line, fields)?;
        trace!("line {line}: segment ({x1}, {y1}) -> ({x2}, {y2})");
        segments.push(Segment::from_coords(x1, y1, x2, y2));
    }

    let window = match lines.next_line() {
        Some((line, fields)) => parse_window(line, fields)?,
        None => ClipWindow::default(),
    };
    lines.finish()?;

    debug!("parsed {} segments, clip window {:?}", segments.len(), window);
    Ok(SegmentInput { segments, window })
}

pub fn parse_polygon(text: &str) -> Result<PolygonInput, ParseError> {
    let mut lines = Lines::new(text);
    let subject = Polygon::closed(lines.vertices("subject vertex")?);

    let region = match lines.peek_field_count() {
        None => ClipRegion::default(),
        Some(1) => ClipRegion::Convex(Polygon::closed(lines.vertices("clip vertex")?)),
        Some(_) => {
            let (line, fields) = lines.next_line().ok_or(ParseError::MissingCount)?;
            ClipRegion::Window(parse_window(line, fields)?)
        }
    };
    lines.finish()?;

    debug!("parsed polygon with {} vertices against {}", subject.len(), region);
    Ok(PolygonInput { subject, region })
}

impl FromStr for SegmentInput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_segments(s)
    }
}

impl FromStr for PolygonInput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polygon(s)
    }
}

/// Non-blank lines with 1-based line numbers, split into fields.
struct Lines<'a> {
    inner: std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate().peekable(),
        }
    }

    fn skip_blank(&mut self) {
        while self
            .inner
            .next_if(|(_, l)| l.trim().is_empty())
            .is_some()
        {}
    }

    fn next_line(&mut self) -> Option<(usize, Vec<&'a str>)> {
        self.skip_blank();
        self.inner
            .next()
            .map(|(i, l)| (i + 1, l.split_whitespace().collect()))
    }

    fn peek_field_count(&mut self) -> Option<usize> {
        self.skip_blank();
        self.inner.peek().map(|(_, l)| l.split_whitespace().count())
    }

    fn count(&mut self) -> Result<usize, ParseError> {
        let (line, fields) = self.next_line().ok_or(ParseError::MissingCount)?;
        match fields.as_slice() {
            [single] => single.parse().map_err(|_| ParseError::InvalidCount {
                line,
                text: single.to_string(),
            }),
            _ => Err(ParseError::InvalidCount {
                line,
                text: fields.join(" "),
            }),
        }
    }

    fn vertices(&mut self, what: &'static str) -> Result<Vec<Point>, ParseError> {
        let count = self.count()?;
        let mut vertices = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
        for found in 0..count {
            let (line, fields) = self.next_line().ok_or(ParseError::MissingLines {
                what,
                expected: count,
                found,
            })?;
            let [x, y] = numbers::<2>(line, fields)?;
            vertices.push(Point::new(x, y));
        }
        Ok(vertices)
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.next_line() {
            Some((line, _)) => Err(ParseError::TrailingContent { line }),
            None => Ok(()),
        }
    }
}

fn numbers<const N: usize>(line: usize, fields: Vec<&str>) -> Result<[f64; N], ParseError> {
    if fields.len() != N {
        return Err(ParseError::FieldCount {
            line,
            expected: N,
            found: fields.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, text) in out.iter_mut().zip(fields) {
        *slot = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                line,
                text: text.to_string(),
            })?;
    }
    Ok(out)
}

fn parse_window(line: usize, fields: Vec<&str>) -> Result<ClipWindow, ParseError> {
    let [xmin, ymin, xmax, ymax] = numbers::<4>(line, fields)?;
    ClipWindow::try_new(xmin, ymin, xmax, ymax)
        .map_err(|source| ParseError::InvalidWindow { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_with_explicit_window() {
        let input = parse_segments("2\n-15 -5 15 10\n0 0 1.5 2\n-8 -8 8 8\n").unwrap();
        assert_eq!(input.segments.len(), 2);
        assert_eq!(input.segments[0], Segment::from_coords(-15.0, -5.0, 15.0, 10.0));
        assert_eq!(input.segments[1].p2, Point::new(1.5, 2.0));
        assert_eq!(input.window, ClipWindow::new(-8.0, -8.0, 8.0, 8.0));
    }

    #[test]
    fn window_defaults_when_omitted() {
        let input: SegmentInput = "1\n0 0 3 4".parse().unwrap();
        assert_eq!(input.window, ClipWindow::default());
    }

    #[test]
    fn blank_lines_and_extra_spacing_are_ignored() {
        let input = parse_segments("\n 1 \n\n  0\t0   3 4  \n\n").unwrap();
        assert_eq!(input.segments, vec![Segment::from_coords(0.0, 0.0, 3.0, 4.0)]);
    }

    #[test]
    fn zero_segments_is_valid() {
        let input = parse_segments("0\n").unwrap();
        assert!(input.segments.is_empty());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_segments(""), Err(ParseError::MissingCount));
        assert_eq!(parse_segments("  \n\n"), Err(ParseError::MissingCount));
    }

    #[test]
    fn bad_count_is_reported_with_line() {
        assert_eq!(
            parse_segments("two\n"),
            Err(ParseError::InvalidCount {
                line: 1,
                text: "two".into()
            })
        );
        assert!(matches!(
            parse_segments("-1\n"),
            Err(ParseError::InvalidCount { line: 1, .. })
        ));
    }

    #[test]
    fn short_input_is_an_error() {
        assert_eq!(
            parse_segments("3\n0 0 1 1\n"),
            Err(ParseError::MissingLines {
                what: "segment",
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn huge_count_without_lines_is_an_error() {
        assert_eq!(
            parse_segments("1000000000000000000\n0 0 1 1\n"),
            Err(ParseError::MissingLines {
                what: "segment",
                expected: 1_000_000_000_000_000_000,
                found: 1
            })
        );
        assert!(matches!(
            parse_polygon("18446744073709551615\n0 0\n"),
            Err(ParseError::MissingLines { what: "subject vertex", found: 1, .. })
        ));
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        assert_eq!(
            parse_segments("1\n0 0 1\n"),
            Err(ParseError::FieldCount {
                line: 2,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn non_numeric_and_non_finite_fields_are_errors() {
        assert_eq!(
            parse_segments("1\n0 0 x 1\n"),
            Err(ParseError::InvalidNumber {
                line: 2,
                text: "x".into()
            })
        );
        assert!(matches!(
            parse_segments("1\n0 0 NaN 1\n"),
            Err(ParseError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn inverted_window_is_an_error() {
        let err = parse_segments("1\n0 0 1 1\n5 0 -5 10\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidWindow { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3: clip window is inverted"));
    }

    #[test]
    fn trailing_content_is_an_error() {
        assert_eq!(
            parse_segments("1\n0 0 1 1\n-1 -1 1 1\n9\n"),
            Err(ParseError::TrailingContent { line: 4 })
        );
    }

    #[test]
    fn polygon_with_window() {
        let input = parse_polygon("4\n-6 -4\n-6 6\n6 6\n6 -4\n0 0 20 20\n").unwrap();
        assert_eq!(input.subject.len(), 4);
        assert!(input.subject.is_closed());
        assert_eq!(
            input.region,
            ClipRegion::Window(ClipWindow::new(0.0, 0.0, 20.0, 20.0))
        );
    }

    #[test]
    fn polygon_with_default_window() {
        let input: PolygonInput = "3\n-5 -5\n0 8\n5 -5\n".parse().unwrap();
        assert_eq!(input.region, ClipRegion::default());
    }

    #[test]
    fn polygon_with_convex_clip_polygon() {
        let input = parse_polygon("3\n-5 -5\n0 8\n5 -5\n4\n-2 -2\n2 -2\n2 2\n-2 2\n").unwrap();
        match input.region {
            ClipRegion::Convex(clip) => {
                assert_eq!(clip.len(), 4);
                assert_eq!(clip.vertices()[2], Point::new(2.0, 2.0));
            }
            other => panic!("expected convex region, got {other:?}"),
        }
    }

    #[test]
    fn polygon_with_short_clip_polygon_is_an_error() {
        assert_eq!(
            parse_polygon("1\n0 0\n3\n1 1\n"),
            Err(ParseError::MissingLines {
                what: "clip vertex",
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn polygon_region_line_with_wrong_width_is_an_error() {
        assert_eq!(
            parse_polygon("1\n0 0\n1 2 3\n"),
            Err(ParseError::FieldCount {
                line: 3,
                expected: 4,
                found: 3
            })
        );
    }
}
