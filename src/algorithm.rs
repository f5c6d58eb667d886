//! Algorithm selection by stable external name.
//!
//! Front ends name algorithms with the strings `"step"`, `"dda"`,
//! `"bresenham_line"`, `"bresenham_circle"`, `"liang_barsky"`,
//! `"sutherland_hodgman"` and `"cyrus_beck"`. [`Algorithm`] turns those
//! names into a tag once, at the edge; everything past that point matches
//! on the tag.

use std::str::FromStr;

use thiserror::Error;

use crate::raster::LineAlgorithm;

/// Available algorithms, grouped by [`Family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    StepByStep,
    Dda,
    BresenhamLine,
    BresenhamCircle,
    LiangBarsky,
    SutherlandHodgman,
    CyrusBeck,
}

/// What an algorithm consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Endpoints to pixels
    Line,
    /// Center and radius to pixels
    Circle,
    /// Segment and window to clipped segment
    SegmentClip,
    /// Polygon and region to clipped polygon
    PolygonClip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{name}` (expected one of: {})", Algorithm::names().join(", "))]
pub struct UnknownAlgorithm {
    pub name: String,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::StepByStep,
        Algorithm::Dda,
        Algorithm::BresenhamLine,
        Algorithm::BresenhamCircle,
        Algorithm::LiangBarsky,
        Algorithm::SutherlandHodgman,
        Algorithm::CyrusBeck,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::StepByStep => "step",
            Algorithm::Dda => "dda",
            Algorithm::BresenhamLine => "bresenham_line",
            Algorithm::BresenhamCircle => "bresenham_circle",
            Algorithm::LiangBarsky => "liang_barsky",
            Algorithm::SutherlandHodgman => "sutherland_hodgman",
            Algorithm::CyrusBeck => "cyrus_beck",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Algorithm::StepByStep | Algorithm::Dda | Algorithm::BresenhamLine => Family::Line,
            Algorithm::BresenhamCircle => Family::Circle,
            Algorithm::LiangBarsky => Family::SegmentClip,
            Algorithm::SutherlandHodgman | Algorithm::CyrusBeck => Family::PolygonClip,
        }
    }

    /// The line rasterizer for this tag, if it names one.
    pub const fn line(self) -> Option<LineAlgorithm> {
        match self {
            Algorithm::StepByStep => Some(LineAlgorithm::StepByStep),
            Algorithm::Dda => Some(LineAlgorithm::Dda),
            Algorithm::BresenhamLine => Some(LineAlgorithm::BresenhamLine),
            _ => None,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.name()).collect()
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

impl From<LineAlgorithm> for Algorithm {
    fn from(line: LineAlgorithm) -> Self {
        match line {
            LineAlgorithm::StepByStep => Algorithm::StepByStep,
            LineAlgorithm::Dda => Algorithm::Dda,
            LineAlgorithm::BresenhamLine => Algorithm::BresenhamLine,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
