//! Data points and their plain-text persistence format.
//!
//! A point file holds one point per line as two whitespace-separated integers:
//!
//! ```text
//! -10 -10
//! 0 0
//! 10 10
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Minimum number of points required before a fit may start.
pub const MIN_POINTS: usize = 3;

/// A point in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: Point) -> i64 {
        let dx = (self.x as i64) - (other.x as i64);
        let dy = (self.y as i64) - (other.y as i64);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Ordered collection of data points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn remove(&mut self, index: usize) -> Option<Point> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Index of the point closest to `target`, if it lies within `radius`.
    pub fn nearest(&self, target: Point, radius: u32) -> Option<usize> {
        let limit = (radius as i64) * (radius as i64);
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance_squared(target)))
            .min_by_key(|&(_, d)| d)
            .filter(|&(_, d)| d <= limit)
            .map(|(i, _)| i)
    }

    /// Caller-side guard run before starting a fit.
    pub fn ensure_startable(&self) -> Result<(), PointSetError> {
        if self.points.len() < MIN_POINTS {
            return Err(PointSetError::TooFewPoints {
                found: self.points.len(),
                required: MIN_POINTS,
            });
        }
        Ok(())
    }

    /// Parse the plain-text point format. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, PointSetError> {
        let mut points = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parse_error = || PointSetError::Parse {
                line: i + 1,
                content: trimmed.to_string(),
            };

            let mut fields = trimmed.split_whitespace();
            let x = fields
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(parse_error)?;
            let y = fields
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(parse_error)?;
            if fields.next().is_some() {
                return Err(parse_error());
            }

            points.push(Point::new(x, y));
        }

        Ok(Self { points })
    }

    /// Render the point set in the plain-text format.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 12);
        for p in &self.points {
            out.push_str(&format!("{} {}\n", p.x, p.y));
        }
        out
    }

    /// Load a point file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PointSetError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Save the point set, overwriting any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PointSetError> {
        fs::write(path, self.to_text())?;
        Ok(())
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Point set loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum PointSetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: expected two integers, got {content:?}")]
    Parse { line: usize, content: String },
    #[error("The number of points must be at least {required}, got {found}")]
    TooFewPoints { found: usize, required: usize },
}
