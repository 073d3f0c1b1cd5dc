//! Vertex data: points, path snapshots and the subject polygon.

use serde::{Deserialize, Serialize};

/// Integer vertex in screen space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(i16, i16)> for Point {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

/// An ordered vertex array describing one endpoint of a morph.
///
/// Two snapshots are compatible when they hold the same number of points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInfo {
    pub points: Vec<Point>,
}

impl PathInfo {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

impl From<Vec<Point>> for PathInfo {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<(i16, i16)> for PathInfo {
    fn from_iter<I: IntoIterator<Item = (i16, i16)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(Point::from).collect(),
        }
    }
}

/// A drawable closed polygon owned by the rendering side.
///
/// While a [`crate::PathAnimation`] is alive it holds the polygon's `points`
/// buffer and swaps its own working buffer in; `offset` and `rotation` stay
/// under the owner's control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    #[serde(default)]
    pub offset: Point,
    #[serde(default)]
    pub rotation: i32,
}

impl Polygon {
    /// Build a polygon from a snapshot, copying its points.
    pub fn from_info(info: &PathInfo) -> Self {
        Self {
            points: info.points.clone(),
            offset: Point::default(),
            rotation: 0,
        }
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn move_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Points translated by the polygon offset (rotation is left to the renderer).
    pub fn translated_points(&self) -> impl Iterator<Item = Point> + '_ {
        let off = self.offset;
        self.points.iter().map(move |p| Point {
            x: p.x.saturating_add(off.x),
            y: p.y.saturating_add(off.y),
        })
    }
}
