use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Board coordinate in internal units.
pub type Coord = i64;

/// Angle in tenths of a degree (900 = 90.0 degrees).
pub type Orientation = i32;

/// One full turn in tenths of a degree.
pub const FULL_TURN: Orientation = 3600;

/// Bring an angle into `[0, 3600)`.
pub fn normalize_orientation(angle: Orientation) -> Orientation {
    angle.rem_euclid(FULL_TURN)
}

fn rotate_f64(x: f64, y: f64, angle: Orientation) -> (f64, f64) {
    let (sin, cos) = (f64::from(angle) / 10.0).to_radians().sin_cos();
    (y * sin + x * cos, y * cos - x * sin)
}

/// A 2D point in board coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x) as f64).hypot((self.y - other.y) as f64)
    }

    pub fn translate(&self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Rotate about the origin.
    ///
    /// Uses the board convention (y axis pointing down, positive angles turn
    /// clockwise on screen). Quarter turns are exact; other angles round to
    /// the nearest unit, half away from zero.
    pub fn rotate(&self, angle: Orientation) -> Self {
        let (x, y) = (self.x, self.y);
        match normalize_orientation(angle) {
            0 => *self,
            900 => Self::new(y, -x),
            1800 => Self::new(-x, -y),
            2700 => Self::new(-y, x),
            a => {
                let (fx, fy) = rotate_f64(x as f64, y as f64, a);
                Self::new(fx.round() as Coord, fy.round() as Coord)
            }
        }
    }

    /// Same turn as [`Point::rotate`], without rounding back onto the grid.
    pub fn rotate_unrounded(&self, angle: Orientation) -> (f64, f64) {
        match normalize_orientation(angle) {
            a if a % 900 == 0 => {
                let p = self.rotate(a);
                (p.x as f64, p.y as f64)
            }
            a => rotate_f64(self.x as f64, self.y as f64, a),
        }
    }

    pub fn rotate_about(&self, center: Point, angle: Orientation) -> Self {
        (*self - center).rotate(angle) + center
    }

    /// Mirror across the horizontal line `y = axis_y`.
    pub fn mirror_y(&self, axis_y: Coord) -> Self {
        Self::new(self.x, axis_y - (self.y - axis_y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.translate(rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Width and height of a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: Coord,
    pub height: Coord,
}

impl Size {
    pub fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub fn square(side: Coord) -> Self {
        Self::new(side, side)
    }

    pub fn min_dimension(&self) -> Coord {
        self.width.min(self.height)
    }
}

/// An axis-aligned bounding box. `min` never exceeds `max` on either axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A zero-sized box sitting on `p`.
    pub fn at_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::at_point(*first), |bb, p| bb.merge_point(*p)))
    }

    pub fn width(&self) -> Coord {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> Coord {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn area(&self) -> f64 {
        self.width() as f64 * self.height() as f64
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2,
            (self.min.y + self.max.y) / 2,
        )
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True when `other` lies entirely inside this box (edges included).
    pub fn contains(&self, other: &BBox) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    pub fn intersects(&self, other: &BBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn merge_point(&self, p: Point) -> Self {
        self.union(&Self::at_point(p))
    }

    pub fn translate(&self, delta: Point) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Grow by `amount` on every side; negative amounts shrink down to the center.
    pub fn inflate(&self, amount: Coord) -> Self {
        let dx = amount.max(-(self.width() / 2));
        let dy = amount.max(-(self.height() / 2));
        Self {
            min: Point::new(self.min.x - dx, self.min.y - dy),
            max: Point::new(self.max.x + dx, self.max.y + dy),
        }
    }
}

/// Union of an iterator of boxes, `None` when empty.
pub fn union_all<I>(boxes: I) -> Option<BBox>
where
    I: IntoIterator<Item = BBox>,
{
    boxes.into_iter().reduce(|acc, bb| acc.union(&bb))
}

/// Bounding box of a `size` rectangle centered on `center` and turned by `angle`.
pub fn rotated_rect_bbox(center: Point, size: Size, angle: Orientation) -> BBox {
    let hw = size.width / 2;
    let hh = size.height / 2;
    let local = [
        Point::new(-hw, -hh),
        Point::new(hw, -hh),
        Point::new(hw, hh),
        Point::new(-hw, hh),
    ];
    let corners = local.map(|p| p.rotate(angle) + center);
    BBox::from_points(&corners).unwrap_or_else(|| BBox::at_point(center))
}
