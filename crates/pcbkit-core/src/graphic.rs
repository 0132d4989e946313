use serde::{Deserialize, Serialize};

use crate::footprint::FootprintId;
use crate::geometry::{union_all, BBox, Coord, Orientation, Point};
use crate::layer::Layer;

/// Outline of a footprint drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphicShape {
    Segment { start: Point, end: Point },
    Circle { center: Point, radius: Coord },
    Polygon { points: Vec<Point> },
}

impl GraphicShape {
    fn map_points(&self, f: impl Fn(Point) -> Point) -> GraphicShape {
        match self {
            GraphicShape::Segment { start, end } => GraphicShape::Segment {
                start: f(*start),
                end: f(*end),
            },
            GraphicShape::Circle { center, radius } => GraphicShape::Circle {
                center: f(*center),
                radius: *radius,
            },
            GraphicShape::Polygon { points } => GraphicShape::Polygon {
                points: points.iter().map(|p| f(*p)).collect(),
            },
        }
    }

    fn outline_bbox(&self) -> Option<BBox> {
        match self {
            GraphicShape::Segment { start, end } => Some(BBox::new(*start, *end)),
            GraphicShape::Circle { center, radius } => {
                Some(BBox::at_point(*center).inflate(*radius))
            }
            GraphicShape::Polygon { points } => BBox::from_points(points),
        }
    }
}

/// A silkscreen, fab, or courtyard drawing owned by a footprint.
///
/// `shape` is in the footprint frame; the board-frame copy is maintained by
/// the owning footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub shape: GraphicShape,
    pub width: Coord,
    pub layer: Layer,
    board_shape: GraphicShape,
    parent: Option<FootprintId>,
}

impl Graphic {
    pub fn new(shape: GraphicShape, width: Coord, layer: Layer) -> Self {
        Self {
            board_shape: shape.clone(),
            shape,
            width,
            layer,
            parent: None,
        }
    }

    pub fn segment(start: Point, end: Point, width: Coord, layer: Layer) -> Self {
        Self::new(GraphicShape::Segment { start, end }, width, layer)
    }

    pub fn circle(center: Point, radius: Coord, width: Coord, layer: Layer) -> Self {
        Self::new(GraphicShape::Circle { center, radius }, width, layer)
    }

    pub fn polygon(points: Vec<Point>, width: Coord, layer: Layer) -> Self {
        Self::new(GraphicShape::Polygon { points }, width, layer)
    }

    /// Shape in board coordinates.
    pub fn board_shape(&self) -> &GraphicShape {
        &self.board_shape
    }

    pub fn parent(&self) -> Option<FootprintId> {
        self.parent
    }

    /// Extent including half the stroke width. `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<BBox> {
        self.board_shape
            .outline_bbox()
            .map(|bb| bb.inflate(self.width / 2))
    }

    pub(crate) fn set_parent(&mut self, parent: Option<FootprintId>) {
        self.parent = parent;
    }

    pub(crate) fn sync(&mut self, anchor: Point, orientation: Orientation) {
        self.board_shape = self.shape.map_points(|p| anchor + p.rotate(orientation));
    }

    pub(crate) fn translate(&mut self, delta: Point) {
        self.board_shape = self.board_shape.map_points(|p| p + delta);
    }

    pub(crate) fn flip_local(&mut self) {
        self.shape = self.shape.map_points(|p| Point::new(p.x, -p.y));
        self.layer = self.layer.flipped();
    }
}

/// Union of the extents of several drawings.
pub fn graphics_bbox<'a, I>(graphics: I) -> Option<BBox>
where
    I: IntoIterator<Item = &'a Graphic>,
{
    union_all(graphics.into_iter().filter_map(Graphic::bounding_box))
}
