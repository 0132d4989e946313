use serde::{Deserialize, Serialize};

use crate::footprint::FootprintId;
use crate::geometry::{
    normalize_orientation, rotated_rect_bbox, BBox, Coord, Orientation, Point, Size,
};
use crate::layer::LayerSet;
use crate::netclass::ZoneConnection;

/// Copper outline of a pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadShape {
    /// Diameter is `size.width`.
    #[default]
    Circle,
    Rect,
    /// Stadium whose straight sides run along the longer dimension.
    Oval,
}

/// An electrical connection point of a footprint.
///
/// `pos0` and `orient0` are expressed in the footprint frame (unrotated,
/// front side). The board-frame position and orientation are owned by the
/// footprint and refreshed whenever it moves, rotates, or flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    pub name: String,
    pub shape: PadShape,
    pub size: Size,
    /// Zero for surface-mount pads.
    pub drill: Size,
    pub pos0: Point,
    pub orient0: Orientation,
    pub layers: LayerSet,
    pub net_name: String,
    pub local_clearance: Coord,
    pub local_solder_mask_margin: Coord,
    pub local_solder_paste_margin: Coord,
    pub local_solder_paste_margin_ratio: f64,
    pub zone_connection: ZoneConnection,
    position: Point,
    orientation: Orientation,
    parent: Option<FootprintId>,
}

impl Pad {
    pub fn new(name: &str, shape: PadShape, size: Size, layers: LayerSet) -> Self {
        Self {
            name: name.to_string(),
            shape,
            size,
            drill: Size::default(),
            pos0: Point::ORIGIN,
            orient0: 0,
            layers,
            net_name: String::new(),
            local_clearance: 0,
            local_solder_mask_margin: 0,
            local_solder_paste_margin: 0,
            local_solder_paste_margin_ratio: 0.0,
            zone_connection: ZoneConnection::Inherited,
            position: Point::ORIGIN,
            orientation: 0,
            parent: None,
        }
    }

    /// Rectangular front-side surface-mount pad.
    pub fn smd(name: &str, size: Size) -> Self {
        Self::new(name, PadShape::Rect, size, LayerSet::SMD_FRONT)
    }

    /// Round plated through-hole pad.
    pub fn through_hole(name: &str, diameter: Coord, drill: Coord) -> Self {
        let mut pad = Self::new(
            name,
            PadShape::Circle,
            Size::square(diameter),
            LayerSet::THROUGH_HOLE,
        );
        pad.drill = Size::square(drill);
        pad
    }

    pub fn at(mut self, pos0: Point) -> Self {
        self.pos0 = pos0;
        self.position = pos0;
        self
    }

    pub fn with_orientation(mut self, orient0: Orientation) -> Self {
        self.orient0 = normalize_orientation(orient0);
        self.orientation = self.orient0;
        self
    }

    pub fn with_shape(mut self, shape: PadShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_net(mut self, net_name: &str) -> Self {
        self.net_name = net_name.to_string();
        self
    }

    /// Board-frame center.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Board-frame orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Footprint that owns this pad, if any.
    pub fn parent(&self) -> Option<FootprintId> {
        self.parent
    }

    pub fn is_on_layers(&self, mask: LayerSet) -> bool {
        self.layers.intersects(mask)
    }

    pub fn bounding_box(&self) -> BBox {
        match self.shape {
            PadShape::Circle => BBox::at_point(self.position).inflate(self.size.width / 2),
            PadShape::Rect => rotated_rect_bbox(self.position, self.size, self.orientation),
            PadShape::Oval => {
                let (a, b, radius) = self.oval_spine();
                BBox::new(a + self.position, b + self.position).inflate(radius)
            }
        }
    }

    /// True when `point` falls on the pad copper.
    pub fn hit_test(&self, point: Point) -> bool {
        // Bring the point into the pad's own unrotated frame.
        let (lx, ly) = (point - self.position).rotate_unrounded(-self.orientation);
        match self.shape {
            PadShape::Circle => lx.hypot(ly) <= (self.size.width / 2) as f64,
            PadShape::Rect => {
                2.0 * lx.abs() <= self.size.width as f64
                    && 2.0 * ly.abs() <= self.size.height as f64
            }
            PadShape::Oval => {
                let (half_len, radius) = self.oval_dims();
                let half_len = half_len as f64;
                let (nx, ny) = if self.size.width >= self.size.height {
                    (lx.clamp(-half_len, half_len), 0.0)
                } else {
                    (0.0, ly.clamp(-half_len, half_len))
                };
                (lx - nx).hypot(ly - ny) <= radius as f64
            }
        }
    }

    /// Half length of the straight part and end radius of an oval.
    fn oval_dims(&self) -> (Coord, Coord) {
        let long = self.size.width.max(self.size.height);
        let short = self.size.width.min(self.size.height);
        ((long - short) / 2, short / 2)
    }

    /// End points of the oval's center line, board-rotated but relative to the pad center.
    fn oval_spine(&self) -> (Point, Point, Coord) {
        let (half_len, radius) = self.oval_dims();
        let end = if self.size.width >= self.size.height {
            Point::new(half_len, 0)
        } else {
            Point::new(0, half_len)
        };
        let end = end.rotate(self.orientation);
        (-end, end, radius)
    }

    pub(crate) fn set_parent(&mut self, parent: Option<FootprintId>) {
        self.parent = parent;
    }

    /// Re-derive board-frame placement from the footprint anchor.
    pub(crate) fn sync(&mut self, anchor: Point, orientation: Orientation) {
        self.position = anchor + self.pos0.rotate(orientation);
        self.orientation = normalize_orientation(normalize_orientation(self.orient0) + orientation);
    }

    pub(crate) fn translate(&mut self, delta: Point) {
        self.position = self.position + delta;
    }

    /// Mirror the local geometry to the other board side.
    pub(crate) fn flip_local(&mut self) {
        self.pos0.y = -self.pos0.y;
        self.orient0 = normalize_orientation(-normalize_orientation(self.orient0));
        self.layers = self.layers.flipped();
    }
}
