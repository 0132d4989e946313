use serde::{Deserialize, Serialize};

use crate::geometry::{normalize_orientation, rotated_rect_bbox, BBox, Coord, Orientation, Point, Size};
use crate::layer::Layer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKind {
    Reference,
    Value,
}

/// A designator text attached to a footprint's coordinate frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintText {
    pub kind: TextKind,
    pub text: String,
    pub pos0: Point,
    pub orient0: Orientation,
    /// Glyph cell size.
    pub size: Size,
    pub thickness: Coord,
    pub mirrored: bool,
    pub visible: bool,
    pub layer: Layer,
    position: Point,
    orientation: Orientation,
}

impl FootprintText {
    pub fn new(kind: TextKind, text: &str, size: Size, thickness: Coord) -> Self {
        Self {
            kind,
            text: text.to_string(),
            pos0: Point::ORIGIN,
            orient0: 0,
            size,
            thickness,
            mirrored: false,
            visible: true,
            layer: Layer::FrontSilkscreen,
            position: Point::ORIGIN,
            orientation: 0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Estimated from one glyph cell per character plus the stroke.
    pub fn bounding_box(&self) -> BBox {
        let chars = self.text.chars().count() as Coord;
        let extent = Size::new(
            chars * self.size.width + self.thickness,
            self.size.height + self.thickness,
        );
        rotated_rect_bbox(self.position, extent, self.orientation)
    }

    pub(crate) fn sync(&mut self, anchor: Point, orientation: Orientation) {
        self.position = anchor + self.pos0.rotate(orientation);
        self.orientation = normalize_orientation(normalize_orientation(self.orient0) + orientation);
    }

    pub(crate) fn translate(&mut self, delta: Point) {
        self.position = self.position + delta;
    }

    pub(crate) fn flip_local(&mut self) {
        self.pos0.y = -self.pos0.y;
        self.orient0 = normalize_orientation(-normalize_orientation(self.orient0));
        self.layer = self.layer.flipped();
        self.mirrored = self.layer.is_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_scales_with_length() {
        let mut t = FootprintText::new(TextKind::Reference, "R12", Size::new(100, 120), 10);
        t.sync(Point::ORIGIN, 0);
        let bb = t.bounding_box();
        assert_eq!(bb.width(), 310);
        assert_eq!(bb.height(), 130);
        assert_eq!(bb.center(), Point::ORIGIN);
    }

    #[test]
    fn test_rotated_text_bbox() {
        let mut t = FootprintText::new(TextKind::Value, "10k", Size::new(100, 100), 0);
        t.sync(Point::new(0, 0), 900);
        let bb = t.bounding_box();
        assert_eq!(bb.width(), 100);
        assert_eq!(bb.height(), 300);
    }

    #[test]
    fn test_flip_sets_mirror_from_layer() {
        let mut t = FootprintText::new(TextKind::Value, "10k", Size::new(100, 100), 0);
        t.pos0 = Point::new(0, 250);
        t.flip_local();
        assert_eq!(t.layer, Layer::BackSilkscreen);
        assert!(t.mirrored);
        assert_eq!(t.pos0, Point::new(0, -250));
        t.flip_local();
        assert!(!t.mirrored);
        assert_eq!(t.layer, Layer::FrontSilkscreen);
    }
}
