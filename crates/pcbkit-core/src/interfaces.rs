//! Seams to the collaborators that live outside the data model: drawing,
//! 3D preview, net-class rules, and footprint library storage.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::footprint::Footprint;
use crate::geometry::{Coord, Orientation, Point};
use crate::graphic::Graphic;
use crate::layer::BoardSide;
use crate::model3d::Model3D;
use crate::netclass::ZoneConnection;
use crate::pad::Pad;
use crate::text::FootprintText;

/// Raster operation requested from the render surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    Copy,
    Or,
    Xor,
    Highlight,
}

/// Something footprints can be painted onto.
pub trait RenderSurface {
    fn draw_pad(&mut self, pad: &Pad, offset: Point, mode: DrawMode);
    fn draw_graphic(&mut self, graphic: &Graphic, offset: Point, mode: DrawMode);
    fn draw_text(&mut self, text: &FootprintText, offset: Point, mode: DrawMode);
    /// Cross-hair marking a footprint anchor.
    fn draw_anchor(&mut self, position: Point, size: Coord, mode: DrawMode);
}

/// 3D preview canvas.
pub trait Model3dViewer {
    fn render_model(
        &mut self,
        anchor: Point,
        orientation: Orientation,
        side: BoardSide,
        model: &Model3D,
    );
}

/// Supplies the board-level values used when a local override is zero.
pub trait NetClassResolver {
    fn clearance(&self, net_name: &str) -> Coord;
    fn solder_mask_margin(&self) -> Coord;
    fn solder_paste_margin(&self) -> Coord;
    fn solder_paste_margin_ratio(&self) -> f64;
    fn thermal_width(&self) -> Coord;
    fn thermal_gap(&self) -> Coord;

    fn zone_connection(&self) -> ZoneConnection {
        ZoneConnection::Thermal
    }
}

/// Footprint storage keyed by library reference name.
pub trait FootprintLibrary {
    fn load(&self, lib_ref: &str) -> Option<Footprint>;
    fn save(&mut self, footprint: &Footprint) -> Result<(), CoreError>;
    fn remove(&mut self, lib_ref: &str) -> Result<Footprint, CoreError>;
    fn names(&self) -> Vec<String>;
}
