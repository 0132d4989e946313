//! # PCBKit Core
//!
//! Footprint data model for printed-circuit-board design: pads, drawings,
//! designator texts, and 3D model references held together in one
//! placeable composite, plus the board context it lives in.
//!
//! Coordinates are integer board units, angles tenths of a degree.

pub mod board;
pub mod collection;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod graphic;
pub mod interfaces;
pub mod layer;
pub mod libname;
pub mod library;
pub mod model3d;
pub mod netclass;
pub mod pad;
pub mod settings;
pub mod spatial;
pub mod text;

pub use board::{Board, BoardId};
pub use collection::{ItemHandle, ItemList};
pub use error::CoreError;
pub use footprint::{Footprint, FootprintAttributes, FootprintId, FootprintStatus};
pub use geometry::{BBox, Coord, Orientation, Point, Size};
pub use graphic::{Graphic, GraphicShape};
pub use interfaces::{DrawMode, FootprintLibrary, Model3dViewer, NetClassResolver, RenderSurface};
pub use layer::{BoardSide, Layer, LayerSet};
pub use libname::{is_lib_name_valid, lib_name_invalid_chars, validate_lib_name};
pub use library::MemoryLibrary;
pub use model3d::{Model3D, Vector3};
pub use netclass::{NetClass, NetClasses, ZoneConnection};
pub use pad::{Pad, PadShape};
pub use settings::DesignSettings;
pub use text::{FootprintText, TextKind};
