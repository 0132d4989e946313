use std::time::{SystemTime, UNIX_EPOCH};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;
use crate::collection::{ItemHandle, ItemList};
use crate::geometry::{normalize_orientation, union_all, BBox, Coord, Orientation, Point, Size};
use crate::graphic::{graphics_bbox, Graphic};
use crate::interfaces::{DrawMode, Model3dViewer, NetClassResolver, RenderSurface};
use crate::layer::{BoardSide, Layer, LayerSet};
use crate::libname;
use crate::model3d::Model3D;
use crate::netclass::{inherit, inherit_ratio, ZoneConnection};
use crate::pad::Pad;
use crate::settings::DesignSettings;
use crate::text::{FootprintText, TextKind};

/// Unique footprint identifier.
pub type FootprintId = Uuid;

bitflags! {
    /// Placement state consumed by the autoplacer and interactive tools.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FootprintStatus: u8 {
        /// No autoplacement or interactive moves allowed.
        const LOCKED = 0x01;
        /// Placed by the autoplacer.
        const PLACED = 0x02;
        /// Waiting for the autoplacer.
        const TO_PLACE = 0x04;
    }
}

bitflags! {
    /// Footprint classification, OR-combined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FootprintAttributes: u8 {
        /// Listed for automatic insertion (usually SMD parts).
        const SMD = 0x01;
        /// Made of board copper only, nothing to buy or mount.
        const VIRTUAL = 0x02;
    }
}

impl FootprintAttributes {
    pub const DEFAULT: FootprintAttributes = FootprintAttributes::empty();
}

/// Upper bound of the autoplacer rotation costs.
pub const MAX_PLACEMENT_COST: u8 = 10;

/// Link to the owning board. Copies of a footprint start detached.
#[derive(Debug, Default, PartialEq, Eq)]
struct ParentLink(Option<BoardId>);

impl Clone for ParentLink {
    fn clone(&self) -> Self {
        Self(None)
    }
}

/// A component placement: pads, drawings, designator texts, and 3D models
/// positioned together on one side of the board.
///
/// Owned items are kept in the footprint frame and re-derived into board
/// coordinates by every transform, so the bounding box and surface area are
/// never stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footprint {
    id: FootprintId,
    #[serde(skip)]
    parent: ParentLink,

    lib_ref: String,
    description: String,
    keywords: String,
    path: String,

    position: Point,
    orientation: Orientation,
    side: BoardSide,

    reference: FootprintText,
    value: FootprintText,
    pads: ItemList<Pad>,
    graphics: ItemList<Graphic>,
    models: ItemList<Model3D>,

    status: FootprintStatus,
    attributes: FootprintAttributes,
    placement_cost_90: u8,
    placement_cost_180: u8,

    local_clearance: Coord,
    local_solder_mask_margin: Coord,
    local_solder_paste_margin: Coord,
    local_solder_paste_margin_ratio: f64,
    zone_connection: ZoneConnection,
    thermal_width: Coord,
    thermal_gap: Coord,

    last_edit_time: i64,
    link: i64,
    flag: i32,

    bounding_box: BBox,
    surface: f64,
}

impl Footprint {
    pub fn new(lib_ref: &str) -> Self {
        Self::with_settings(lib_ref, &DesignSettings::default())
    }

    /// New detached footprint at the origin, texts sized from `settings`.
    pub fn with_settings(lib_ref: &str, settings: &DesignSettings) -> Self {
        let mut footprint = Self {
            id: Uuid::new_v4(),
            parent: ParentLink::default(),
            lib_ref: lib_ref.to_string(),
            description: String::new(),
            keywords: String::new(),
            path: String::new(),
            position: Point::ORIGIN,
            orientation: 0,
            side: BoardSide::Front,
            reference: FootprintText::new(
                TextKind::Reference,
                "",
                settings.text_size,
                settings.text_thickness,
            ),
            value: FootprintText::new(
                TextKind::Value,
                "",
                settings.text_size,
                settings.text_thickness,
            ),
            pads: ItemList::new(),
            graphics: ItemList::new(),
            models: ItemList::new(),
            status: FootprintStatus::empty(),
            attributes: FootprintAttributes::DEFAULT,
            placement_cost_90: 0,
            placement_cost_180: 0,
            local_clearance: 0,
            local_solder_mask_margin: 0,
            local_solder_paste_margin: 0,
            local_solder_paste_margin_ratio: 0.0,
            zone_connection: ZoneConnection::Inherited,
            thermal_width: 0,
            thermal_gap: 0,
            last_edit_time: 0,
            link: 0,
            flag: 0,
            bounding_box: BBox::at_point(Point::ORIGIN),
            surface: 0.0,
        };
        footprint.calculate_bounding_box();
        footprint
    }

    /// Deep copy with a fresh identity.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy.adopt_children();
        copy
    }

    // ── Identity ─────────────────────────────────────────────────────

    pub fn id(&self) -> FootprintId {
        self.id
    }

    pub fn parent(&self) -> Option<BoardId> {
        self.parent.0
    }

    pub(crate) fn set_parent(&mut self, parent: Option<BoardId>) {
        self.parent = ParentLink(parent);
    }

    pub fn lib_ref(&self) -> &str {
        &self.lib_ref
    }

    pub fn set_lib_ref(&mut self, lib_ref: &str) {
        self.lib_ref = lib_ref.to_string();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn set_keywords(&mut self, keywords: &str) {
        self.keywords = keywords.to_string();
    }

    /// Hierarchical sheet path of the schematic symbol.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    pub fn reference(&self) -> &str {
        &self.reference.text
    }

    pub fn set_reference(&mut self, reference: &str) {
        self.edit_reference(|t| t.text = reference.to_string());
    }

    pub fn value(&self) -> &str {
        &self.value.text
    }

    pub fn set_value(&mut self, value: &str) {
        self.edit_value(|t| t.text = value.to_string());
    }

    pub fn reference_text(&self) -> &FootprintText {
        &self.reference
    }

    pub fn value_text(&self) -> &FootprintText {
        &self.value
    }

    pub fn edit_reference<R>(&mut self, f: impl FnOnce(&mut FootprintText) -> R) -> R {
        let result = f(&mut self.reference);
        self.reference.sync(self.position, self.orientation);
        self.calculate_bounding_box();
        result
    }

    pub fn edit_value<R>(&mut self, f: impl FnOnce(&mut FootprintText) -> R) -> R {
        let result = f(&mut self.value);
        self.value.sync(self.position, self.orientation);
        self.calculate_bounding_box();
        result
    }

    /// Menu label, e.g. `Footprint U3 on F.Cu`.
    pub fn select_menu_text(&self) -> String {
        format!("Footprint {} on {}", self.reference(), self.layer().name())
    }

    pub fn is_lib_name_valid(name: &str) -> bool {
        libname::is_lib_name_valid(name)
    }

    pub fn lib_name_invalid_chars(user_readable: bool) -> &'static str {
        libname::lib_name_invalid_chars(user_readable)
    }

    // ── Placement ────────────────────────────────────────────────────

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.move_by(position - self.position);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Turn about the anchor to an absolute angle.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = normalize_orientation(orientation);
        self.sync_children();
        self.calculate_bounding_box();
    }

    pub fn side(&self) -> BoardSide {
        self.side
    }

    /// Copper layer of the mounting side.
    pub fn layer(&self) -> Layer {
        self.side.copper_layer()
    }

    pub fn is_flipped(&self) -> bool {
        self.side == BoardSide::Back
    }

    // ── Owned collections ────────────────────────────────────────────

    pub fn pads(&self) -> &ItemList<Pad> {
        &self.pads
    }

    pub fn pad_count(&self) -> usize {
        self.pads.len()
    }

    /// Append a pad; it takes its board position from this footprint.
    pub fn add_pad(&mut self, pad: Pad) -> ItemHandle {
        let pad = self.adopt_pad(pad);
        let handle = self.pads.append(pad);
        self.calculate_bounding_box();
        handle
    }

    /// Prepend a pad.
    pub fn insert_pad(&mut self, pad: Pad) -> ItemHandle {
        let pad = self.adopt_pad(pad);
        let handle = self.pads.insert(pad);
        self.calculate_bounding_box();
        handle
    }

    pub fn remove_pad(&mut self, handle: ItemHandle) -> Option<Pad> {
        let mut pad = self.pads.remove(handle)?;
        pad.set_parent(None);
        self.calculate_bounding_box();
        Some(pad)
    }

    pub fn pad(&self, handle: ItemHandle) -> Option<&Pad> {
        self.pads.get(handle)
    }

    /// Edit a pad's local geometry; board placement and the bounding box
    /// are refreshed afterwards.
    pub fn edit_pad<R>(&mut self, handle: ItemHandle, f: impl FnOnce(&mut Pad) -> R) -> Option<R> {
        let (position, orientation) = (self.position, self.orientation);
        let pad = self.pads.get_mut(handle)?;
        let result = f(pad);
        pad.sync(position, orientation);
        self.calculate_bounding_box();
        Some(result)
    }

    pub fn graphics(&self) -> &ItemList<Graphic> {
        &self.graphics
    }

    pub fn add_graphic(&mut self, graphic: Graphic) -> ItemHandle {
        let graphic = self.adopt_graphic(graphic);
        let handle = self.graphics.append(graphic);
        self.calculate_bounding_box();
        handle
    }

    pub fn insert_graphic(&mut self, graphic: Graphic) -> ItemHandle {
        let graphic = self.adopt_graphic(graphic);
        let handle = self.graphics.insert(graphic);
        self.calculate_bounding_box();
        handle
    }

    pub fn remove_graphic(&mut self, handle: ItemHandle) -> Option<Graphic> {
        let mut graphic = self.graphics.remove(handle)?;
        graphic.set_parent(None);
        self.calculate_bounding_box();
        Some(graphic)
    }

    pub fn edit_graphic<R>(
        &mut self,
        handle: ItemHandle,
        f: impl FnOnce(&mut Graphic) -> R,
    ) -> Option<R> {
        let (position, orientation) = (self.position, self.orientation);
        let graphic = self.graphics.get_mut(handle)?;
        let result = f(graphic);
        graphic.sync(position, orientation);
        self.calculate_bounding_box();
        Some(result)
    }

    pub fn models(&self) -> &ItemList<Model3D> {
        &self.models
    }

    /// 3D models carry no board geometry, so they may be edited freely.
    pub fn models_mut(&mut self) -> &mut ItemList<Model3D> {
        &mut self.models
    }

    pub fn add_model(&mut self, model: Model3D) -> ItemHandle {
        self.models.append(model)
    }

    pub fn remove_model(&mut self, handle: ItemHandle) -> Option<Model3D> {
        self.models.remove(handle)
    }

    fn adopt_pad(&self, mut pad: Pad) -> Pad {
        pad.set_parent(Some(self.id));
        pad.sync(self.position, self.orientation);
        pad
    }

    fn adopt_graphic(&self, mut graphic: Graphic) -> Graphic {
        graphic.set_parent(Some(self.id));
        graphic.sync(self.position, self.orientation);
        graphic
    }

    fn adopt_children(&mut self) {
        let id = Some(self.id);
        for pad in self.pads.iter_mut() {
            pad.set_parent(id);
        }
        for graphic in self.graphics.iter_mut() {
            graphic.set_parent(id);
        }
    }

    // ── Transforms ───────────────────────────────────────────────────

    /// Rigid translation of the footprint and everything it owns.
    pub fn move_by(&mut self, delta: Point) {
        self.position = self.position + delta;
        self.reference.translate(delta);
        self.value.translate(delta);
        for pad in self.pads.iter_mut() {
            pad.translate(delta);
        }
        for graphic in self.graphics.iter_mut() {
            graphic.translate(delta);
        }
        self.bounding_box = self.bounding_box.translate(delta);
        log::trace!("Moved footprint {} by {:?}", self.reference(), delta);
    }

    /// Rotate about `center` by `angle` tenths of a degree.
    pub fn rotate(&mut self, center: Point, angle: Orientation) {
        self.position = self.position.rotate_about(center, angle);
        self.orientation = normalize_orientation(self.orientation + normalize_orientation(angle));
        self.sync_children();
        self.calculate_bounding_box();
        log::trace!(
            "Rotated footprint {} by {} about {:?}",
            self.reference(),
            angle,
            center
        );
    }

    /// Move to the other board side, mirroring across the horizontal line
    /// through `center`.
    pub fn flip(&mut self, center: Point) {
        self.position = self.position.mirror_y(center.y);
        self.side = self.side.flipped();
        self.orientation = normalize_orientation(-self.orientation);
        self.reference.flip_local();
        self.value.flip_local();
        for pad in self.pads.iter_mut() {
            pad.flip_local();
        }
        for graphic in self.graphics.iter_mut() {
            graphic.flip_local();
        }
        self.sync_children();
        self.calculate_bounding_box();
        log::trace!("Flipped footprint {} to {:?}", self.reference(), self.side);
    }

    fn sync_children(&mut self) {
        let (position, orientation) = (self.position, self.orientation);
        self.reference.sync(position, orientation);
        self.value.sync(position, orientation);
        for pad in self.pads.iter_mut() {
            pad.sync(position, orientation);
        }
        for graphic in self.graphics.iter_mut() {
            graphic.sync(position, orientation);
        }
    }

    // ── Derived geometry ─────────────────────────────────────────────

    /// Recompute the bounding box and surface area from the owned items.
    pub fn calculate_bounding_box(&mut self) {
        let texts = self.reference.bounding_box().union(&self.value.bounding_box());
        self.bounding_box = match self.items_bbox() {
            Some(items) => items.union(&texts),
            None => texts,
        };
        self.surface = self.bounding_box.area().abs();
    }

    pub fn bounding_box(&self) -> BBox {
        self.bounding_box
    }

    /// Bounding box area.
    pub fn area(&self) -> f64 {
        self.surface
    }

    /// Extent of pads and drawings only, texts excluded. Degenerate at the
    /// anchor when the footprint owns neither.
    pub fn footprint_rect(&self) -> BBox {
        self.items_bbox()
            .unwrap_or_else(|| BBox::at_point(self.position))
    }

    fn items_bbox(&self) -> Option<BBox> {
        let pads = union_all(self.pads.iter().map(Pad::bounding_box));
        let graphics = graphics_bbox(&self.graphics);
        union_all(pads.into_iter().chain(graphics))
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.bounding_box.contains_point(&point)
    }

    /// True when `area` fully encloses the footprint.
    pub fn hit_test_rect(&self, area: &BBox) -> bool {
        area.contains(&self.bounding_box)
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// First pad named `name` in list order. Pad names need not be unique.
    pub fn find_pad_by_name(&self, name: &str) -> Option<&Pad> {
        self.pads.iter().find(|p| p.name == name)
    }

    pub fn find_pad_handle_by_name(&self, name: &str) -> Option<ItemHandle> {
        self.pads.find_handle(|p| p.name == name)
    }

    /// First pad in list order covering `position` on any layer of `layers`.
    pub fn get_pad(&self, position: Point, layers: LayerSet) -> Option<&Pad> {
        self.pads
            .iter()
            .find(|p| p.is_on_layers(layers) && p.hit_test(position))
    }

    // ── Status and attributes ────────────────────────────────────────

    pub fn status(&self) -> FootprintStatus {
        self.status
    }

    pub fn is_locked(&self) -> bool {
        self.status.contains(FootprintStatus::LOCKED)
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.status.set(FootprintStatus::LOCKED, locked);
    }

    pub fn is_placed(&self) -> bool {
        self.status.contains(FootprintStatus::PLACED)
    }

    pub fn set_placed(&mut self, placed: bool) {
        self.status.set(FootprintStatus::PLACED, placed);
    }

    pub fn needs_placed(&self) -> bool {
        self.status.contains(FootprintStatus::TO_PLACE)
    }

    pub fn set_needs_placed(&mut self, needs_placed: bool) {
        self.status.set(FootprintStatus::TO_PLACE, needs_placed);
    }

    pub fn attributes(&self) -> FootprintAttributes {
        self.attributes
    }

    pub fn set_attributes(&mut self, attributes: FootprintAttributes) {
        self.attributes = attributes;
    }

    pub fn has_attribute(&self, attribute: FootprintAttributes) -> bool {
        self.attributes.contains(attribute)
    }

    pub fn placement_cost_90(&self) -> u8 {
        self.placement_cost_90
    }

    /// Clamped to `0..=10`.
    pub fn set_placement_cost_90(&mut self, cost: u8) {
        self.placement_cost_90 = cost.min(MAX_PLACEMENT_COST);
    }

    pub fn placement_cost_180(&self) -> u8 {
        self.placement_cost_180
    }

    pub fn set_placement_cost_180(&mut self, cost: u8) {
        self.placement_cost_180 = cost.min(MAX_PLACEMENT_COST);
    }

    // ── Local overrides ──────────────────────────────────────────────

    pub fn local_clearance(&self) -> Coord {
        self.local_clearance
    }

    pub fn set_local_clearance(&mut self, clearance: Coord) {
        self.local_clearance = clearance;
    }

    pub fn local_solder_mask_margin(&self) -> Coord {
        self.local_solder_mask_margin
    }

    pub fn set_local_solder_mask_margin(&mut self, margin: Coord) {
        self.local_solder_mask_margin = margin;
    }

    pub fn local_solder_paste_margin(&self) -> Coord {
        self.local_solder_paste_margin
    }

    pub fn set_local_solder_paste_margin(&mut self, margin: Coord) {
        self.local_solder_paste_margin = margin;
    }

    pub fn local_solder_paste_margin_ratio(&self) -> f64 {
        self.local_solder_paste_margin_ratio
    }

    pub fn set_local_solder_paste_margin_ratio(&mut self, ratio: f64) {
        self.local_solder_paste_margin_ratio = ratio;
    }

    pub fn zone_connection(&self) -> ZoneConnection {
        self.zone_connection
    }

    pub fn set_zone_connection(&mut self, connection: ZoneConnection) {
        self.zone_connection = connection;
    }

    pub fn thermal_width(&self) -> Coord {
        self.thermal_width
    }

    pub fn set_thermal_width(&mut self, width: Coord) {
        self.thermal_width = width;
    }

    pub fn thermal_gap(&self) -> Coord {
        self.thermal_gap
    }

    pub fn set_thermal_gap(&mut self, gap: Coord) {
        self.thermal_gap = gap;
    }

    /// Pad clearance: pad override, then footprint override, then net class.
    pub fn pad_clearance(&self, handle: ItemHandle, rules: &dyn NetClassResolver) -> Option<Coord> {
        let pad = self.pads.get(handle)?;
        Some(inherit(pad.local_clearance, || {
            inherit(self.local_clearance, || rules.clearance(&pad.net_name))
        }))
    }

    /// Solder mask expansion of a pad. A negative margin never shrinks the
    /// opening past the pad center.
    pub fn pad_solder_mask_margin(
        &self,
        handle: ItemHandle,
        rules: &dyn NetClassResolver,
    ) -> Option<Coord> {
        let pad = self.pads.get(handle)?;
        let margin = inherit(pad.local_solder_mask_margin, || {
            inherit(self.local_solder_mask_margin, || rules.solder_mask_margin())
        });
        let floor = -(pad.size.min_dimension() / 2);
        Some(margin.max(floor))
    }

    /// Solder paste expansion of a pad per axis: absolute margin plus ratio
    /// of the pad size, never below half the pad size.
    pub fn pad_solder_paste_margin(
        &self,
        handle: ItemHandle,
        rules: &dyn NetClassResolver,
    ) -> Option<Size> {
        let pad = self.pads.get(handle)?;
        let margin = inherit(pad.local_solder_paste_margin, || {
            inherit(self.local_solder_paste_margin, || rules.solder_paste_margin())
        });
        let ratio = inherit_ratio(pad.local_solder_paste_margin_ratio, || {
            inherit_ratio(self.local_solder_paste_margin_ratio, || {
                rules.solder_paste_margin_ratio()
            })
        });
        let axis = |dim: Coord| {
            let value = margin + (dim as f64 * ratio).round() as Coord;
            value.max(-(dim / 2))
        };
        Some(Size::new(axis(pad.size.width), axis(pad.size.height)))
    }

    pub fn pad_zone_connection(
        &self,
        handle: ItemHandle,
        rules: &dyn NetClassResolver,
    ) -> Option<ZoneConnection> {
        let pad = self.pads.get(handle)?;
        Some(
            pad.zone_connection
                .or(self.zone_connection)
                .or(rules.zone_connection()),
        )
    }

    pub fn effective_thermal_width(&self, rules: &dyn NetClassResolver) -> Coord {
        inherit(self.thermal_width, || rules.thermal_width())
    }

    pub fn effective_thermal_gap(&self, rules: &dyn NetClassResolver) -> Coord {
        inherit(self.thermal_gap, || rules.thermal_gap())
    }

    // ── Timestamps and scratch state ─────────────────────────────────

    /// Unix seconds of the last edit.
    pub fn last_edit_time(&self) -> i64 {
        self.last_edit_time
    }

    pub fn set_last_edit_time(&mut self, time: i64) {
        self.last_edit_time = time;
    }

    /// Stamp the last edit time with the current clock.
    pub fn touch(&mut self) {
        self.last_edit_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
    }

    /// Opaque value the editor uses to pair a footprint with its working copy.
    pub fn link(&self) -> i64 {
        self.link
    }

    pub fn set_link(&mut self, link: i64) {
        self.link = link;
    }

    /// Scratch counter for ratsnest and routing passes.
    pub fn flag(&self) -> i32 {
        self.flag
    }

    pub fn set_flag(&mut self, flag: i32) {
        self.flag = flag;
    }

    pub fn increment_flag(&mut self) {
        self.flag += 1;
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Paint pads, visible designators, then drawings.
    pub fn draw(&self, surface: &mut dyn RenderSurface, mode: DrawMode, offset: Point) {
        for pad in &self.pads {
            surface.draw_pad(pad, offset, mode);
        }
        for text in [&self.reference, &self.value] {
            if text.visible {
                surface.draw_text(text, offset, mode);
            }
        }
        self.draw_edges_only(surface, mode, offset);
    }

    pub fn draw_edges_only(&self, surface: &mut dyn RenderSurface, mode: DrawMode, offset: Point) {
        for graphic in &self.graphics {
            surface.draw_graphic(graphic, offset, mode);
        }
    }

    pub fn draw_anchor(
        &self,
        surface: &mut dyn RenderSurface,
        offset: Point,
        size: Coord,
        mode: DrawMode,
    ) {
        surface.draw_anchor(self.position + offset, size, mode);
    }

    pub fn draw_3d(&self, viewer: &mut dyn Model3dViewer) {
        for model in &self.models {
            viewer.render_model(self.position, self.orientation, self.side, model);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Footprint {
        let mut fp = Footprint::new("R0805");
        fp.set_reference("R1");
        fp.set_value("10k");
        fp.add_pad(Pad::smd("1", Size::new(100, 120)).at(Point::new(-100, 0)));
        fp.add_pad(Pad::smd("2", Size::new(100, 120)).at(Point::new(100, 0)));
        fp.add_graphic(Graphic::segment(
            Point::new(-200, -100),
            Point::new(200, -100),
            10,
            Layer::FrontSilkscreen,
        ));
        fp
    }

    struct Rules;

    impl NetClassResolver for Rules {
        fn clearance(&self, net_name: &str) -> Coord {
            if net_name == "VCC" {
                40
            } else {
                20
            }
        }
        fn solder_mask_margin(&self) -> Coord {
            5
        }
        fn solder_paste_margin(&self) -> Coord {
            -3
        }
        fn solder_paste_margin_ratio(&self) -> f64 {
            0.0
        }
        fn thermal_width(&self) -> Coord {
            7
        }
        fn thermal_gap(&self) -> Coord {
            9
        }
    }

    #[test]
    fn test_new_footprint_defaults() {
        let fp = Footprint::new("SOIC_8");
        assert_eq!(fp.lib_ref(), "SOIC_8");
        assert_eq!(fp.position(), Point::ORIGIN);
        assert_eq!(fp.orientation(), 0);
        assert_eq!(fp.layer(), Layer::FrontCopper);
        assert!(!fp.is_flipped());
        assert!(fp.parent().is_none());
        assert_eq!(fp.attributes(), FootprintAttributes::DEFAULT);
        assert_eq!(fp.status(), FootprintStatus::empty());
        assert_eq!(fp.pad_count(), 0);
    }

    #[test]
    fn test_pads_take_board_position() {
        let mut fp = sample();
        fp.set_position(Point::new(1000, 2000));
        let pad = fp.find_pad_by_name("2").unwrap();
        assert_eq!(pad.position(), Point::new(1100, 2000));
        assert_eq!(pad.parent(), Some(fp.id()));
        let h = fp.add_pad(Pad::smd("3", Size::square(10)).at(Point::new(0, 50)));
        assert_eq!(fp.pad(h).unwrap().position(), Point::new(1000, 2050));
    }

    #[test]
    fn test_bounding_box_is_union_of_items_and_texts() {
        let fp = sample();
        let expected = fp
            .footprint_rect()
            .union(&fp.reference_text().bounding_box())
            .union(&fp.value_text().bounding_box());
        assert_eq!(fp.bounding_box(), expected);
        assert!((fp.area() - expected.area()).abs() < 1e-9);
    }

    #[test]
    fn test_footprint_rect_excludes_texts() {
        let mut fp = sample();
        fp.edit_reference(|t| t.pos0 = Point::new(0, -5000));
        assert!(fp.footprint_rect().min.y > -5000);
        assert!(fp.bounding_box().min.y < -5000);
    }

    #[test]
    fn test_empty_footprint_rect_sits_on_anchor() {
        let mut fp = Footprint::new("EMPTY");
        fp.set_position(Point::new(7, 9));
        assert_eq!(fp.footprint_rect(), BBox::at_point(Point::new(7, 9)));
    }

    #[test]
    fn test_move_is_exact_translation() {
        let mut fp = sample();
        let before = fp.bounding_box();
        fp.move_by(Point::new(123, -456));
        assert_eq!(fp.bounding_box(), before.translate(Point::new(123, -456)));
        let moved = fp.bounding_box();
        fp.calculate_bounding_box();
        assert_eq!(fp.bounding_box(), moved);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut fp = sample();
        fp.rotate(Point::ORIGIN, 900);
        assert_eq!(fp.orientation(), 900);
        let pad1 = fp.find_pad_by_name("1").unwrap();
        assert_eq!(pad1.position(), Point::new(0, 100));
        assert_eq!(pad1.orientation(), 900);
        // Pads 100 wide along x now span along y.
        let rect = fp.footprint_rect();
        assert!(rect.height() > rect.width());
    }

    #[test]
    fn test_rotation_wraps_orientation() {
        let mut fp = sample();
        fp.rotate(Point::ORIGIN, 2700);
        fp.rotate(Point::ORIGIN, 1800);
        assert_eq!(fp.orientation(), 900);
        fp.rotate(Point::ORIGIN, -1800);
        assert_eq!(fp.orientation(), 2700);
    }

    #[test]
    fn test_rotate_by_extreme_angles() {
        let mut fp = sample();
        fp.rotate(Point::ORIGIN, 900);
        // i32::MAX is 847 tenths past a whole number of turns.
        fp.rotate(Point::ORIGIN, i32::MAX);
        assert_eq!(fp.orientation(), 1747);
        fp.rotate(Point::ORIGIN, i32::MIN + 1);
        assert_eq!(fp.orientation(), 900);
        fp.rotate(Point::ORIGIN, i32::MIN);
        assert_eq!(fp.orientation(), 52);

        let mut fp = sample();
        fp.rotate(Point::ORIGIN, 900 + 3600 * 596_000);
        assert_eq!(fp.orientation(), 900);
        let pad1 = fp.find_pad_by_name("1").unwrap();
        assert_eq!(pad1.position(), Point::new(0, 100));
    }

    #[test]
    fn test_flip_changes_side_and_layers() {
        let mut fp = sample();
        fp.set_position(Point::new(0, 100));
        fp.rotate(Point::new(0, 100), 300);
        fp.flip(Point::new(0, 0));
        assert!(fp.is_flipped());
        assert_eq!(fp.layer(), Layer::BackCopper);
        assert_eq!(fp.position(), Point::new(0, -100));
        assert_eq!(fp.orientation(), 3300);
        let pad = fp.find_pad_by_name("1").unwrap();
        assert!(pad.layers.contains(LayerSet::B_CU));
        assert!(!pad.layers.contains(LayerSet::F_CU));
        assert!(fp.reference_text().mirrored);
        assert_eq!(fp.reference_text().layer, Layer::BackSilkscreen);
        let g = fp.graphics().first().unwrap();
        assert_eq!(g.layer, Layer::BackSilkscreen);
    }

    #[test]
    fn test_find_pad_by_name_first_wins() {
        let mut fp = Footprint::new("DUP");
        let first = fp.add_pad(Pad::smd("P1", Size::square(10)).at(Point::new(0, 0)));
        fp.add_pad(Pad::smd("P1", Size::square(10)).at(Point::new(100, 0)));
        fp.add_pad(Pad::smd("P2", Size::square(10)).at(Point::new(200, 0)));
        assert_eq!(fp.find_pad_handle_by_name("P1"), Some(first));
        assert_eq!(fp.find_pad_by_name("P1").unwrap().pos0, Point::new(0, 0));
        assert!(fp.find_pad_by_name("P3").is_none());
    }

    #[test]
    fn test_get_pad_respects_layers_and_order() {
        let mut fp = Footprint::new("STACK");
        fp.add_pad(Pad::smd("top", Size::square(100)));
        let mut bottom = Pad::smd("bottom", Size::square(100));
        bottom.layers = bottom.layers.flipped();
        fp.add_pad(bottom);
        fp.add_pad(Pad::smd("top2", Size::square(100)));

        let hit = Point::new(10, 10);
        assert_eq!(fp.get_pad(hit, LayerSet::all()).unwrap().name, "top");
        assert_eq!(fp.get_pad(hit, LayerSet::B_CU).unwrap().name, "bottom");
        assert!(fp.get_pad(hit, LayerSet::EDGE_CUTS).is_none());
        assert!(fp.get_pad(Point::new(500, 500), LayerSet::all()).is_none());
    }

    #[test]
    fn test_remove_pad_releases_ownership() {
        let mut fp = sample();
        let h = fp.find_pad_handle_by_name("1").unwrap();
        let pad = fp.remove_pad(h).unwrap();
        assert!(pad.parent().is_none());
        assert_eq!(fp.pad_count(), 1);
        assert!(fp.remove_pad(h).is_none());
        assert!(fp.edit_pad(h, |p| p.size = Size::square(1)).is_none());
    }

    #[test]
    fn test_edit_pad_refreshes_geometry() {
        let mut fp = sample();
        let h = fp.find_pad_handle_by_name("2").unwrap();
        fp.edit_pad(h, |p| p.pos0 = Point::new(5000, 0)).unwrap();
        assert_eq!(fp.pad(h).unwrap().position(), Point::new(5000, 0));
        assert!(fp.bounding_box().max.x >= 5050);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut fp = Footprint::new("F");
        for bits in 0u8..8 {
            fp.set_locked(bits & 1 != 0);
            fp.set_placed(bits & 2 != 0);
            fp.set_needs_placed(bits & 4 != 0);
            assert_eq!(fp.status().bits(), bits);
            fp.set_locked(!fp.is_locked());
            assert_eq!(fp.is_placed(), bits & 2 != 0);
            assert_eq!(fp.needs_placed(), bits & 4 != 0);
        }
    }

    #[test]
    fn test_attributes_combine() {
        let mut fp = Footprint::new("A");
        fp.set_attributes(FootprintAttributes::SMD | FootprintAttributes::VIRTUAL);
        assert!(fp.has_attribute(FootprintAttributes::SMD));
        assert!(fp.has_attribute(FootprintAttributes::VIRTUAL));
        fp.set_attributes(FootprintAttributes::DEFAULT);
        assert!(!fp.has_attribute(FootprintAttributes::SMD));
    }

    #[test]
    fn test_placement_cost_clamped() {
        let mut fp = Footprint::new("C");
        fp.set_placement_cost_90(4);
        fp.set_placement_cost_180(42);
        assert_eq!(fp.placement_cost_90(), 4);
        assert_eq!(fp.placement_cost_180(), MAX_PLACEMENT_COST);
    }

    #[test]
    fn test_clearance_inheritance_chain() {
        let mut fp = sample();
        let h = fp.find_pad_handle_by_name("1").unwrap();
        fp.edit_pad(h, |p| p.net_name = "VCC".to_string());
        assert_eq!(fp.pad_clearance(h, &Rules), Some(40));
        fp.set_local_clearance(30);
        assert_eq!(fp.pad_clearance(h, &Rules), Some(30));
        fp.edit_pad(h, |p| p.local_clearance = 10);
        assert_eq!(fp.pad_clearance(h, &Rules), Some(10));
    }

    #[test]
    fn test_mask_and_paste_margins() {
        let mut fp = sample();
        let h = fp.find_pad_handle_by_name("1").unwrap();
        assert_eq!(fp.pad_solder_mask_margin(h, &Rules), Some(5));
        fp.set_local_solder_mask_margin(-1000);
        assert_eq!(fp.pad_solder_mask_margin(h, &Rules), Some(-50));

        assert_eq!(fp.pad_solder_paste_margin(h, &Rules), Some(Size::new(-3, -3)));
        fp.set_local_solder_paste_margin_ratio(-0.1);
        assert_eq!(
            fp.pad_solder_paste_margin(h, &Rules),
            Some(Size::new(-13, -15))
        );
    }

    #[test]
    fn test_zone_connection_and_thermals() {
        let mut fp = sample();
        let h = fp.find_pad_handle_by_name("1").unwrap();
        assert_eq!(fp.pad_zone_connection(h, &Rules), Some(ZoneConnection::Thermal));
        fp.set_zone_connection(ZoneConnection::Full);
        assert_eq!(fp.pad_zone_connection(h, &Rules), Some(ZoneConnection::Full));
        fp.edit_pad(h, |p| p.zone_connection = ZoneConnection::None);
        assert_eq!(fp.pad_zone_connection(h, &Rules), Some(ZoneConnection::None));
        assert_eq!(fp.effective_thermal_width(&Rules), 7);
        fp.set_thermal_gap(3);
        assert_eq!(fp.effective_thermal_gap(&Rules), 3);
    }

    #[test]
    fn test_clone_drops_parent_duplicate_renews_id() {
        let mut fp = sample();
        fp.set_parent(Some(Uuid::new_v4()));
        let copy = fp.clone();
        assert!(copy.parent().is_none());
        assert_eq!(copy.id(), fp.id());
        assert_eq!(copy.pad_count(), fp.pad_count());

        let dup = fp.duplicate();
        assert_ne!(dup.id(), fp.id());
        assert!(dup.pads().iter().all(|p| p.parent() == Some(dup.id())));
        assert_eq!(dup.bounding_box(), fp.bounding_box());
    }

    #[test]
    fn test_hit_tests() {
        let fp = sample();
        assert!(fp.hit_test(Point::new(0, 0)));
        assert!(!fp.hit_test(Point::new(100_000_000, 0)));
        let everything = fp.bounding_box().inflate(1);
        assert!(fp.hit_test_rect(&everything));
        assert!(!fp.hit_test_rect(&BBox::at_point(Point::ORIGIN)));
    }

    #[test]
    fn test_select_menu_text() {
        let mut fp = sample();
        assert_eq!(fp.select_menu_text(), "Footprint R1 on F.Cu");
        fp.flip(Point::ORIGIN);
        assert_eq!(fp.select_menu_text(), "Footprint R1 on B.Cu");
    }

    #[test]
    fn test_flag_and_link() {
        let mut fp = Footprint::new("X");
        fp.set_flag(2);
        fp.increment_flag();
        assert_eq!(fp.flag(), 3);
        fp.set_link(99);
        assert_eq!(fp.link(), 99);
        fp.touch();
        assert!(fp.last_edit_time() > 0);
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl RenderSurface for Recorder {
        fn draw_pad(&mut self, pad: &Pad, _offset: Point, _mode: DrawMode) {
            self.calls.push(format!("pad {}", pad.name));
        }
        fn draw_graphic(&mut self, _graphic: &Graphic, _offset: Point, _mode: DrawMode) {
            self.calls.push("graphic".to_string());
        }
        fn draw_text(&mut self, text: &FootprintText, _offset: Point, _mode: DrawMode) {
            self.calls.push(format!("text {}", text.text));
        }
        fn draw_anchor(&mut self, position: Point, _size: Coord, _mode: DrawMode) {
            self.calls.push(format!("anchor {} {}", position.x, position.y));
        }
    }

    impl Model3dViewer for Recorder {
        fn render_model(
            &mut self,
            _anchor: Point,
            orientation: Orientation,
            _side: BoardSide,
            model: &Model3D,
        ) {
            self.calls.push(format!("model {} {}", model.path, orientation));
        }
    }

    #[test]
    fn test_draw_order_and_hidden_text() {
        let mut fp = sample();
        fp.edit_value(|t| t.visible = false);
        let mut surface = Recorder::default();
        fp.draw(&mut surface, DrawMode::Copy, Point::ORIGIN);
        assert_eq!(surface.calls, vec!["pad 1", "pad 2", "text R1", "graphic"]);

        let mut surface = Recorder::default();
        fp.draw_anchor(&mut surface, Point::new(1, 2), 50, DrawMode::Xor);
        assert_eq!(surface.calls, vec!["anchor 1 2"]);
    }

    #[test]
    fn test_draw_3d_passes_models() {
        let mut fp = sample();
        fp.add_model(Model3D::new("r0805.wrl"));
        fp.rotate(Point::ORIGIN, 900);
        let mut viewer = Recorder::default();
        fp.draw_3d(&mut viewer);
        assert_eq!(viewer.calls, vec!["model r0805.wrl 900"]);
    }
}
