use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::{ItemHandle, ItemList};
use crate::error::CoreError;
use crate::footprint::Footprint;
use crate::geometry::{Coord, Point};
use crate::interfaces::NetClassResolver;
use crate::layer::{BoardSide, LayerSet};
use crate::netclass::{NetClasses, ZoneConnection};
use crate::pad::Pad;
use crate::settings::DesignSettings;
use crate::spatial::FootprintLocator;

/// Unique board identifier.
pub type BoardId = Uuid;

/// The board that footprints are placed on. Owns its footprints and supplies
/// the design-rule defaults they inherit.
#[derive(Debug, Serialize, Deserialize)]
pub struct Board {
    /// Board identifier.
    pub id: BoardId,
    /// Project name.
    pub name: String,
    /// Board-wide defaults.
    pub settings: DesignSettings,
    /// Net classes and their net assignments.
    pub net_classes: NetClasses,
    /// Footprints in placement order.
    footprints: ItemList<Footprint>,
}

impl Board {
    pub fn new(name: &str) -> Self {
        Self::with_settings(name, DesignSettings::default())
    }

    pub fn with_settings(name: &str, settings: DesignSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            net_classes: NetClasses::new(settings.default_net_class.clone()),
            settings,
            footprints: ItemList::new(),
        }
    }

    // ── Footprint management ─────────────────────────────────────────

    /// Create an empty footprint with this board's defaults and attach it.
    pub fn new_footprint(&mut self, lib_ref: &str) -> ItemHandle {
        let footprint = Footprint::with_settings(lib_ref, &self.settings);
        self.add_footprint(footprint)
    }

    pub fn add_footprint(&mut self, mut footprint: Footprint) -> ItemHandle {
        footprint.set_parent(Some(self.id));
        log::debug!(
            "Added footprint {} ({}) to board '{}'",
            footprint.reference(),
            footprint.lib_ref(),
            self.name
        );
        self.footprints.append(footprint)
    }

    /// Detach a footprint; the caller owns it afterwards.
    pub fn remove_footprint(&mut self, handle: ItemHandle) -> Option<Footprint> {
        let mut footprint = self.footprints.remove(handle)?;
        footprint.set_parent(None);
        log::debug!(
            "Removed footprint {} from board '{}'",
            footprint.reference(),
            self.name
        );
        Some(footprint)
    }

    pub fn footprint(&self, handle: ItemHandle) -> Option<&Footprint> {
        self.footprints.get(handle)
    }

    pub fn footprint_mut(&mut self, handle: ItemHandle) -> Option<&mut Footprint> {
        self.footprints.get_mut(handle)
    }

    pub fn footprints(&self) -> &ItemList<Footprint> {
        &self.footprints
    }

    pub fn footprint_count(&self) -> usize {
        self.footprints.len()
    }

    pub fn find_footprint_by_reference(&self, reference: &str) -> Option<&Footprint> {
        self.footprints.iter().find(|f| f.reference() == reference)
    }

    pub fn find_footprint_handle_by_reference(&self, reference: &str) -> Option<ItemHandle> {
        self.footprints.find_handle(|f| f.reference() == reference)
    }

    // ── Spatial queries ──────────────────────────────────────────────

    pub fn locator(&self) -> FootprintLocator {
        FootprintLocator::build(
            self.footprints
                .entries()
                .map(|(handle, fp)| (handle, fp.bounding_box())),
        )
    }

    /// Footprint under `point`. Footprints on `side` win over the other side;
    /// among candidates of a side the smallest area wins, earlier footprints
    /// breaking ties. Locked footprints are skipped when `ignore_locked`.
    pub fn footprint_at(
        &self,
        point: Point,
        side: BoardSide,
        ignore_locked: bool,
    ) -> Option<ItemHandle> {
        let locator = self.locator();
        let mut preferred: Option<(ItemHandle, f64)> = None;
        let mut alternate: Option<(ItemHandle, f64)> = None;

        for entry in locator.query_point(&point) {
            let Some(fp) = self.footprints.get(entry.handle) else {
                continue;
            };
            if ignore_locked && fp.is_locked() {
                continue;
            }
            let slot = if fp.side() == side {
                &mut preferred
            } else {
                &mut alternate
            };
            let area = fp.area();
            if slot.map_or(true, |(_, best)| area < best) {
                *slot = Some((entry.handle, area));
            }
        }

        preferred.or(alternate).map(|(handle, _)| handle)
    }

    /// First pad under `point` on `layers`, scanning footprints in order.
    pub fn pad_at(&self, point: Point, layers: LayerSet) -> Option<&Pad> {
        self.locator()
            .query_point(&point)
            .into_iter()
            .filter_map(|entry| self.footprints.get(entry.handle))
            .find_map(|fp| fp.get_pad(point, layers))
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a board snapshot and re-attach its footprints.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let mut board: Board = serde_json::from_str(json)?;
        let id = board.id;
        for fp in board.footprints.iter_mut() {
            fp.set_parent(Some(id));
        }
        log::info!(
            "Loaded board '{}' with {} footprints",
            board.name,
            board.footprints.len()
        );
        Ok(board)
    }
}

impl NetClassResolver for Board {
    fn clearance(&self, net_name: &str) -> Coord {
        self.net_classes.class_for_net(net_name).clearance
    }

    fn solder_mask_margin(&self) -> Coord {
        self.settings.solder_mask_margin
    }

    fn solder_paste_margin(&self) -> Coord {
        self.settings.solder_paste_margin
    }

    fn solder_paste_margin_ratio(&self) -> f64 {
        self.settings.solder_paste_margin_ratio
    }

    fn thermal_width(&self) -> Coord {
        self.settings.thermal_width
    }

    fn thermal_gap(&self) -> Coord {
        self.settings.thermal_gap
    }

    fn zone_connection(&self) -> ZoneConnection {
        self.settings.zone_connection
    }
}
