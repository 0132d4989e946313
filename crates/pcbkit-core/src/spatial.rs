use rstar::{RTree, RTreeObject, AABB};

use crate::collection::ItemHandle;
use crate::geometry::{BBox, Point};

/// An entry in the footprint R-tree, referencing a board footprint by handle.
#[derive(Debug, Clone)]
pub struct LocatorEntry {
    pub handle: ItemHandle,
    /// Position in the board's footprint list, used to break ties.
    pub order: usize,
    pub bbox: BBox,
}

impl RTreeObject for LocatorEntry {
    type Envelope = AABB<[i64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min.x, self.bbox.min.y],
            [self.bbox.max.x, self.bbox.max.y],
        )
    }
}

/// Spatial index over footprint bounding boxes for point and area queries.
pub struct FootprintLocator {
    tree: RTree<LocatorEntry>,
}

impl FootprintLocator {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load the index from `(handle, bbox)` pairs in list order.
    pub fn build<I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = (ItemHandle, BBox)>,
    {
        let entries = boxes
            .into_iter()
            .enumerate()
            .map(|(order, (handle, bbox))| LocatorEntry {
                handle,
                order,
                bbox,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Entries whose bounding box contains `point`, sorted by list order.
    pub fn query_point(&self, point: &Point) -> Vec<&LocatorEntry> {
        let mut hits: Vec<_> = self
            .tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .collect();
        hits.sort_by_key(|e| e.order);
        hits
    }

    /// Entries intersecting `area`, sorted by list order.
    pub fn query_area(&self, area: &BBox) -> Vec<&LocatorEntry> {
        let envelope = AABB::from_corners([area.min.x, area.min.y], [area.max.x, area.max.y]);
        let mut hits: Vec<_> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .collect();
        hits.sort_by_key(|e| e.order);
        hits
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for FootprintLocator {
    fn default() -> Self {
        Self::new()
    }
}
