use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A manufacturing or documentation plane of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    BackCopper,
    FrontCopper,
    BackAdhesive,
    FrontAdhesive,
    BackPaste,
    FrontPaste,
    BackSilkscreen,
    FrontSilkscreen,
    BackMask,
    FrontMask,
    UserDrawings,
    UserComments,
    UserEco1,
    UserEco2,
    EdgeCuts,
}

impl Layer {
    pub const ALL: [Layer; 15] = [
        Layer::BackCopper,
        Layer::FrontCopper,
        Layer::BackAdhesive,
        Layer::FrontAdhesive,
        Layer::BackPaste,
        Layer::FrontPaste,
        Layer::BackSilkscreen,
        Layer::FrontSilkscreen,
        Layer::BackMask,
        Layer::FrontMask,
        Layer::UserDrawings,
        Layer::UserComments,
        Layer::UserEco1,
        Layer::UserEco2,
        Layer::EdgeCuts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::BackCopper => "B.Cu",
            Layer::FrontCopper => "F.Cu",
            Layer::BackAdhesive => "B.Adhes",
            Layer::FrontAdhesive => "F.Adhes",
            Layer::BackPaste => "B.Paste",
            Layer::FrontPaste => "F.Paste",
            Layer::BackSilkscreen => "B.SilkS",
            Layer::FrontSilkscreen => "F.SilkS",
            Layer::BackMask => "B.Mask",
            Layer::FrontMask => "F.Mask",
            Layer::UserDrawings => "Dwgs.User",
            Layer::UserComments => "Cmts.User",
            Layer::UserEco1 => "Eco1.User",
            Layer::UserEco2 => "Eco2.User",
            Layer::EdgeCuts => "Edge.Cuts",
        }
    }

    /// The layer this one lands on when its footprint changes board side.
    /// Side-neutral layers map to themselves.
    pub fn flipped(self) -> Layer {
        match self {
            Layer::BackCopper => Layer::FrontCopper,
            Layer::FrontCopper => Layer::BackCopper,
            Layer::BackAdhesive => Layer::FrontAdhesive,
            Layer::FrontAdhesive => Layer::BackAdhesive,
            Layer::BackPaste => Layer::FrontPaste,
            Layer::FrontPaste => Layer::BackPaste,
            Layer::BackSilkscreen => Layer::FrontSilkscreen,
            Layer::FrontSilkscreen => Layer::BackSilkscreen,
            Layer::BackMask => Layer::FrontMask,
            Layer::FrontMask => Layer::BackMask,
            other => other,
        }
    }

    pub fn is_back(self) -> bool {
        matches!(
            self,
            Layer::BackCopper
                | Layer::BackAdhesive
                | Layer::BackPaste
                | Layer::BackSilkscreen
                | Layer::BackMask
        )
    }

    pub fn is_front(self) -> bool {
        self.flipped() != self && !self.is_back()
    }

    pub fn mask(self) -> LayerSet {
        LayerSet::from_bits_retain(1 << self as u32)
    }
}

bitflags! {
    /// A set of layers, one bit per [`Layer`] in declaration order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct LayerSet: u32 {
        const B_CU = 1 << 0;
        const F_CU = 1 << 1;
        const B_ADHES = 1 << 2;
        const F_ADHES = 1 << 3;
        const B_PASTE = 1 << 4;
        const F_PASTE = 1 << 5;
        const B_SILKS = 1 << 6;
        const F_SILKS = 1 << 7;
        const B_MASK = 1 << 8;
        const F_MASK = 1 << 9;
        const DWGS_USER = 1 << 10;
        const CMTS_USER = 1 << 11;
        const ECO1_USER = 1 << 12;
        const ECO2_USER = 1 << 13;
        const EDGE_CUTS = 1 << 14;
    }
}

impl LayerSet {
    pub const ALL_COPPER: LayerSet = LayerSet::B_CU.union(LayerSet::F_CU);

    /// Default layers of a front-side surface-mount pad.
    pub const SMD_FRONT: LayerSet = LayerSet::F_CU
        .union(LayerSet::F_PASTE)
        .union(LayerSet::F_MASK);

    /// Default layers of a plated through-hole pad.
    pub const THROUGH_HOLE: LayerSet = LayerSet::ALL_COPPER
        .union(LayerSet::F_SILKS)
        .union(LayerSet::B_MASK)
        .union(LayerSet::F_MASK);

    pub fn from_layers(layers: &[Layer]) -> Self {
        layers.iter().fold(Self::empty(), |set, l| set | l.mask())
    }

    pub fn contains_layer(&self, layer: Layer) -> bool {
        self.contains(layer.mask())
    }

    /// Iterate member layers in declaration order.
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        Layer::ALL
            .iter()
            .copied()
            .filter(move |l| self.contains_layer(*l))
    }

    /// Swap every front layer with its back counterpart.
    pub fn flipped(&self) -> Self {
        self.layers().fold(Self::empty(), |set, l| set | l.flipped().mask())
    }
}

/// The board face a footprint is mounted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSide {
    #[default]
    Front,
    Back,
}

impl BoardSide {
    pub fn flipped(self) -> Self {
        match self {
            BoardSide::Front => BoardSide::Back,
            BoardSide::Back => BoardSide::Front,
        }
    }

    pub fn copper_layer(self) -> Layer {
        match self {
            BoardSide::Front => Layer::FrontCopper,
            BoardSide::Back => Layer::BackCopper,
        }
    }
}
