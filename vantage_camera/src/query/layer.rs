//! Occlusion layers
//!
//! Every surface belongs to exactly one of 32 layers. A `LayerMask` selects
//! which layers take part in a cast; anything else is transparent to it.
//! The first layers follow the usual engine numbering (0 = Default,
//! 2 = Ignore Raycast, ...), 8..=31 are free for the host.

use bitflags::bitflags;

bitflags! {
    /// Set of layers that participate in occlusion queries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        const DEFAULT        = 1 << 0;
        const TRANSPARENT_FX = 1 << 1;
        const IGNORE_RAYCAST = 1 << 2;
        const WATER          = 1 << 4;
        const UI             = 1 << 5;

        // User layers are plain bits
        const _ = !0;
    }
}

impl LayerMask {
    /// Every layer occludes
    pub const ALL: Self = Self::from_bits_retain(u32::MAX);

    /// Nothing occludes
    pub const NONE: Self = Self::empty();

    /// Every layer except Ignore Raycast (the default cast filter)
    pub const DEFAULT_OCCLUDERS: Self = Self::from_bits_retain(!Self::IGNORE_RAYCAST.bits());

    /// Mask holding a single layer.
    pub const fn layer(layer: Layer) -> Self {
        Self::from_bits_retain(1u32 << layer.index())
    }

    /// Copy of this mask with `layer` removed.
    pub const fn without(self, layer: Layer) -> Self {
        Self::from_bits_retain(self.bits() & !(1u32 << layer.index()))
    }

    /// Copy of this mask with `layer` added.
    pub const fn with(self, layer: Layer) -> Self {
        Self::from_bits_retain(self.bits() | (1u32 << layer.index()))
    }

    /// True if surfaces on `layer` take part in casts filtered by this mask.
    pub const fn includes(self, layer: Layer) -> bool {
        self.bits() & (1u32 << layer.index()) != 0
    }
}

impl From<Layer> for LayerMask {
    fn from(layer: Layer) -> Self {
        LayerMask::layer(layer)
    }
}

/// A single layer index in 0..=31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Layer(u8);

impl Layer {
    pub const DEFAULT: Layer = Layer(0);
    pub const TRANSPARENT_FX: Layer = Layer(1);
    pub const IGNORE_RAYCAST: Layer = Layer(2);
    pub const WATER: Layer = Layer(4);
    pub const UI: Layer = Layer(5);

    /// Layer by index.
    ///
    /// # Panics
    ///
    /// If `index` is 32 or more (at compile time when used in a const).
    pub const fn new(index: u8) -> Self {
        assert!(index < 32, "layer index must be in 0..=31");
        Layer(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn mask(self) -> LayerMask {
        LayerMask::layer(self)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::DEFAULT
    }
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
