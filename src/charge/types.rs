// charge/types.rs
// Contains the Charge struct and related methods

use smallvec::SmallVec;
use std::sync::atomic::{AtomicU64, Ordering};
use ultraviolet::Vec2;

use crate::config;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug)]
pub struct Charge {
    /// Top-left anchor in scene coordinates.
    pub pos: Vec2,
    /// Display extent of the ellipse; the center is `pos + extent / 2`.
    pub extent: f32,
    pub value: i32,
    pub selected: bool,
    pub focused: bool,
    pub id: u64,
    /// Ids of the connections incident to this charge.
    pub connections: SmallVec<[u64; 8]>,
}

impl Charge {
    pub fn new(pos: Vec2, value: i32) -> Self {
        Self::with_extent(pos, value, config::DEFAULT_EXTENT)
    }

    pub fn with_extent(pos: Vec2, value: i32, extent: f32) -> Self {
        Self {
            pos,
            extent,
            value,
            selected: false,
            focused: false,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            connections: SmallVec::new(),
        }
    }

    /// Center of the charge's bounding box; connection endpoints anchor here.
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::one() * (self.extent * 0.5)
    }

    /// Absolute charge value, as used for color bucketing.
    pub fn magnitude(&self) -> u32 {
        self.value.unsigned_abs()
    }

    /// Overwrite the charge value. Values outside the spawn range
    /// [-20, 20] are accepted; the range only constrains generation.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}
