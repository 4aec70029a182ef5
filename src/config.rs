// Centralized configuration for charge-system parameters

// ====================
// Charge Parameters
// ====================
/// Display extent of a charge ellipse, in display units. The visual center
/// sits half an extent in from the position on each axis.
pub const DEFAULT_EXTENT: f32 = 40.0;
/// Lower bound of the spawn-time charge value range.
pub const MIN_CHARGE_VALUE: i32 = -20;
/// Upper bound of the spawn-time charge value range.
pub const MAX_CHARGE_VALUE: i32 = 20;

// ====================
// Viewport Parameters
// ====================
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 600.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 400.0;

// ====================
// Color Parameters
// ====================
/// Number of magnitude buckets used when coloring charges.
pub const COLOR_BUCKETS: u32 = 7;
