// color.rs
// Maps charge magnitudes to discrete display colors relative to the
// system-wide maximum magnitude

use palette::Srgba;

use crate::config;

/// Discrete color buckets, ordered from lowest relative magnitude to
/// highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBucket {
    Violet,
    Blue,
    Cyan,
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorBucket {
    /// Bucket for a magnitude `m` relative to `ceiling`, the current
    /// system-wide maximum. Thresholds sit at `ceiling * i / 7` and the
    /// highest matching threshold wins; a zero ceiling maps everything to
    /// the lowest bucket. Comparisons are exact integer arithmetic,
    /// `m > ceiling * i / 7  <=>  7 * m > ceiling * i`.
    pub fn for_magnitude(m: u32, ceiling: u32) -> Self {
        let (m, ceiling) = (m as u64, ceiling as u64);
        let scaled = m * config::COLOR_BUCKETS as u64;
        if ceiling == 0 {
            Self::Violet
        } else if scaled > ceiling * 6 {
            Self::Red
        } else if scaled > ceiling * 5 {
            Self::Orange
        } else if scaled > ceiling * 4 {
            Self::Yellow
        } else if scaled > ceiling * 3 {
            Self::Green
        } else if scaled > ceiling * 2 {
            Self::Cyan
        } else if scaled > ceiling {
            Self::Blue
        } else {
            Self::Violet
        }
    }

    /// Display color of the bucket.
    pub fn srgba(self) -> Srgba<u8> {
        match self {
            Self::Red => Srgba::new(229, 25, 25, 255),
            Self::Orange => Srgba::new(249, 107, 24, 255),
            Self::Yellow => Srgba::new(249, 188, 23, 255),
            Self::Green => Srgba::new(23, 249, 94, 255),
            Self::Cyan => Srgba::new(23, 215, 249, 255),
            Self::Blue => Srgba::new(23, 98, 249, 255),
            Self::Violet => Srgba::new(139, 23, 249, 255),
        }
    }
}
