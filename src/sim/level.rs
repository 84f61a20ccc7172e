//! Random platform layouts
//!
//! Each of the six fixed rows picks one of four layout patterns. Later
//! levels knock random platforms out of the result, down to a floor of
//! `MIN_PLATFORMS`.

use rand::Rng;

use super::state::Platform;
use crate::consts::*;

/// Layout of a single platform row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutPattern {
    /// Two platforms flush against the side walls
    EdgePair { width: f32 },
    /// One platform in the middle
    Center { width: f32 },
    /// Two platforms either side of the middle, `gap` apart
    SplitCenter { width: f32, gap: f32 },
    /// Three platforms: left, middle, right (inset 20px from the walls)
    Triad { width: f32 },
}

/// Inset of the outer platforms in a `Triad` row
const TRIAD_INSET: f32 = 20.0;

impl LayoutPattern {
    /// Pick a pattern uniformly and roll its dimensions
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => LayoutPattern::EdgePair {
                width: rng.random_range(100.0..180.0),
            },
            1 => LayoutPattern::Center {
                width: rng.random_range(120.0..220.0),
            },
            2 => LayoutPattern::SplitCenter {
                width: rng.random_range(80.0..140.0),
                gap: rng.random_range(40.0..80.0),
            },
            _ => LayoutPattern::Triad {
                width: rng.random_range(60.0..110.0),
            },
        }
    }

    /// Lay out this pattern's platforms on row `y`
    pub fn platforms(&self, y: f32) -> Vec<Platform> {
        let mid = SCREEN_WIDTH / 2.0;
        match *self {
            LayoutPattern::EdgePair { width } => vec![
                Platform::new(0.0, y, width),
                Platform::new(SCREEN_WIDTH - width, y, width),
            ],
            LayoutPattern::Center { width } => vec![Platform::new(mid - width / 2.0, y, width)],
            LayoutPattern::SplitCenter { width, gap } => vec![
                Platform::new(mid - width - gap / 2.0, y, width),
                Platform::new(mid + gap / 2.0, y, width),
            ],
            LayoutPattern::Triad { width } => vec![
                Platform::new(TRIAD_INSET, y, width),
                Platform::new(mid - width / 2.0, y, width),
                Platform::new(SCREEN_WIDTH - width - TRIAD_INSET, y, width),
            ],
        }
    }
}

/// Nominal platform budget for a level: fewer platforms as levels climb
pub fn platform_budget(level: u32) -> usize {
    (BASE_PLATFORM_COUNT.saturating_sub(level) as usize).max(MIN_PLATFORMS)
}

/// Generate the platform set for a level (1-based)
pub fn generate_level<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Vec<Platform> {
    let mut platforms: Vec<Platform> = PLATFORM_ROWS
        .iter()
        .flat_map(|&y| LayoutPattern::random(rng).platforms(y))
        .collect();

    // Thin out the layout on harder levels
    if level > 2 {
        let removable = platforms.len().saturating_sub(MIN_PLATFORMS);
        let remove = ((level - 2) as usize).min(removable);
        for _ in 0..remove {
            let index = rng.random_range(0..platforms.len());
            platforms.remove(index);
        }
    }

    log::info!(
        "Level {}: {} platforms generated (budget {})",
        level,
        platforms.len(),
        platform_budget(level)
    );
    platforms
}
