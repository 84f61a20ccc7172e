//! Shared movement rules for the player, enemies and fruit
//!
//! There is no floor: anything that falls off the bottom of the screen comes
//! back in from the top, and platforms are one-way (solid only from above).

use super::state::{Body, Platform};
use crate::consts::*;

/// One fall step: gravity, integration, vertical wrap, platform landing.
/// Returns true if the body landed this step.
pub fn fall_step(body: &mut Body, platforms: &[Platform]) -> bool {
    body.grounded = false;
    body.vel.y += GRAVITY;
    body.pos += body.vel;
    wrap_vertical(body);
    land_on_platforms(body, platforms)
}

/// Bring a body that dropped below the screen back in above the top edge
#[inline]
pub fn wrap_vertical(body: &mut Body) {
    if body.pos.y > SCREEN_HEIGHT {
        body.pos.y = -body.size.y;
    }
}

/// Snap a falling body onto the first platform its feet crossed this step.
///
/// The body must be moving down and its feet must have passed the platform's
/// top surface during this step's vertical displacement.
pub fn land_on_platforms(body: &mut Body, platforms: &[Platform]) -> bool {
    if body.vel.y <= 0.0 {
        return false;
    }
    let feet = body.feet();
    let feet_before = feet - body.vel.y;
    let landed_on = platforms.iter().find(|platform| {
        let top = platform.rect.y;
        feet_before <= top && top <= feet && body.rect().overlaps_x(&platform.rect)
    });

    match landed_on {
        Some(platform) => {
            body.pos.y = platform.rect.y - body.size.y;
            body.vel.y = 0.0;
            body.grounded = true;
            true
        }
        None => false,
    }
}

/// Keep a body within the side walls
#[inline]
pub fn clamp_horizontal(body: &mut Body) {
    body.pos.x = body.pos.x.clamp(0.0, SCREEN_WIDTH - body.size.x);
}

/// Turn around on touching either side wall
#[inline]
pub fn bounce_horizontal(body: &mut Body) {
    if body.pos.x <= 0.0 || body.pos.x + body.size.x >= SCREEN_WIDTH {
        body.vel.x = -body.vel.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(32.0, 32.0))
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut body = body_at(100.0, 0.0);
        fall_step(&mut body, &[]);
        assert_eq!(body.vel.y, GRAVITY);
        assert_eq!(body.pos.y, GRAVITY);
        fall_step(&mut body, &[]);
        assert_eq!(body.vel.y, 2.0 * GRAVITY);
        assert_eq!(body.pos.y, 3.0 * GRAVITY);
    }

    #[test]
    fn test_wrap_keeps_velocity() {
        let mut body = body_at(100.0, SCREEN_HEIGHT);
        body.vel.y = 6.0;
        fall_step(&mut body, &[]);
        assert_eq!(body.pos.y, -32.0);
        assert_eq!(body.vel.y, 6.5);
    }

    #[test]
    fn test_lands_when_feet_cross_top() {
        let platform = Platform::new(50.0, 200.0, 100.0);
        // Feet at 198, falling 4/tick: crosses y=200 this step
        let mut body = body_at(80.0, 166.0);
        body.vel.y = 3.5;
        assert!(fall_step(&mut body, &[platform]));
        assert_eq!(body.feet(), 200.0);
        assert_eq!(body.vel.y, 0.0);
        assert!(body.grounded);
    }

    #[test]
    fn test_standing_body_stays_grounded() {
        let platform = Platform::new(0.0, 200.0, 200.0);
        let mut body = body_at(80.0, 168.0);
        for _ in 0..10 {
            fall_step(&mut body, &[platform]);
            assert!(body.grounded);
            assert_eq!(body.feet(), 200.0);
        }
    }

    #[test]
    fn test_rising_body_passes_through() {
        let platform = Platform::new(50.0, 200.0, 100.0);
        let mut body = body_at(80.0, 205.0);
        body.vel.y = -12.0;
        assert!(!fall_step(&mut body, &[platform]));
        assert!(!body.grounded);
        assert!(body.pos.y < 205.0);
    }

    #[test]
    fn test_no_landing_without_horizontal_overlap() {
        let platform = Platform::new(200.0, 200.0, 100.0);
        // Right edge exactly at platform left edge: no overlap
        let mut body = body_at(168.0, 166.0);
        body.vel.y = 3.5;
        assert!(!fall_step(&mut body, &[platform]));
    }

    #[test]
    fn test_clamp_and_bounce() {
        let mut body = body_at(-10.0, 0.0);
        clamp_horizontal(&mut body);
        assert_eq!(body.pos.x, 0.0);
        body.pos.x = SCREEN_WIDTH;
        clamp_horizontal(&mut body);
        assert_eq!(body.pos.x, SCREEN_WIDTH - 32.0);

        let mut enemy = body_at(SCREEN_WIDTH - 32.0, 0.0);
        enemy.vel.x = 2.0;
        bounce_horizontal(&mut enemy);
        assert_eq!(enemy.vel.x, -2.0);
        enemy.pos.x = 100.0;
        bounce_horizontal(&mut enemy);
        assert_eq!(enemy.vel.x, -2.0);
    }
}
