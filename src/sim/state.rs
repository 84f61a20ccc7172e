//! Game state and core simulation types
//!
//! Entities reference each other by stable entity ID, never by pointer or
//! vector index, so removals never leave a dangling link.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::progression;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for any key
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
    /// Run ended with a new record, typing a name
    EnteringName,
}

impl GamePhase {
    /// Whether the simulation advances in this phase
    pub fn is_live(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// A moving box shared by the player, enemies and fruit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Standing on a platform since the last fall step
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Y coordinate of the bottom edge
    #[inline]
    pub fn feet(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move to a position and stop dead
    pub fn place_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    /// +1.0 facing right, -1.0 facing left
    pub facing: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Body::new(Self::spawn_point(), Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            facing: 1.0,
        }
    }
}

impl Player {
    pub fn spawn_point() -> Vec2 {
        Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }

    /// Landing spot after a level clear: centered, low on the screen
    pub fn safe_point() -> Vec2 {
        Vec2::new(SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, PLAYER_SAFE_Y)
    }

    /// Put the player back at the spawn point after a hit
    pub fn respawn(&mut self) {
        self.body.place_at(Self::spawn_point());
    }
}

/// A static platform rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    /// Platform at (x, y) with the standard thickness
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, PLATFORM_HEIGHT),
        }
    }
}

/// A bubble projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: u32,
    /// Center of the bubble
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks since creation
    pub age: u32,
    /// ID of the enemy trapped inside, if any
    pub captured: Option<u32>,
}

impl Bubble {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            age: 0,
            captured: None,
        }
    }

    #[inline]
    pub fn holds_enemy(&self) -> bool {
        self.captured.is_some()
    }

    /// Age after which the bubble bursts on its own
    pub fn lifetime(&self) -> u32 {
        if self.holds_enemy() {
            BUBBLE_LIFETIME_CAPTURED
        } else {
            BUBBLE_LIFETIME
        }
    }

    /// Whether the bubble has started to float upward
    pub fn is_floating(&self) -> bool {
        self.age >= BUBBLE_FLOAT_DELAY
    }
}

/// Enemy behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    /// Roaming and dangerous
    Free,
    /// Trapped inside the bubble with this ID
    Captured { bubble_id: u32 },
}

/// A roaming enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    /// CSS-style color for renderers
    pub color: &'static str,
    pub state: EnemyState,
    /// Popping this enemy grants a life instead of fruit
    pub grants_life: bool,
}

impl Enemy {
    #[inline]
    pub fn is_free(&self) -> bool {
        self.state == EnemyState::Free
    }

    /// ID of the bubble holding this enemy
    pub fn bubble_id(&self) -> Option<u32> {
        match self.state {
            EnemyState::Captured { bubble_id } => Some(bubble_id),
            EnemyState::Free => None,
        }
    }

    /// Break out of a bubble: fall from rest
    pub fn release(&mut self) {
        self.state = EnemyState::Free;
        self.body.vel.y = 0.0;
    }
}

/// Fruit tiers, better fruit on later levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitKind {
    Apple,
    Orange,
    Grape,
    Watermelon,
    Diamond,
}

impl FruitKind {
    pub const ALL: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Orange,
        FruitKind::Grape,
        FruitKind::Watermelon,
        FruitKind::Diamond,
    ];

    /// Tier for a level (1-based), capped at the best fruit
    pub fn for_level(level: u32) -> Self {
        let index = (level.saturating_sub(1) as usize).min(Self::ALL.len() - 1);
        Self::ALL[index]
    }

    pub fn points(&self) -> u64 {
        match self {
            FruitKind::Apple => 100,
            FruitKind::Orange => 200,
            FruitKind::Grape => 300,
            FruitKind::Watermelon => 500,
            FruitKind::Diamond => 1000,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FruitKind::Apple => "#ff0000",
            FruitKind::Orange => "#ff8800",
            FruitKind::Grape => "#8800ff",
            FruitKind::Watermelon => "#00ff00",
            FruitKind::Diamond => "#00ffff",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Orange => "orange",
            FruitKind::Grape => "grape",
            FruitKind::Watermelon => "watermelon",
            FruitKind::Diamond => "diamond",
        }
    }
}

/// A collectible reward
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: u32,
    pub body: Body,
    pub kind: FruitKind,
    pub age: u32,
}

impl Fruit {
    /// About to vanish; renderers flash it
    pub fn is_blinking(&self) -> bool {
        self.age > FRUIT_BLINK_AGE
    }
}

/// Something that happened during a tick, for audio and UI collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemyCaptured { enemy_id: u32, bubble_id: u32 },
    /// A bubble burst on its own and let its enemy go
    EnemyEscaped { enemy_id: u32 },
    EnemyPopped { enemy_id: u32, grants_life: bool, pos: Vec2 },
    PlayerHit { lives_left: u32 },
    FruitCollected { kind: FruitKind, points: u64 },
    LevelCleared { level: u32, bonus: u64 },
    GameOver { score: u64 },
}

/// Score, lives, level and phase for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    pub phase: GamePhase,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            phase: GamePhase::Title,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: Session,
    pub player: Player,
    /// Platforms for the current level, replaced wholesale on level change
    pub platforms: Vec<Platform>,
    /// Active bubbles (creation order)
    pub bubbles: Vec<Bubble>,
    /// Active enemies (creation order, which is also the capture scan order)
    pub enemies: Vec<Enemy>,
    /// Active fruit (creation order)
    pub fruits: Vec<Fruit>,
    /// Fire latch: set while the fire button has been released since the last shot
    pub fire_ready: bool,
    /// Multiplier on enemy walking speed
    pub enemy_speed_scale: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game on the title screen with level 1 generated
    pub fn new(seed: u64) -> Self {
        Self::with_enemy_speed(seed, 1.0)
    }

    /// Create a new game with scaled enemy speed
    pub fn with_enemy_speed(seed: u64, enemy_speed_scale: f32) -> Self {
        let mut state = Self {
            session: Session::default(),
            player: Player::default(),
            platforms: Vec::new(),
            bubbles: Vec::new(),
            enemies: Vec::new(),
            fruits: Vec::new(),
            fire_ready: true,
            enemy_speed_scale,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        progression::start_level(&mut state, 1);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything to the start of a fresh run and begin playing
    pub fn restart(&mut self) {
        self.session = Session {
            phase: GamePhase::Playing,
            ..Session::default()
        };
        self.player = Player::default();
        self.fruits.clear();
        self.time_ticks = 0;
        self.fire_ready = true;
        progression::start_level(self, 1);
        log::info!("Game restarted");
    }

    /// Add a free enemy and return its ID
    pub fn spawn_enemy(&mut self, pos: Vec2, vel: Vec2, color: &'static str, grants_life: bool) -> u32 {
        let id = self.next_entity_id();
        let mut body = Body::new(pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT));
        body.vel = vel;
        self.enemies.push(Enemy {
            id,
            body,
            color,
            state: EnemyState::Free,
            grants_life,
        });
        id
    }

    /// Add an empty bubble centered at `pos` and return its ID
    pub fn spawn_bubble(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.bubbles.push(Bubble::new(id, pos, vel));
        id
    }

    /// Add a fruit centered at `center` and return its ID
    pub fn spawn_fruit(&mut self, center: Vec2, kind: FruitKind) -> u32 {
        let id = self.next_entity_id();
        let size = Vec2::splat(FRUIT_SIZE);
        self.fruits.push(Fruit {
            id,
            body: Body::new(center - size / 2.0, size),
            kind,
            age: 0,
        });
        id
    }

    pub fn bubble_index(&self, id: u32) -> Option<usize> {
        self.bubbles.iter().position(|b| b.id == id)
    }

    pub fn enemy_index(&self, id: u32) -> Option<usize> {
        self.enemies.iter().position(|e| e.id == id)
    }

    /// Trap an enemy in a bubble, linking both sides
    pub fn link_capture(&mut self, bubble_id: u32, enemy_id: u32) {
        if let (Some(b), Some(e)) = (self.bubble_index(bubble_id), self.enemy_index(enemy_id)) {
            self.bubbles[b].captured = Some(enemy_id);
            self.enemies[e].state = EnemyState::Captured { bubble_id };
        }
    }

    /// Check the bubble/enemy link invariant: every link is mirrored on
    /// the other side, so each bubble holds at most one enemy and each
    /// enemy sits in at most one bubble.
    pub fn links_consistent(&self) -> bool {
        let bubbles_ok = self.bubbles.iter().all(|bubble| match bubble.captured {
            None => true,
            Some(enemy_id) => self
                .enemies
                .iter()
                .any(|e| e.id == enemy_id && e.bubble_id() == Some(bubble.id)),
        });
        let enemies_ok = self.enemies.iter().all(|enemy| match enemy.bubble_id() {
            None => true,
            Some(bubble_id) => {
                self.bubbles
                    .iter()
                    .filter(|b| b.captured == Some(enemy.id))
                    .count()
                    == 1
                    && self
                        .bubbles
                        .iter()
                        .any(|b| b.id == bubble_id && b.captured == Some(enemy.id))
            }
        });
        bubbles_ok && enemies_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_title_with_level_one() {
        let state = GameState::new(7);
        assert_eq!(state.session.phase, GamePhase::Title);
        assert_eq!(state.session.level, 1);
        assert_eq!(state.session.lives, STARTING_LIVES);
        assert_eq!(state.enemies.len(), 3);
        assert!(state.platforms.len() >= MIN_PLATFORMS);
        assert!(state.bubbles.is_empty());
        assert!(state.fire_ready);
    }

    #[test]
    fn test_fruit_tier_caps_at_diamond() {
        assert_eq!(FruitKind::for_level(1), FruitKind::Apple);
        assert_eq!(FruitKind::for_level(3), FruitKind::Grape);
        assert_eq!(FruitKind::for_level(5), FruitKind::Diamond);
        assert_eq!(FruitKind::for_level(40), FruitKind::Diamond);
        assert_eq!(FruitKind::for_level(0), FruitKind::Apple);
    }

    #[test]
    fn test_bubble_lifetime_depends_on_capture() {
        let mut bubble = Bubble::new(1, Vec2::ZERO, Vec2::ZERO);
        assert_eq!(bubble.lifetime(), BUBBLE_LIFETIME);
        bubble.captured = Some(9);
        assert_eq!(bubble.lifetime(), BUBBLE_LIFETIME_CAPTURED);
    }

    #[test]
    fn test_link_capture_is_bidirectional() {
        let mut state = GameState::new(1);
        state.enemies.clear();
        let enemy = state.spawn_enemy(Vec2::new(50.0, 50.0), Vec2::ZERO, "#fff", false);
        let bubble = state.spawn_bubble(Vec2::new(60.0, 60.0), Vec2::ZERO);
        assert!(state.links_consistent());

        state.link_capture(bubble, enemy);
        assert_eq!(state.bubbles[0].captured, Some(enemy));
        assert_eq!(state.enemies[0].bubble_id(), Some(bubble));
        assert!(state.links_consistent());
    }

    #[test]
    fn test_dangling_link_is_inconsistent() {
        let mut state = GameState::new(1);
        state.enemies.clear();
        let enemy = state.spawn_enemy(Vec2::ZERO, Vec2::ZERO, "#fff", false);
        let bubble = state.spawn_bubble(Vec2::ZERO, Vec2::ZERO);
        state.link_capture(bubble, enemy);

        state.bubbles.clear();
        assert!(!state.links_consistent());
    }

    #[test]
    fn test_spawn_fruit_centers_on_point() {
        let mut state = GameState::new(1);
        state.spawn_fruit(Vec2::new(100.0, 100.0), FruitKind::Orange);
        let fruit = &state.fruits[0];
        assert_eq!(fruit.body.center(), Vec2::new(100.0, 100.0));
        assert_eq!(fruit.kind.points(), 200);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut state = GameState::new(3);
        state.session.score = 4200;
        state.session.lives = 1;
        state.session.level = 6;
        state.spawn_bubble(Vec2::new(10.0, 10.0), Vec2::ZERO);
        state.spawn_fruit(Vec2::new(10.0, 10.0), FruitKind::Grape);
        state.time_ticks = 900;

        state.restart();
        let once = (state.session.clone(), state.player.clone(), state.enemies.len());
        assert_eq!(state.time_ticks, 0);
        state.restart();
        let twice = (state.session.clone(), state.player.clone(), state.enemies.len());

        assert_eq!(once, twice);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.level, 1);
        assert_eq!(state.session.phase, GamePhase::Playing);
        assert!(state.bubbles.is_empty());
        assert!(state.fruits.is_empty());
    }
}
