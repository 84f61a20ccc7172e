//! Frame driver
//!
//! Wraps the simulation with everything around a tick: held input,
//! discrete key handling for the title and name-entry screens, and the
//! high-score handoff when a session ends.

use crate::highscores::{self, HighScores, MAX_NAME_LEN};
use crate::persistence::RecordStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Discrete key presses the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Fire,
    Restart,
    Char(char),
    Backspace,
    Enter,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: TickInput,
    records: HighScores,
    store: Box<dyn RecordStore>,
    name_entry: String,
}

impl Game {
    pub fn new(settings: &Settings, store: Box<dyn RecordStore>) -> Self {
        let seed = settings.resolve_seed();
        log::info!("New game (seed {})", seed);
        let records = HighScores::load_from(store.as_ref());
        Self {
            state: GameState::with_enemy_speed(seed, settings.enemy_speed_scale()),
            input: TickInput::default(),
            records,
            store,
            name_entry: String::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.session.phase
    }

    pub fn records(&self) -> &HighScores {
        &self.records
    }

    /// Name typed so far on the name-entry screen
    pub fn name_entry(&self) -> &str {
        &self.name_entry
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Replace the held-button state wholesale
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    pub fn key_down(&mut self, key: Key) {
        match self.phase() {
            GamePhase::Title => {
                // Any key starts play and is otherwise swallowed
                self.state.session.phase = GamePhase::Playing;
                log::info!("Game started");
            }
            GamePhase::EnteringName => self.edit_name(key),
            GamePhase::Playing | GamePhase::GameOver => match key {
                Key::Left => self.input.move_left = true,
                Key::Right => self.input.move_right = true,
                Key::Jump => self.input.jump = true,
                Key::Fire => self.input.fire = true,
                Key::Restart if self.phase() == GamePhase::GameOver => self.restart(),
                _ => {}
            },
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.input.move_left = false,
            Key::Right => self.input.move_right = false,
            Key::Jump => self.input.jump = false,
            Key::Fire => self.input.fire = false,
            _ => {}
        }
    }

    fn edit_name(&mut self, key: Key) {
        match key {
            Key::Backspace => {
                self.name_entry.pop();
            }
            Key::Enter => self.submit_name(),
            Key::Char(c) if highscores::is_name_char(c) => {
                if self.name_entry.chars().count() < MAX_NAME_LEN {
                    self.name_entry.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_name(&mut self) {
        let name = highscores::finalize_name(&self.name_entry);
        self.records.commit(&name, self.state.session.score);
        if let Err(e) = self.records.save_to(self.store.as_mut()) {
            log::warn!("Failed to save records: {}", e);
        }
        self.name_entry.clear();
        self.state.session.phase = GamePhase::GameOver;
    }

    /// Run one display frame
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.input);

        let final_score = events.iter().find_map(|e| match e {
            GameEvent::GameOver { score } => Some(*score),
            _ => None,
        });
        if let Some(score) = final_score {
            self.input = TickInput::default();
            if self.records.is_new_record(score) {
                self.name_entry.clear();
                self.state.session.phase = GamePhase::EnteringName;
            }
        }
        events
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.input = TickInput::default();
        self.name_entry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::Record;
    use crate::persistence::MemoryStore;
    use crate::sim::Platform;
    use glam::Vec2;

    fn settings() -> Settings {
        Settings {
            seed: Some(31),
            ..Default::default()
        }
    }

    fn full_store() -> MemoryStore {
        MemoryStore::with_records(vec![
            Record::new("A", 5000),
            Record::new("B", 4000),
            Record::new("C", 3000),
        ])
    }

    /// Put the game one enemy contact away from game over
    fn doom(game: &mut Game, score: u64) {
        game.state.session.phase = GamePhase::Playing;
        game.state.session.lives = 1;
        game.state.session.score = score;
        game.state.enemies.clear();
        game.state.platforms = vec![Platform::new(0.0, 332.0, 512.0)];
        game.state.spawn_enemy(Vec2::new(104.0, 304.0), Vec2::ZERO, "#f00", false);
    }

    #[test]
    fn test_any_key_leaves_title() {
        let mut game = Game::new(&settings(), Box::new(MemoryStore::new()));
        assert_eq!(game.phase(), GamePhase::Title);
        game.key_down(Key::Fire);
        assert_eq!(game.phase(), GamePhase::Playing);
        // The starting key is not held
        assert!(!game.input().fire);
    }

    #[test]
    fn test_keys_drive_held_input() {
        let mut game = Game::new(&settings(), Box::new(MemoryStore::new()));
        game.key_down(Key::Enter);
        game.key_down(Key::Left);
        game.key_down(Key::Fire);
        assert!(game.input().move_left && game.input().fire);
        game.key_up(Key::Left);
        assert!(!game.input().move_left);
        assert!(game.input().fire);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = Game::new(&settings(), Box::new(MemoryStore::new()));
        game.key_down(Key::Enter);
        game.state.session.score = 700;
        game.key_down(Key::Restart);
        assert_eq!(game.state().session.score, 700);
    }

    #[test]
    fn test_qualifying_game_over_asks_for_name() {
        let mut game = Game::new(&settings(), Box::new(full_store()));
        doom(&mut game, 3500);
        game.key_down(Key::Right);

        let events = game.frame();

        assert!(events.contains(&GameEvent::GameOver { score: 3500 }));
        assert_eq!(game.phase(), GamePhase::EnteringName);
        assert_eq!(game.input(), TickInput::default());
    }

    #[test]
    fn test_low_score_goes_straight_to_game_over() {
        let mut game = Game::new(&settings(), Box::new(full_store()));
        doom(&mut game, 100);
        game.frame();
        assert_eq!(game.phase(), GamePhase::GameOver);

        game.key_down(Key::Restart);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state().session.lives, 3);
        assert_eq!(game.state().session.score, 0);
    }

    #[test]
    fn test_name_entry_rules() {
        let mut game = Game::new(&settings(), Box::new(full_store()));
        doom(&mut game, 3500);
        game.frame();

        for c in "Bub!Bobble Bros".chars() {
            game.key_down(Key::Char(c));
        }
        assert_eq!(game.name_entry(), "BubBobble ");
        game.key_down(Key::Backspace);
        game.key_down(Key::Left);
        assert_eq!(game.name_entry(), "BubBobble");

        game.key_down(Key::Enter);

        assert_eq!(game.phase(), GamePhase::GameOver);
        let names: Vec<&str> = game.records().entries().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "BubBobble"]);
    }

    #[test]
    fn test_blank_name_becomes_anon() {
        let mut game = Game::new(&settings(), Box::new(MemoryStore::new()));
        doom(&mut game, 0);
        game.frame();
        assert_eq!(game.phase(), GamePhase::EnteringName);

        game.key_down(Key::Char(' '));
        game.key_down(Key::Enter);

        assert_eq!(game.records().entries(), &[Record::new("Anon", 0)]);
    }

    #[test]
    fn test_frozen_while_entering_name() {
        let mut game = Game::new(&settings(), Box::new(full_store()));
        doom(&mut game, 3500);
        game.frame();
        let ticks = game.state().time_ticks;
        assert!(game.frame().is_empty());
        assert_eq!(game.state().time_ticks, ticks);
    }
}
