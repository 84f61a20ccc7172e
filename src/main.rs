//! Bubble Pop headless driver
//!
//! Runs the game unattended under the autopilot and reports the outcome.
//! Usage: `bubble-pop [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use bubble_pop::audio::{self, LogSink};
    use bubble_pop::autopilot::autopilot_input;
    use bubble_pop::persistence::JsonFileStore;
    use bubble_pop::sim::{GameEvent, GamePhase};
    use bubble_pop::{Game, Key, Settings};

    env_logger::init();
    log::info!("Bubble Pop (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bubble_pop.json"));
    let settings = Settings::load(&settings_path);
    let store = JsonFileStore::new(&settings.records_path);
    log::info!("Records kept in {:?}", store.path());
    let mut game = Game::new(&settings, Box::new(store));
    let mut sink = LogSink::default();

    // Leave the title screen
    game.key_down(Key::Enter);

    let mut frames = 0;
    while frames < settings.demo_frames {
        match game.phase() {
            GamePhase::Playing => {
                game.set_input(autopilot_input(game.state()));
                let events = game.frame();
                audio::dispatch(&events, &mut sink);
                for event in &events {
                    match event {
                        GameEvent::LevelCleared { level, bonus } => {
                            log::info!("Frame {}: level {} (+{})", frames, level, bonus)
                        }
                        GameEvent::PlayerHit { lives_left } => {
                            log::info!("Frame {}: hit, {} lives left", frames, lives_left)
                        }
                        _ => {}
                    }
                }
                frames += 1;
            }
            GamePhase::EnteringName => {
                for c in "BOT".chars() {
                    game.key_down(Key::Char(c));
                }
                game.key_down(Key::Enter);
            }
            GamePhase::GameOver | GamePhase::Title => break,
        }
    }

    let session = &game.state().session;
    log::info!(
        "Finished after {} frames: score {}, level {}, lives {}, {} sounds",
        frames,
        session.score,
        session.level,
        session.lives,
        sink.played
    );

    println!("Score {} on level {}", session.score, session.level);
    match game.records().top_score() {
        Some(best) => println!("Best so far: {}", best),
        None => println!("No records yet"),
    }
    for (i, record) in game.records().entries().iter().enumerate() {
        println!("{}. {} - {}", i + 1, record.name, record.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the wasm surface
}
