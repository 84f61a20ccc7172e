//! Sound effect triggers
//!
//! Procedural effects, described as short tone sequences. The simulation
//! reports events; this module decides which ones make a sound and hands
//! the effect to an [`AudioSink`] for playback.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bubble closes around an enemy - quick rising blip
    Capture,
    /// Captured enemy popped - cheerful three-note climb
    Pop,
    /// Player lost a life - falling three-note drop
    Hurt,
}

/// Oscillator shape for a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
}

/// One oscillator note, started `delay_secs` after the effect begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub waveform: Waveform,
    pub delay_secs: f32,
}

impl Tone {
    /// Gain at note start; it decays exponentially to `END_GAIN` over the note
    pub const START_GAIN: f32 = 0.3;
    pub const END_GAIN: f32 = 0.01;

    /// Envelope gain `secs` after the note starts; silent once it ends
    pub fn gain_at(&self, secs: f32) -> f32 {
        if !(0.0..self.duration_secs).contains(&secs) {
            return 0.0;
        }
        let progress = secs / self.duration_secs;
        Self::START_GAIN * (Self::END_GAIN / Self::START_GAIN).powf(progress)
    }

    const fn new(frequency_hz: f32, duration_secs: f32, waveform: Waveform, delay_secs: f32) -> Self {
        Self {
            frequency_hz,
            duration_secs,
            waveform,
            delay_secs,
        }
    }
}

const CAPTURE_TONES: [Tone; 2] = [
    Tone::new(600.0, 0.05, Waveform::Sine, 0.0),
    Tone::new(900.0, 0.1, Waveform::Sine, 0.05),
];

const POP_TONES: [Tone; 3] = [
    Tone::new(500.0, 0.08, Waveform::Square, 0.0),
    Tone::new(700.0, 0.08, Waveform::Square, 0.08),
    Tone::new(900.0, 0.15, Waveform::Square, 0.16),
];

const HURT_TONES: [Tone; 3] = [
    Tone::new(400.0, 0.1, Waveform::Square, 0.0),
    Tone::new(300.0, 0.1, Waveform::Square, 0.1),
    Tone::new(200.0, 0.2, Waveform::Square, 0.2),
];

impl SoundEffect {
    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::EnemyCaptured { .. } => Some(SoundEffect::Capture),
            GameEvent::EnemyPopped { .. } => Some(SoundEffect::Pop),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::Hurt),
            _ => None,
        }
    }

    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundEffect::Capture => &CAPTURE_TONES,
            SoundEffect::Pop => &POP_TONES,
            SoundEffect::Hurt => &HURT_TONES,
        }
    }

    /// Time from the first note starting to the last one ending
    pub fn total_duration_secs(&self) -> f32 {
        self.tones()
            .iter()
            .map(|t| t.delay_secs + t.duration_secs)
            .fold(0.0, f32::max)
    }
}

/// Playback backend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink {
    pub played: usize,
}

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::debug!("Sound: {:?} ({} tones)", effect, effect.tones().len());
    }
}

/// Play the effect for every event that has one, in order
pub fn dispatch(events: &[GameEvent], sink: &mut dyn AudioSink) {
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
    }
}
