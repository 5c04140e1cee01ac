use log::{debug, info, trace};
use rand::Rng;

use crate::config::{Settings, INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::domain::{self, AliveSet, Cell, Pattern, Strategy, Viewport};

/// GameState orchestrates the simulation.
/// The engine only knows how to step; pacing and play/pause live here.
#[derive(Clone, Debug)]
pub struct GameState {
    pub alive: AliveSet,
    pub is_playing: bool,
    /// Minimum time between generations, kept within 0..=1000 ms
    pub interval_ms: u32,
    pub strategy: Strategy,
    pub generation: u64,
    /// Time accumulated since the last generation
    pub since_last_step_ms: f32,
    pub last_step_time_ms: f32,
}

impl GameState {
    pub fn new(interval_ms: u32, strategy: Strategy) -> Self {
        Self {
            alive: AliveSet::new(),
            is_playing: false,
            interval_ms: interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS),
            strategy,
            generation: 0,
            since_last_step_ms: 0.0,
            last_step_time_ms: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.interval_ms, settings.strategy)
    }

    /// Set playing state (builder pattern)
    pub fn with_playing(mut self, playing: bool) -> Self {
        self.is_playing = playing;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_playing(mut self) -> Self {
        self.is_playing = !self.is_playing;
        info!("{}", if self.is_playing { "playing" } else { "paused" });
        self
    }

    /// Shift the step interval, clamped to 0..=1000 ms
    pub fn adjust_interval(mut self, delta_ms: i64) -> Self {
        let adjusted = (i64::from(self.interval_ms) + delta_ms)
            .clamp(i64::from(MIN_INTERVAL_MS), i64::from(MAX_INTERVAL_MS));
        self.interval_ms = adjusted as u32;
        debug!("step interval now {} ms", self.interval_ms);
        self
    }

    pub fn faster(self) -> Self {
        self.adjust_interval(-i64::from(INTERVAL_STEP_MS))
    }

    pub fn slower(self) -> Self {
        self.adjust_interval(i64::from(INTERVAL_STEP_MS))
    }

    pub fn toggle_strategy(mut self) -> Self {
        self.strategy = self.strategy.toggled();
        info!("neighbor counting: {}", self.strategy.name());
        self
    }

    pub fn paint(mut self, cell: Cell) -> Self {
        self.alive = domain::toggle_cell(self.alive, cell, true);
        self
    }

    pub fn erase(mut self, cell: Cell) -> Self {
        self.alive = domain::toggle_cell(self.alive, cell, false);
        self
    }

    /// Remove every cell and reset the generation counter. Play state is kept.
    pub fn clear(mut self) -> Self {
        debug!("clearing {} cells", self.alive.len());
        self.alive = domain::clear(self.alive);
        self.generation = 0;
        self
    }

    pub fn randomize(self, viewport: Viewport, density: f64) -> Self {
        self.randomize_with(viewport, density, &mut rand::rng())
    }

    /// Replace the population with a random soup; the generation counter and
    /// step clock start over
    pub fn randomize_with<R: Rng>(mut self, viewport: Viewport, density: f64, rng: &mut R) -> Self {
        self.alive = domain::randomize(viewport, density, rng);
        self.generation = 0;
        self.since_last_step_ms = 0.0;
        debug!("randomized {} cells", self.alive.len());
        self
    }

    /// Stamp a pattern centered on `cell`
    pub fn place_pattern(mut self, pattern: &Pattern, cell: Cell) -> Self {
        let origin = pattern.centered_on(cell);
        self.alive = pattern.place_on(self.alive, origin);
        debug!("placed {} at {:?}", pattern.name, origin);
        self
    }

    /// Advance the clock by one frame; steps once the interval has elapsed.
    /// `viewport` is whatever is visible right now, so a resize takes effect
    /// on the next generation.
    pub fn tick(mut self, delta_seconds: f32, viewport: Viewport) -> Self {
        if !self.is_playing {
            return self;
        }

        self.since_last_step_ms += delta_seconds * 1000.0;

        if self.since_last_step_ms >= self.interval_ms as f32 {
            let start = std::time::Instant::now();
            self.alive = domain::step_with(&self.alive, viewport, self.strategy);
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.generation += 1;
            self.since_last_step_ms = 0.0;
            trace!(
                "generation {}: {} alive ({:.2} ms)",
                self.generation,
                self.alive.len(),
                self.last_step_time_ms
            );
        }

        self
    }
}
