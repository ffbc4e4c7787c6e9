//! Cosmetic one-shot effects. Each component owns its own state.

use std::collections::VecDeque;

use fastrand::Rng;

use crate::config::EffectsConfig;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Rolling buffer of the last ten keys pressed.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    keys: VecDeque<String>,
}

impl KonamiDetector {
    /// Push a key; `true` when the buffer now spells the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        self.keys.push_back(key.to_string());
        while self.keys.len() > KONAMI_SEQUENCE.len() {
            self.keys.pop_front();
        }
        self.keys.len() == KONAMI_SEQUENCE.len()
            && self.keys.iter().zip(KONAMI_SEQUENCE).all(|(k, want)| k == want)
    }
}

/// Throttled, capped mouse trail.
///
/// `T` is whatever handle the DOM layer needs to remove a dot later.
#[derive(Debug)]
pub struct MouseTrail<T> {
    dots: VecDeque<T>,
    last_spawn_ms: f64,
    min_gap_ms: f64,
    chance: f64,
    max: usize,
}

impl<T> MouseTrail<T> {
    pub fn new(cfg: &EffectsConfig) -> Self {
        MouseTrail {
            dots: VecDeque::new(),
            last_spawn_ms: f64::NEG_INFINITY,
            min_gap_ms: cfg.trail_min_gap_ms,
            chance: cfg.trail_chance,
            max: cfg.trail_max,
        }
    }

    /// Decide whether a mousemove at `now_ms` spawns a dot. `roll` is a
    /// uniform sample in `[0, 1)`.
    pub fn should_spawn(&mut self, now_ms: f64, roll: f64) -> bool {
        if now_ms - self.last_spawn_ms > self.min_gap_ms && roll > 1.0 - self.chance {
            self.last_spawn_ms = now_ms;
            return true;
        }
        false
    }

    /// Track a freshly spawned dot. Returns the oldest dot when the cap
    /// is exceeded so the caller can remove it.
    pub fn push(&mut self, dot: T) -> Option<T> {
        self.dots.push_back(dot);
        if self.dots.len() > self.max {
            return self.dots.pop_front();
        }
        None
    }
}

/// Roll for the periodic title glitch.
pub fn glitch_roll(rng: &mut Rng, chance: f64) -> bool {
    rng.f64() > 1.0 - chance
}

/// Unlock delay for the `index`th achievement badge.
pub fn achievement_delay_ms(index: usize) -> i32 {
    index as i32 * 200 + 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn konami_matches_only_full_sequence() {
        let mut k = KonamiDetector::default();
        for key in &KONAMI_SEQUENCE[..9] {
            assert!(!k.push(key));
        }
        assert!(k.push("a"));
        assert!(!k.push("a"));
    }

    #[test]
    fn konami_ignores_leading_noise() {
        let mut k = KonamiDetector::default();
        k.push("x");
        k.push("Enter");
        let hit = KONAMI_SEQUENCE.iter().map(|key| k.push(key)).last();
        assert_eq!(hit, Some(true));
    }

    #[test]
    fn trail_is_throttled() {
        let cfg = EffectsConfig::default();
        let mut trail: MouseTrail<u32> = MouseTrail::new(&cfg);
        assert!(trail.should_spawn(1000.0, 0.9));
        assert!(!trail.should_spawn(1050.0, 0.99));
        assert!(!trail.should_spawn(1200.0, 0.5));
        assert!(trail.should_spawn(1200.0, 0.9));
    }

    #[test]
    fn trail_evicts_oldest_past_cap() {
        let cfg = EffectsConfig::default();
        let mut trail = MouseTrail::new(&cfg);
        for i in 0..20 {
            assert_eq!(trail.push(i), None);
        }
        assert_eq!(trail.push(20), Some(0));
        assert_eq!(trail.push(21), Some(1));
    }

    #[test]
    fn achievements_are_staggered() {
        assert_eq!(achievement_delay_ms(0), 1000);
        assert_eq!(achievement_delay_ms(2), 1400);
    }

    #[test]
    fn glitch_never_fires_at_zero_chance() {
        let mut rng = Rng::with_seed(3);
        assert!((0..1000).all(|_| !glitch_roll(&mut rng, 0.0)));
    }
}
