//! Tunables for every page component.
//!
//! The defaults reproduce the shipped landing page. A page may override any
//! subset of them with a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{ "particles": { "density": 15000 } }</script>
//! ```

use serde::Deserialize;

use crate::error::SiteError;

/// DOM id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particles: ParticleConfig,
    pub reveal: RevealConfig,
    pub counters: CounterConfig,
    pub form: FormConfig,
    pub effects: EffectsConfig,
    /// Emit `debug!` lines to the browser console.
    pub verbose: bool,
}

impl SiteConfig {
    /// Parse an override block. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Square pixels of viewport per particle.
    pub density: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// RGB channels of the particle fill; alpha comes from each particle.
    pub color: [u8; 3],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            density: 20_000.0,
            radius_min: 0.5,
            radius_max: 2.5,
            max_speed: 0.15,
            opacity_min: 0.2,
            opacity_max: 0.7,
            color: [58, 242, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub scroll_threshold: f64,
    pub scroll_root_margin: String,
    pub counter_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 0.1,
            scroll_root_margin: "0px 0px -100px 0px".to_string(),
            counter_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub stat_duration_ms: f64,
    pub stat_decimals: usize,
    pub stat_fallback: f64,
    pub stat_box_duration_ms: f64,
    pub stat_box_fallback: f64,
    pub progress_delay_ms: i32,
    pub progress_fallback: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            stat_duration_ms: 2000.0,
            stat_decimals: 1,
            stat_fallback: 6.6,
            stat_box_duration_ms: 2500.0,
            stat_box_fallback: 0.0,
            progress_delay_ms: 200,
            progress_fallback: "100".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub endpoint: String,
    /// How long the "sent" label stays on the submit button.
    pub restore_after_ms: i32,
    pub notification_ms: i32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_string(),
            restore_after_ms: 3000,
            notification_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub glitch_interval_ms: i32,
    pub glitch_chance: f64,
    pub glitch_duration_ms: i32,
    pub trail_min_gap_ms: f64,
    pub trail_chance: f64,
    pub trail_max: usize,
    pub trail_lifetime_ms: i32,
    pub konami_duration_ms: i32,
    pub header_scrolled_at: f64,
    pub anchor_offset: f64,
    pub parallax_fallback: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            glitch_interval_ms: 3000,
            glitch_chance: 0.05,
            glitch_duration_ms: 200,
            trail_min_gap_ms: 100.0,
            trail_chance: 0.15,
            trail_max: 20,
            trail_lifetime_ms: 1000,
            konami_duration_ms: 5000,
            header_scrolled_at: 100.0,
            anchor_offset: 80.0,
            parallax_fallback: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_is_default() {
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "particles": { "density": 10000 }, "verbose": true }"#)
            .unwrap();
        assert_eq!(cfg.particles.density, 10_000.0);
        assert_eq!(cfg.particles.max_speed, 0.15);
        assert_eq!(cfg.counters, CounterConfig::default());
        assert!(cfg.verbose);
    }

    #[test]
    fn submit_button_comes_back_within_three_seconds() {
        assert!(FormConfig::default().restore_after_ms <= 3000);
    }

    #[test]
    fn malformed_block_is_a_decode_error() {
        assert!(matches!(
            SiteConfig::from_json("{ nope"),
            Err(SiteError::Decode(_))
        ));
    }
}
