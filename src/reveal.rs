//! Which elements get revealed, how eagerly, and the one-shot guard that
//! keeps each reveal from firing twice.

use crate::config::{CounterConfig, RevealConfig};

/// The four observer families on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// Generic fade/slide-in of cards and headings.
    Scroll,
    /// Percentage stats counting up with one decimal.
    Stat,
    /// Integer stat boxes.
    StatBox,
    /// Progress bar fills.
    Progress,
}

impl RevealKind {
    pub const ALL: [RevealKind; 4] = [
        RevealKind::Scroll,
        RevealKind::Stat,
        RevealKind::StatBox,
        RevealKind::Progress,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            RevealKind::Scroll => ".card, .hero-left, .hero-badge, .section-title",
            RevealKind::Stat => ".stat",
            RevealKind::StatBox => ".stat-number",
            RevealKind::Progress => ".progress-fill",
        }
    }

    /// Class that records "already handled" on the element itself.
    pub fn marker(self) -> &'static str {
        match self {
            RevealKind::Scroll => "visible",
            RevealKind::Stat | RevealKind::StatBox => "counted",
            RevealKind::Progress => "animated",
        }
    }

    /// Class added up front so the stylesheet can hide the element until
    /// it is revealed.
    pub fn pending_class(self) -> Option<&'static str> {
        match self {
            RevealKind::Scroll => Some("animate-on-scroll"),
            _ => None,
        }
    }

    /// Data attribute carrying the element's numeric target.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            RevealKind::Stat => Some("data-value"),
            RevealKind::StatBox => Some("data-target"),
            RevealKind::Progress => Some("data-progress"),
            RevealKind::Scroll => None,
        }
    }

    pub fn options(self, cfg: &RevealConfig) -> ObserverOptions {
        match self {
            RevealKind::Scroll => ObserverOptions {
                threshold: cfg.scroll_threshold,
                root_margin: Some(cfg.scroll_root_margin.clone()),
            },
            _ => ObserverOptions {
                threshold: cfg.counter_threshold,
                root_margin: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

/// Counter parameters derived from an element's kind and its raw data attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub duration_ms: f64,
    pub decimals: usize,
}

impl CounterSpec {
    /// `None` for kinds that do not count.
    pub fn for_kind(kind: RevealKind, raw: Option<&str>, cfg: &CounterConfig) -> Option<Self> {
        use crate::counter::{parse_decimal, parse_integer};
        match kind {
            RevealKind::Stat => Some(CounterSpec {
                target: parse_decimal(raw, cfg.stat_fallback),
                duration_ms: cfg.stat_duration_ms,
                decimals: cfg.stat_decimals,
            }),
            RevealKind::StatBox => Some(CounterSpec {
                target: parse_integer(raw, cfg.stat_box_fallback),
                duration_ms: cfg.stat_box_duration_ms,
                decimals: 0,
            }),
            _ => None,
        }
    }
}

/// Width style for a progress fill, e.g. `"75%"`.
pub fn progress_width(raw: Option<&str>, fallback: &str) -> String {
    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    };
    format!("{value}%")
}

/// Monotonic revealed/not-revealed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Restore from an existing marking.
    pub fn from_marked(marked: bool) -> Self {
        RevealLatch { revealed: marked }
    }

    /// Feed an intersection notification. Returns `true` exactly once: the
    /// first time the element is reported as intersecting.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch::from_marked(true));
    }

    #[test]
    fn latch_respects_existing_marker() {
        let mut latch = RevealLatch::from_marked(true);
        assert!(!latch.observe(true));
    }

    #[test]
    fn observer_options_per_kind() {
        let cfg = RevealConfig::default();
        let scroll = RevealKind::Scroll.options(&cfg);
        assert_eq!(scroll.threshold, 0.1);
        assert_eq!(scroll.root_margin.as_deref(), Some("0px 0px -100px 0px"));
        for kind in [RevealKind::Stat, RevealKind::StatBox, RevealKind::Progress] {
            assert_eq!(kind.options(&cfg).threshold, 0.5);
            assert_eq!(kind.options(&cfg).root_margin, None);
        }
    }

    #[test]
    fn counter_specs_use_fallbacks() {
        let cfg = CounterConfig::default();
        let stat = CounterSpec::for_kind(RevealKind::Stat, None, &cfg).unwrap();
        assert_eq!(stat.target, 6.6);
        assert_eq!(stat.duration_ms, 2000.0);
        assert_eq!(stat.decimals, 1);

        let boxed = CounterSpec::for_kind(RevealKind::StatBox, Some("oops"), &cfg).unwrap();
        assert_eq!(boxed.target, 0.0);
        assert_eq!(boxed.duration_ms, 2500.0);
        assert_eq!(boxed.decimals, 0);

        assert!(CounterSpec::for_kind(RevealKind::Progress, Some("50"), &cfg).is_none());
    }

    #[test]
    fn attributes_per_kind() {
        assert_eq!(RevealKind::Stat.attribute(), Some("data-value"));
        assert_eq!(RevealKind::StatBox.attribute(), Some("data-target"));
        assert_eq!(RevealKind::Progress.attribute(), Some("data-progress"));
        assert_eq!(RevealKind::Scroll.attribute(), None);
    }

    #[test]
    fn progress_width_defaults_to_full() {
        assert_eq!(progress_width(Some("75"), "100"), "75%");
        assert_eq!(progress_width(None, "100"), "100%");
        assert_eq!(progress_width(Some(""), "100"), "100%");
    }
}
