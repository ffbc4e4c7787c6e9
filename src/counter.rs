//! Timed count-up animation for stat elements.

/// Cubic ease-out: fast start, decelerating approach to 1.
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Render `value` with `decimals` digits, or floored to an integer when
/// `decimals` is zero.
pub fn format_value(value: f64, decimals: usize) -> String {
    if decimals > 0 {
        format!("{:.*}", decimals, value)
    } else {
        format!("{}", value.floor() as i64)
    }
}

/// Parse a decimal attribute such as `data-value`, falling back on garbage.
///
/// Like the browser's `parseFloat`, a numeric prefix is accepted
/// (`"6.6%"` reads as 6.6, `"1e3"` as 1000). Non-finite results fall back.
pub fn parse_decimal(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| numeric_prefix(s.trim(), true).parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Parse an integer attribute such as `data-target`, falling back on garbage.
pub fn parse_integer(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| numeric_prefix(s.trim(), false).parse::<i64>().ok())
        .map(|v| v as f64)
        .unwrap_or(fallback)
}

fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    end = digits_from(end);
    if !allow_fraction {
        return &s[..end];
    }
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }
    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'-' | b'+')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}

/// One sample of a running counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Count-up from 0 to `target` over `duration_ms`.
///
/// The first sample pins the start time, mirroring how the browser hands the
/// first frame timestamp to the callback.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    decimals: usize,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64, decimals: usize) -> Self {
        CounterAnimation {
            target,
            duration_ms,
            decimals,
            started_at: None,
        }
    }

    /// Start the clock explicitly, e.g. from `performance.now()` at trigger time.
    pub fn start_at(mut self, now_ms: f64) -> Self {
        self.started_at = Some(now_ms);
        self
    }

    /// Elapsed fraction in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        let start = self.started_at.unwrap_or(now_ms);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now_ms`.
    pub fn value_at(&self, now_ms: f64) -> f64 {
        self.target * ease_out_cubic(self.progress(now_ms))
    }

    /// Produce the text for the frame at `now_ms`. The final frame always
    /// carries the exact target.
    pub fn sample(&mut self, now_ms: f64) -> CounterFrame {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
        let p = self.progress(now_ms);
        if p < 1.0 {
            return CounterFrame {
                text: format_value(self.value_at(now_ms), self.decimals),
                done: false,
            };
        }
        CounterFrame {
            text: self.final_text(),
            done: true,
        }
    }

    fn final_text(&self) -> String {
        if self.decimals > 0 {
            format!("{:.*}", self.decimals, self.target)
        } else {
            format!("{}", self.target)
        }
    }
}
