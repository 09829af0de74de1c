//! FFmpeg `-progress` line classification.
//!
//! FFmpeg emits blocks of `key=value` lines terminated by
//! `progress=continue` or `progress=end`. Only the keys carrying the output
//! timestamp and the end marker affect job state; everything else is noise.

/// A progress-relevant event parsed from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// `out_time_us=<microseconds>`
    ElapsedMicros(u64),
    /// `out_time=HH:MM:SS[.fraction]`, fraction discarded
    ElapsedHms { hours: u64, minutes: u64, seconds: u64 },
    /// `progress=end`
    End,
}

impl ProgressEvent {
    /// Elapsed media time carried by this event, in seconds.
    ///
    /// `End` reports the full job duration.
    pub fn elapsed_seconds(&self, duration_secs: f64) -> f64 {
        match *self {
            Self::ElapsedMicros(us) => us as f64 / 1_000_000.0,
            Self::ElapsedHms {
                hours,
                minutes,
                seconds,
            } => hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64,
            Self::End => duration_secs,
        }
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Recognized event
    Event(ProgressEvent),
    /// Recognized key with an unparseable value
    Malformed,
    /// Any other line
    Other,
}

/// Classify one line of FFmpeg progress output.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    let Some((key, value)) = line.split_once('=') else {
        return LineKind::Other;
    };

    match key {
        "out_time_us" => match value.parse::<u64>() {
            Ok(us) => LineKind::Event(ProgressEvent::ElapsedMicros(us)),
            Err(_) => LineKind::Malformed,
        },
        "out_time" => parse_hms(value)
            .map(LineKind::Event)
            .unwrap_or(LineKind::Malformed),
        "progress" if value == "end" => LineKind::Event(ProgressEvent::End),
        _ => LineKind::Other,
    }
}

/// Parse `HH:MM:SS[.fraction]` into whole hours, minutes and seconds.
fn parse_hms(value: &str) -> Option<ProgressEvent> {
    let whole = value.split('.').next().unwrap_or_default();
    let mut parts = whole.split(':');

    let hours = parts.next()?.parse().ok()?;
    let minutes = parts.next()?.parse().ok()?;
    let seconds = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(ProgressEvent::ElapsedHms {
        hours,
        minutes,
        seconds,
    })
}
