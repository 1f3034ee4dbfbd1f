use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};

use super::case::CaseTimestamp;

/// Source of the informational wall-clock time stamped onto cases and handover reports.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn timestamp(&self) -> CaseTimestamp {
        CaseTimestamp::from_datetime(self.now())
    }
}

/// Reads the host clock in the host's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant. Used to make evaluations reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}

impl CaseTimestamp {
    pub fn from_datetime(at: DateTime<FixedOffset>) -> Self {
        Self {
            iso: at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            local: at.format("%d/%m/%Y, %H:%M:%S").to_string(),
            timezone: at.format("UTC%:z").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_renders_iso_local_and_offset() {
        let at = DateTime::parse_from_rfc3339("2025-03-09T21:05:07+01:00").expect("valid");
        let stamp = FixedClock::new(at).timestamp();

        assert_eq!(stamp.iso, "2025-03-09T20:05:07.000Z");
        assert_eq!(stamp.local, "09/03/2025, 21:05:07");
        assert_eq!(stamp.timezone, "UTC+01:00");
    }
}
