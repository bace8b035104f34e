//! Clock time source implementation
//!
//! Reads the system wall clock, either in local time or in a named IANA
//! timezone.

use anyhow::Result;
use bitcube_core::{ClockReading, TimeSource};
use chrono::{Local, Utc};
use chrono_tz::Tz;
use log::warn;

/// Wall-clock time source
pub struct SystemClockSource {
    /// Parsed timezone; `None` means local time
    timezone: Option<Tz>,
    reading: ClockReading,
}

impl SystemClockSource {
    /// Create a source for a timezone ID ("Local", "Europe/London", ...).
    ///
    /// Unknown IDs fall back to local time.
    pub fn new(timezone: &str) -> Self {
        let timezone = if timezone.eq_ignore_ascii_case("local") {
            None
        } else {
            match timezone.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(e) => {
                    warn!("Unknown timezone '{}' ({}), using local time", timezone, e);
                    None
                }
            }
        };

        let mut source = Self {
            timezone,
            reading: ClockReading::default(),
        };
        source.read_now();
        source
    }

    /// Timezone name in use ("Local" when falling back)
    pub fn timezone_name(&self) -> String {
        match self.timezone {
            Some(tz) => tz.name().to_string(),
            None => "Local".to_string(),
        }
    }

    fn read_now(&mut self) {
        self.reading = match self.timezone {
            Some(tz) => ClockReading::from_datetime(&Utc::now().with_timezone(&tz)),
            None => ClockReading::from_datetime(&Local::now()),
        };
    }
}

impl Default for SystemClockSource {
    fn default() -> Self {
        Self::new("Local")
    }
}

impl TimeSource for SystemClockSource {
    fn id(&self) -> &str {
        "clock"
    }

    fn update(&mut self) -> Result<()> {
        self.read_now();
        Ok(())
    }

    fn reading(&self) -> ClockReading {
        self.reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_plausible(reading: ClockReading) {
        assert!((1..=12).contains(&reading.month));
        assert!((1..=31).contains(&reading.day));
        assert!(reading.hour < 24);
        assert!(reading.minute < 60);
        // chrono reports leap seconds through the nanosecond field
        assert!(reading.second < 60);
    }

    #[test]
    fn test_local_source() {
        let mut source = SystemClockSource::default();
        source.update().unwrap();

        assert_eq!(source.timezone_name(), "Local");
        assert_eq!(source.id(), "clock");
        assert_plausible(source.reading());
    }

    #[test]
    fn test_named_timezone() {
        let mut source = SystemClockSource::new("Europe/London");
        source.update().unwrap();

        assert_eq!(source.timezone_name(), "Europe/London");
        assert_plausible(source.reading());
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_local() {
        let source = SystemClockSource::new("Mars/Olympus_Mons");
        assert_eq!(source.timezone_name(), "Local");
    }
}
