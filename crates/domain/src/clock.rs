// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business wall clock.
//!
//! Fiscal years and the time-of-day used by unlinked purchase request
//! numbers are computed from the wall clock of the company's declared
//! timezone, not from UTC.

use crate::error::DomainError;
use crate::fiscal_year::FiscalYear;
use chrono::{Datelike, Timelike, Utc};
use chrono_tz::Tz;
use time::{Date, Month, PrimitiveDateTime, Time};

/// The timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockSource {
    System(Tz),
    Fixed(PrimitiveDateTime),
}

/// Produces "now" as a wall-clock timestamp in the business timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessClock {
    source: ClockSource,
}

impl BusinessClock {
    /// Creates a clock reading the system time in the named IANA timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone name is unknown.
    pub fn in_timezone(name: &str) -> Result<Self, DomainError> {
        let tz: Tz = name
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self {
            source: ClockSource::System(tz),
        })
    }

    /// Creates a clock that always reports the given wall-clock time.
    #[must_use]
    pub const fn fixed(now: PrimitiveDateTime) -> Self {
        Self {
            source: ClockSource::Fixed(now),
        }
    }

    /// Returns the timezone name, or `"fixed"` for a fixed clock.
    #[must_use]
    pub fn timezone_name(&self) -> &'static str {
        match self.source {
            ClockSource::System(tz) => tz.name(),
            ClockSource::Fixed(_) => "fixed",
        }
    }

    /// Returns the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the local time cannot be represented.
    pub fn now(&self) -> Result<PrimitiveDateTime, DomainError> {
        match self.source {
            ClockSource::Fixed(now) => Ok(now),
            ClockSource::System(tz) => wall_clock(&Utc::now().with_timezone(&tz)),
        }
    }

    /// Returns the current calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the local time cannot be represented.
    pub fn today(&self) -> Result<Date, DomainError> {
        Ok(self.now()?.date())
    }

    /// Returns the fiscal year containing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the local time cannot be represented.
    pub fn fiscal_year(&self) -> Result<FiscalYear, DomainError> {
        Ok(FiscalYear::containing(self.today()?))
    }
}

/// Converts a chrono local timestamp into a `time` wall-clock value.
fn wall_clock<T: Datelike + Timelike>(local: &T) -> Result<PrimitiveDateTime, DomainError> {
    let month: Month = Month::try_from(component(local.month(), "month")?)
        .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))?;
    let date: Date = Date::from_calendar_date(local.year(), month, component(local.day(), "day")?)
        .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))?;
    let time: Time = Time::from_hms(
        component(local.hour(), "hour")?,
        component(local.minute(), "minute")?,
        component(local.second(), "second")?,
    )
    .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))?;

    Ok(PrimitiveDateTime::new(date, time))
}

fn component(value: u32, name: &str) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| DomainError::InvalidTimestamp(format!("{name} {value}")))
}
