//! Time units.
//!
//! Minutes, hours and days are the civil fixed-length units (`60 s`, `3600 s`, `86400 s`); leap seconds are not
//! modelled.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for time.
#[derive(Debug, Dimension)]
#[dimension(name = "Time", si = SECONDS)]
pub enum TimeDim {}

define_units! {
    /// A duration, stored in seconds.
    quantity Time;
    /// A unit of [`Time`].
    unit TimeUnit for TimeDim;
    {
        /// Second (SI base unit).
        SECONDS = "s", Scale::IDENTITY => from_seconds, seconds;
        /// Nanosecond (`1e-9 s`).
        NANOSECONDS = "ns", Scale::per(1e9) => from_nanoseconds, nanoseconds;
        /// Microsecond (`1e-6 s`).
        MICROSECONDS = "µs", Scale::per(1e6) => from_microseconds, microseconds;
        /// Millisecond (`1e-3 s`).
        MILLISECONDS = "ms", Scale::per(1e3) => from_milliseconds, milliseconds;
        /// Minute (`60 s`).
        MINUTES = "min", Scale::times(60.0) => from_minutes, minutes;
        /// Hour (`3600 s`).
        HOURS = "h", Scale::times(3600.0) => from_hours, hours;
        /// Day (`86400 s`).
        DAYS = "d", Scale::times(86_400.0) => from_days, days;
    }
}
