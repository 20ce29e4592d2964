// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Today's date in UTC, the default for the appointment date picker.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`, the form the backend expects in paths.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an appointment time for display in a table cell.
pub fn format_slot(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}
