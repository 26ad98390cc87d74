// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use chrono::NaiveDate;

/// Formats an ISO `YYYY-MM-DD` date as `DD.MM.YYYY` for display.
///
/// Unparseable input is returned unchanged, an empty string stays empty.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_date("2024-03-09"), "09.03.2024");
/// ```
pub(crate) fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Upper-cased first two characters of a name, used for avatar badges.
pub(crate) fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// Background style of the progress slider filled up to `percent`.
pub(crate) fn progress_background(percent: u8) -> String {
    format!("background: linear-gradient(90deg, var(--accent) {percent}%, rgba(15,23,42,0.1) 0)")
}
