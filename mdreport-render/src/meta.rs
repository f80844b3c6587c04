//! Document metadata extraction
//!
//! Pulls the display title and report date out of markdown source before
//! rendering. Both lookups are tolerant: a document without an H1 gets the
//! fallback title, a document without a date stamp gets today's date from
//! the supplied clock.

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Title used when the source has no level-1 heading
pub const FALLBACK_TITLE: &str = "Analysis Report";

/// Timezone used when neither environment variable nor config names one
pub const DEFAULT_TIMEZONE: &str = "Asia/Taipei";

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+?)$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Title and date extracted from a markdown document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
}

/// Source of "today" for date fallbacks.
///
/// Production code uses [`SystemClock`]; tests pin a [`FixedClock`] so date
/// fallbacks stay deterministic.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Human-readable generation timestamp for page footers
    fn timestamp(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// Clock backed by the system time, localized to a named timezone.
///
/// The zone is resolved once at construction. An unparsable zone name falls
/// back to machine-local time rather than failing the conversion.
pub struct SystemClock {
    zone: Option<Tz>,
}

impl SystemClock {
    /// Resolve the timezone from the environment, then `default_zone`.
    ///
    /// Lookup order: `MDREPORT_TZ`, `TZ`, then the passed default (config
    /// supplies [`DEFAULT_TIMEZONE`] when it has nothing better).
    pub fn from_env(default_zone: &str) -> Self {
        let name = std::env::var("MDREPORT_TZ")
            .or_else(|_| std::env::var("TZ"))
            .unwrap_or_else(|_| default_zone.to_string());

        SystemClock {
            zone: name.parse::<Tz>().ok(),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.zone {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => chrono::Local::now().date_naive(),
        }
    }

    fn timestamp(&self) -> String {
        match self.zone {
            Some(tz) => Utc::now().with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string(),
            None => chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Clock pinned to a fixed date, for tests
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Extract title and date from markdown source.
///
/// The title is the text of the first level-1 heading; the date is the first
/// `YYYY-MM-DD` occurrence anywhere in the source. Missing fields fall back
/// to [`FALLBACK_TITLE`] and the clock's today.
pub fn extract(source: &str, clock: &dyn Clock) -> DocumentMeta {
    extract_with_fallback(source, None, clock)
}

/// Like [`extract`], but consults a filename for the date before giving up.
///
/// Report files are commonly named `market_2025-07-14.md`; when the body
/// carries no date the filename stamp is used ahead of today's date.
pub fn extract_with_fallback(
    source: &str,
    filename: Option<&str>,
    clock: &dyn Clock,
) -> DocumentMeta {
    let title = TITLE_RE
        .captures(source)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let date = find_date(source)
        .or_else(|| filename.and_then(find_date))
        .unwrap_or_else(|| {
            let today = clock.today();
            format!("{:04}-{:02}-{:02}", today.year(), today.month(), today.day())
        });

    DocumentMeta { title, date }
}

/// First `YYYY-MM-DD` occurrence in the text, if any
pub fn find_date(text: &str) -> Option<String> {
    DATE_RE.find(text).map(|m| m.as_str().to_string())
}
