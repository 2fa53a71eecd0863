//! Static resume document source.
//!
//! The document is a JSON file served next to the application (or read from
//! disk) with named lists of work, education and certification entries. The
//! source merges them into one timeline sorted by date, most recent first.
//!
//! ```json
//! {
//!   "experiences": [
//!     { "title": "Data Engineer", "company": "Acme", "date": "Jan 2023 - Present",
//!       "location": "Remote", "description": ["Built pipelines", "Ran on-call"] }
//!   ],
//!   "education": [
//!     { "degree": "B.Tech", "institution": "State University", "year": "2021" }
//!   ]
//! }
//! ```

use std::cmp::Ordering;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use vitrine_core::logging::targets;

use super::ListDataSource;
use crate::error::Result;
use crate::http::HttpClient;

/// Free-text description, either a paragraph or a bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// A single paragraph.
    Text(String),
    /// Bullet points in display order.
    Lines(Vec<String>),
}

impl Description {
    /// The description as bullet lines. A paragraph becomes one line.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Text(text) if text.trim().is_empty() => Vec::new(),
            Self::Text(text) => vec![text.as_str()],
            Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

/// One entry of a resume list.
///
/// Documents name fields differently per list (`role` for jobs, `degree` for
/// schools, `issuer` for certificates). When an entry carries more than one
/// spelling of a field, the first in this order wins:
///
/// | Field          | Accepted keys                                      |
/// |----------------|----------------------------------------------------|
/// | `title`        | `title`, `role`, `degree`                          |
/// | `organization` | `organization`, `company`, `institution`, `issuer` |
/// | `date`         | `date`, `year`                                     |
/// | `description`  | `description`, `details`                           |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResumeEntry")]
pub struct ResumeEntry {
    /// Job title, degree or certificate name.
    pub title: String,
    /// Employer, school or issuer.
    pub organization: String,
    /// Date, year or date range as displayed.
    pub date: String,
    /// Where it took place.
    pub location: Option<String>,
    /// Details.
    pub description: Option<Description>,
}

/// Every spelling a resume entry field may use.
#[derive(Deserialize)]
struct RawResumeEntry {
    title: Option<String>,
    role: Option<String>,
    degree: Option<String>,
    organization: Option<String>,
    company: Option<String>,
    institution: Option<String>,
    issuer: Option<String>,
    date: Option<String>,
    year: Option<String>,
    location: Option<String>,
    description: Option<Description>,
    details: Option<Description>,
}

impl TryFrom<RawResumeEntry> for ResumeEntry {
    type Error = String;

    fn try_from(raw: RawResumeEntry) -> std::result::Result<Self, String> {
        let missing = |field: &str| format!("missing field `{field}`");
        Ok(Self {
            title: raw
                .title
                .or(raw.role)
                .or(raw.degree)
                .ok_or_else(|| missing("title"))?,
            organization: raw
                .organization
                .or(raw.company)
                .or(raw.institution)
                .or(raw.issuer)
                .ok_or_else(|| missing("organization"))?,
            date: raw.date.or(raw.year).ok_or_else(|| missing("date"))?,
            location: raw.location,
            description: raw.description.or(raw.details),
        })
    }
}

/// The static resume document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawResumeDocument")]
pub struct ResumeDocument {
    /// Work history, read from `experiences`, `experience` or `work`.
    pub experiences: Vec<ResumeEntry>,
    /// Education history.
    pub education: Vec<ResumeEntry>,
    /// Certifications.
    pub certifications: Vec<ResumeEntry>,
}

#[derive(Deserialize)]
struct RawResumeDocument {
    experiences: Option<Vec<ResumeEntry>>,
    experience: Option<Vec<ResumeEntry>>,
    work: Option<Vec<ResumeEntry>>,
    #[serde(default)]
    education: Vec<ResumeEntry>,
    #[serde(default)]
    certifications: Vec<ResumeEntry>,
}

impl From<RawResumeDocument> for ResumeDocument {
    fn from(raw: RawResumeDocument) -> Self {
        Self {
            experiences: raw
                .experiences
                .or(raw.experience)
                .or(raw.work)
                .unwrap_or_default(),
            education: raw.education,
            certifications: raw.certifications,
        }
    }
}

/// Which list a timeline entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A job.
    Work,
    /// A degree or course.
    Education,
    /// A certificate.
    Certification,
}

/// A resume entry placed on the merged timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Source list.
    pub kind: EntryKind,
    /// Job title, degree or certificate name.
    pub title: String,
    /// Employer, school or issuer.
    pub organization: String,
    /// Date as displayed.
    pub date: String,
    /// Where it took place.
    pub location: Option<String>,
    /// Bullet lines, possibly empty.
    pub description: Vec<String>,
    /// Parsed sort date; `None` when the date text is not recognized.
    pub sort_date: Option<NaiveDate>,
}

impl TimelineEntry {
    fn from_entry(kind: EntryKind, entry: ResumeEntry) -> Self {
        let sort_date = parse_timeline_date(&entry.date);
        let description = entry
            .description
            .as_ref()
            .map(|d| d.lines().into_iter().map(str::to_owned).collect())
            .unwrap_or_default();
        Self {
            kind,
            title: entry.title,
            organization: entry.organization,
            date: entry.date,
            location: entry.location.filter(|l| !l.trim().is_empty()),
            description,
            sort_date,
        }
    }
}

impl ResumeDocument {
    /// Merge every list into one timeline, most recent first.
    ///
    /// Entries whose dates cannot be parsed go last. Ties keep document order
    /// (work, then education, then certifications).
    pub fn into_timeline(self) -> Vec<TimelineEntry> {
        let mut timeline: Vec<TimelineEntry> = self
            .experiences
            .into_iter()
            .map(|e| TimelineEntry::from_entry(EntryKind::Work, e))
            .chain(
                self.education
                    .into_iter()
                    .map(|e| TimelineEntry::from_entry(EntryKind::Education, e)),
            )
            .chain(
                self.certifications
                    .into_iter()
                    .map(|e| TimelineEntry::from_entry(EntryKind::Certification, e)),
            )
            .collect();

        timeline.sort_by(|a, b| match (a.sort_date, b.sort_date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        timeline
    }
}

const RANGE_SEPARATORS: [&str; 4] = [" - ", " – ", " — ", " to "];
const ONGOING: [&str; 3] = ["present", "current", "now"];

/// Parse the date text of a resume entry into a sortable date.
///
/// Ranges ("Jan 2020 - Mar 2022") sort by their end; an open range ("2023 -
/// Present") sorts after every closed one. Accepted forms include
/// "May 7, 2024", "2024-05-07", "May 2024", "2024-05" and "2024". Anything
/// else falls back to the last four-digit year in the text.
pub fn parse_timeline_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let end = RANGE_SEPARATORS
        .iter()
        .filter_map(|sep| text.rsplit_once(sep).map(|(_, end)| end))
        .min_by_key(|end| end.len())
        .unwrap_or(text)
        .trim();

    if ONGOING.iter().any(|word| end.eq_ignore_ascii_case(word)) {
        return Some(NaiveDate::MAX);
    }

    parse_single_date(end).or_else(|| trailing_year(text))
}

fn parse_single_date(text: &str) -> Option<NaiveDate> {
    const FULL: [&str; 5] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%d %B %Y", "%d %b %Y"];
    const MONTH: [&str; 2] = ["%d %B %Y", "%d %b %Y"];

    if let Some(date) = FULL
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(date);
    }

    let month_first = format!("1 {}", text.replace(',', ""));
    if let Some(date) = MONTH
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&month_first, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
        return Some(date);
    }

    year_start(text)
}

fn year_start(token: &str) -> Option<NaiveDate> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = token.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1).filter(|d| d.year() >= 1000)
}

fn trailing_year(text: &str) -> Option<NaiveDate> {
    text.split(|c: char| !c.is_ascii_digit())
        .rev()
        .find_map(year_start)
}

/// Where the resume document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeLocation {
    /// A file on disk.
    File(PathBuf),
    /// An HTTP(S) URL.
    Url(String),
}

impl ResumeLocation {
    /// Interpret a configured location: `http://` and `https://` are URLs,
    /// anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

/// Loads the resume document and flattens it into a timeline.
#[derive(Debug, Clone)]
pub struct ResumeSource {
    location: ResumeLocation,
    client: Option<HttpClient>,
}

impl ResumeSource {
    /// A source reading from `location`.
    pub fn new(location: ResumeLocation, client: HttpClient) -> Self {
        Self {
            location,
            client: Some(client),
        }
    }

    /// A source reading a local file. No HTTP client is built.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: ResumeLocation::File(path.into()),
            client: None,
        }
    }

    /// The client used for URL locations, if one was supplied.
    pub fn client(&self) -> Option<&HttpClient> {
        self.client.as_ref()
    }

    /// The document location.
    pub fn location(&self) -> &ResumeLocation {
        &self.location
    }

    /// Fetch and parse the document without flattening it.
    pub async fn document(&self) -> Result<ResumeDocument> {
        let bytes = match &self.location {
            ResumeLocation::File(path) => tokio::fs::read(path).await?,
            ResumeLocation::Url(url) => {
                let client = match &self.client {
                    Some(client) => client.clone(),
                    None => HttpClient::builder().build()?,
                };
                let response = client.get(url).send().await?;
                response.error_for_status().await?.text().await?.into_bytes()
            }
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl ListDataSource for ResumeSource {
    type Item = TimelineEntry;

    #[tracing::instrument(skip(self), target = "vitrine::net", fields(location = ?self.location))]
    async fn load(&self) -> Result<Vec<TimelineEntry>> {
        let document = self
            .document()
            .await
            .inspect_err(|err| tracing::warn!(target: targets::NET, %err, "resume document failed to load"))?;
        let timeline = document.into_timeline();
        tracing::debug!(target: targets::NET, entries = timeline.len(), "loaded resume timeline");
        Ok(timeline)
    }
}
