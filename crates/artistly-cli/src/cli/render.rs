//! # Rendering
//!
//! Text output is produced by minijinja templates (see `templates/`), fed
//! with template-ready rows built here. JSON output serializes the engine's
//! records directly and never touches the templates.
//!
//! Templates get two filters:
//!
//! - `pad(width)`: pads to a terminal column width, truncating with `…`
//!   when the text is wider. Widths are counted with `unicode-width`, so the
//!   `₹` labels and non-Latin names line up.
//! - `style(name)`: applies a named `console` style. Unknown names and
//!   colorless terminals pass the text through unchanged.
//!
//! Always pad before styling; ANSI escapes would otherwise count toward the
//! width.

use super::setup::OutputFormat;
use artistly::catalog::{CATEGORIES, LANGUAGES, LOCATIONS, PRICE_RANGES};
use artistly::model::{Artist, Submission};
use artistly::session::Session;
use artistly::store::RecordStore;
use artistly::view::GalleryView;
use chrono::{DateTime, Utc};
use console::{Style, Term};
use minijinja::{Environment, Value};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ARTISTS_TEMPLATE: &str = include_str!("templates/artists.jinja");
const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.jinja");
const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.jinja");

/// Column caps; anything wider is truncated.
const MAX_NAME: usize = 28;
const MAX_CATEGORY: usize = 30;
const MAX_LOCATION: usize = 14;

fn theme() -> HashMap<&'static str, Style> {
    HashMap::from([
        ("name", Style::new().bold()),
        ("category", Style::new().cyan()),
        ("rating", Style::new().yellow()),
        ("muted", Style::new().color256(246)),
        ("faint", Style::new().dim()),
        ("time", Style::new().color256(246).italic()),
        ("heading", Style::new().bold()),
        ("pending", Style::new().yellow()),
        ("approved", Style::new().green()),
        ("rejected", Style::new().red()),
        ("success", Style::new().green()),
        ("warning", Style::new().yellow()),
    ])
}

/// A one-line note shown above the dashboard, e.g. after an approval.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub level: &'static str,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: "success",
            text: text.into(),
        }
    }
}

#[derive(Serialize)]
struct ArtistRow<'a> {
    name: &'a str,
    category: String,
    location: &'a str,
    price_range: &'a str,
    rating: String,
    available: bool,
}

impl<'a> From<&'a Artist> for ArtistRow<'a> {
    fn from(artist: &'a Artist) -> Self {
        Self {
            name: &artist.name,
            category: artist.category.join(", "),
            location: &artist.location,
            price_range: &artist.price_range,
            rating: artist
                .rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            available: artist.availability,
        }
    }
}

#[derive(Serialize)]
struct SubmissionRow<'a> {
    id: &'a str,
    name: &'a str,
    category: String,
    location: &'a str,
    status: &'static str,
    submitted: String,
}

pub struct Renderer {
    env: Environment<'static>,
    format: OutputFormat,
}

impl Renderer {
    /// Creates a renderer, enabling color when stdout supports it.
    pub fn new(format: OutputFormat) -> Result<Self, minijinja::Error> {
        Self::with_color(format, Term::stdout().features().colors_supported())
    }

    pub fn with_color(format: OutputFormat, use_color: bool) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        let styles = theme();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            match styles.get(name.as_str()) {
                Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
                _ => text,
            }
        });
        env.add_filter("pad", |value: Value, width: usize| -> String {
            pad_to_width(&value.to_string(), width)
        });
        env.add_template("artists", ARTISTS_TEMPLATE)?;
        env.add_template("dashboard", DASHBOARD_TEMPLATE)?;
        env.add_template("catalog", CATALOG_TEMPLATE)?;
        Ok(Self { env, format })
    }

    pub fn artists(&self, view: &GalleryView) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(&json!({
                "artists": view.results(),
                "activeFilters": view.active_count(),
                "total": view.records().len(),
            }));
        }

        let rows: Vec<ArtistRow> = view.results().iter().map(ArtistRow::from).collect();
        let widths = json!({
            "name": column_width(rows.iter().map(|r| r.name), MAX_NAME),
            "category": column_width(rows.iter().map(|r| r.category.as_str()), MAX_CATEGORY),
            "location": column_width(rows.iter().map(|r| r.location), MAX_LOCATION),
            "price_range": column_width(rows.iter().map(|r| r.price_range), usize::MAX),
        });
        let summary = summary_line(
            view.len(),
            view.records().len(),
            "artist",
            view.active_count(),
        );
        self.render(
            "artists",
            &json!({ "artists": rows, "widths": widths, "summary": summary }),
        )
    }

    pub fn dashboard<S: RecordStore>(
        &self,
        session: &Session<S>,
        messages: &[Message],
        now: DateTime<Utc>,
    ) -> anyhow::Result<String> {
        let view = session.dashboard();
        if self.format == OutputFormat::Json {
            return to_json(&json!({
                "submissions": view.results(),
                "stats": session.stats(),
                "categories": session.dashboard_categories(),
                "activeFilters": view.active_count(),
                "messages": messages,
            }));
        }

        let rows: Vec<SubmissionRow> = view
            .results()
            .iter()
            .map(|s| submission_row(s, now))
            .collect();
        let widths = json!({
            "id": column_width(rows.iter().map(|r| r.id), usize::MAX),
            "name": column_width(rows.iter().map(|r| r.name), MAX_NAME),
            "category": column_width(rows.iter().map(|r| r.category.as_str()), MAX_CATEGORY),
            "location": column_width(rows.iter().map(|r| r.location), MAX_LOCATION),
            "status": column_width(rows.iter().map(|r| r.status), usize::MAX),
        });
        let summary = summary_line(
            view.len(),
            view.records().len(),
            "submission",
            view.active_count(),
        );
        self.render(
            "dashboard",
            &json!({
                "messages": messages,
                "stats": session.stats(),
                "submissions": rows,
                "widths": widths,
                "summary": summary,
            }),
        )
    }

    pub fn catalog(&self) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(&json!({
                "categories": CATEGORIES,
                "locations": LOCATIONS,
                "priceRanges": PRICE_RANGES,
                "languages": LANGUAGES,
            }));
        }

        self.render(
            "catalog",
            &json!({
                "sections": [
                    { "title": "Categories", "items": CATEGORIES },
                    { "title": "Locations", "items": LOCATIONS },
                    { "title": "Price ranges", "items": PRICE_RANGES },
                    { "title": "Languages", "items": LANGUAGES },
                ]
            }),
        )
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> anyhow::Result<String> {
        let rendered = self.env.get_template(name)?.render(data)?;
        Ok(rendered.trim_end().to_string())
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn submission_row(submission: &Submission, now: DateTime<Utc>) -> SubmissionRow<'_> {
    SubmissionRow {
        id: submission.id(),
        name: &submission.artist.name,
        category: submission.artist.category.join(", "),
        location: &submission.artist.location,
        status: submission.status().as_str(),
        submitted: format_time_ago(submission.submitted_at(), now),
    }
}

fn summary_line(shown: usize, total: usize, noun: &str, active: usize) -> String {
    let plural = if total == 1 { "" } else { "s" };
    match active {
        0 => format!("Showing {shown} of {total} {noun}{plural}"),
        1 => format!("Showing {shown} of {total} {noun}{plural} · 1 active filter"),
        n => format!("Showing {shown} of {total} {noun}{plural} · {n} active filters"),
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, max: usize) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0).min(max)
}

fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current > width {
        return truncate_to_width(text, width);
    }
    format!("{text}{}", " ".repeat(width - current))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    // The ellipsis may leave a one-column gap before a wide character.
    let width = result.width();
    result + &" ".repeat(max_width.saturating_sub(width))
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now
        .signed_duration_since(timestamp)
        .to_std()
        .unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}
