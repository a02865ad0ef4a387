//! Header block written at the top of a freshly created note.

use chrono::NaiveDate;

use super::Tag;
use crate::error::{NoteError, Result};

const DELIMITER: &str = "---";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Title, creation date, and tags of a new note.
///
/// The rendered form doubles as the "never edited" sentinel: a note whose
/// contents still equal [`Header::render_to_string`] after the editor exits
/// is discarded.
///
/// # Format
/// ```text
/// ---
/// title: Meeting Minutes 2023-02-12
/// date: 2023-02-12
/// tags: work, meeting_minutes
/// ---
///
///
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    title: String,
    date: NaiveDate,
    tags: Vec<Tag>,
}

impl Header {
    pub fn new(title: impl Into<String>, tags: Vec<Tag>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            tags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Renders the canonical header text, including the two blank lines
    /// that separate it from the note body.
    pub fn render_to_string(&self) -> String {
        let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
        format!(
            "{DELIMITER}\ntitle: {}\ndate: {}\ntags: {}\n{DELIMITER}\n\n\n",
            self.title,
            self.date.format(DATE_FORMAT),
            tags.join(", ")
        )
    }

    /// Returns true when `contents` is exactly the rendered header.
    pub fn is_untouched(&self, contents: &str) -> bool {
        contents == self.render_to_string()
    }

    /// Parses a header from the start of a note.
    ///
    /// Anything after the closing delimiter is ignored, so this accepts
    /// both a bare header and a note with a body.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidHeader` if a delimiter or field is missing
    /// or out of order, the date is not `YYYY-MM-DD`, or a tag is invalid.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.split('\n');

        expect_delimiter(lines.next(), "opening")?;
        let title = field(lines.next(), "title")?;
        let date_str = field(lines.next(), "date")?;
        let tags_str = field(lines.next(), "tags")?;
        expect_delimiter(lines.next(), "closing")?;

        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|e| NoteError::InvalidHeader(format!("invalid date '{date_str}': {e}")))?;

        let tags = if tags_str.is_empty() {
            Vec::new()
        } else {
            tags_str
                .split(',')
                .map(Tag::new)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| NoteError::InvalidHeader(e.to_string()))?
        };

        Ok(Self::new(title, tags, date))
    }
}

fn expect_delimiter(line: Option<&str>, which: &str) -> Result<()> {
    match line {
        Some(DELIMITER) => Ok(()),
        _ => Err(NoteError::InvalidHeader(format!(
            "missing {which} delimiter '{DELIMITER}'"
        ))),
    }
}

fn field<'a>(line: Option<&'a str>, key: &str) -> Result<&'a str> {
    let missing = || NoteError::InvalidHeader(format!("missing '{key}' line"));
    let value = line
        .and_then(|l| l.strip_prefix(key))
        .and_then(|l| l.strip_prefix(':'))
        .ok_or_else(missing)?;
    Ok(value.strip_prefix(' ').unwrap_or(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tags(values: &[&str]) -> Vec<Tag> {
        values.iter().map(|t| Tag::new(t).unwrap()).collect()
    }

    #[test]
    fn render_with_tags() {
        let header = Header::new(
            "Meeting Minutes 2023-02-12",
            tags(&["work", "meeting_minutes"]),
            date(2023, 2, 12),
        );
        assert_eq!(
            header.render_to_string(),
            "---\ntitle: Meeting Minutes 2023-02-12\ndate: 2023-02-12\ntags: work, meeting_minutes\n---\n\n\n"
        );
    }

    #[test]
    fn render_without_tags() {
        let header = Header::new("Meeting Minutes 2023-02-12", Vec::new(), date(2023, 2, 12));
        assert_eq!(
            header.render_to_string(),
            "---\ntitle: Meeting Minutes 2023-02-12\ndate: 2023-02-12\ntags: \n---\n\n\n"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let header = Header::new("T", tags(&["a", "b"]), date(2023, 2, 12));
        assert_eq!(header.render_to_string(), header.clone().render_to_string());
    }

    #[test]
    fn parse_reproduces_rendered_header() {
        let header = Header::new("T", tags(&["a", "b"]), date(2023, 2, 12));
        let parsed = Header::parse(&header.render_to_string()).unwrap();

        assert_eq!(parsed.title(), "T");
        assert_eq!(parsed.date(), date(2023, 2, 12));
        assert_eq!(parsed.tags(), tags(&["a", "b"]).as_slice());
    }

    #[test]
    fn parse_empty_tags_line() {
        let parsed = Header::parse("---\ntitle: Ideas\ndate: 2024-01-01\ntags: \n---\n\n\n").unwrap();
        assert!(parsed.tags().is_empty());
    }

    #[test]
    fn parse_ignores_body() {
        let text = "---\ntitle: Ideas\ndate: 2024-01-01\ntags: daily\n---\n\n\nSome body text.\n";
        let parsed = Header::parse(text).unwrap();
        assert_eq!(parsed.title(), "Ideas");
        assert_eq!(parsed.tags(), tags(&["daily"]).as_slice());
    }

    #[test]
    fn parse_title_containing_colon() {
        let parsed = Header::parse("---\ntitle: Re: planning\ndate: 2024-01-01\ntags: \n---\n").unwrap();
        assert_eq!(parsed.title(), "Re: planning");
    }

    #[test]
    fn parse_rejects_missing_opening_delimiter() {
        let err = Header::parse("title: Ideas\n").unwrap_err();
        assert!(err.to_string().contains("opening"));
    }

    #[test]
    fn parse_rejects_missing_closing_delimiter() {
        let err = Header::parse("---\ntitle: Ideas\ndate: 2024-01-01\ntags: \n").unwrap_err();
        assert!(err.to_string().contains("closing"));
    }

    #[test]
    fn parse_rejects_fields_out_of_order() {
        let result = Header::parse("---\ndate: 2024-01-01\ntitle: Ideas\ntags: \n---\n");
        assert!(matches!(result, Err(NoteError::InvalidHeader(_))));
    }

    #[test]
    fn parse_rejects_bad_date() {
        let err = Header::parse("---\ntitle: Ideas\ndate: 2024-13-01\ntags: \n---\n").unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn untouched_requires_exact_match() {
        let header = Header::new("Ideas", Vec::new(), date(2024, 1, 1));
        let rendered = header.render_to_string();

        assert!(header.is_untouched(&rendered));
        assert!(!header.is_untouched(&format!("{rendered}x")));
        assert!(!header.is_untouched(rendered.trim_end()));
    }
}
