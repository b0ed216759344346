//! Streaming RSS/Atom feed parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::FeedEntry;
use crate::error::SentimentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Published,
    Updated,
    Other,
}

impl Field {
    fn from_tag(name: &str) -> Self {
        match name {
            "title" => Self::Title,
            "link" => Self::Link,
            "pubDate" | "published" | "dc:date" => Self::Published,
            "updated" => Self::Updated,
            _ => Self::Other,
        }
    }
}

#[derive(Default)]
struct EntryBuilder {
    title: String,
    link: String,
    published: String,
    updated: String,
}

impl EntryBuilder {
    fn push_text(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            // First element of each date kind wins.
            Field::Published if self.published.is_empty() => &mut self.published,
            Field::Updated if self.updated.is_empty() => &mut self.updated,
            Field::Published | Field::Updated | Field::Other => return,
        };
        target.push_str(text);
    }

    fn finish(self) -> FeedEntry {
        let non_empty = |s: String| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        FeedEntry {
            title: non_empty(self.title),
            link: non_empty(self.link),
            published: non_empty(self.published).or_else(|| non_empty(self.updated)),
        }
    }
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Atom links carry the URL in `href`; only `rel="alternate"` (or no rel) counts.
fn atom_href(e: &BytesStart<'_>) -> Option<String> {
    let rel = e
        .try_get_attribute("rel")
        .ok()
        .flatten()
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()));
    if rel.as_deref().is_some_and(|r| r != "alternate") {
        return None;
    }
    e.try_get_attribute("href")
        .ok()
        .flatten()
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Parse an RSS 2.0 or Atom document into [`FeedEntry`]s, in document order.
///
/// Reads `<item>` and `<entry>` elements, pulling the title, the link (element
/// text or Atom `href`), and the first of `pubDate`/`published`/`dc:date`.
/// Atom `updated` is only used when no publication date is present.
/// Stops after `max_entries` entries have been collected.
///
/// # Errors
///
/// Returns [`SentimentError::Xml`] if the XML is malformed.
pub(crate) fn parse_feed(xml: &str, max_entries: usize) -> Result<Vec<FeedEntry>, SentimentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<EntryBuilder> = None;
    let mut field = Field::Other;

    if max_entries == 0 {
        return Ok(entries);
    }

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = tag_name(&e);
                if name == "item" || name == "entry" {
                    current = Some(EntryBuilder::default());
                    field = Field::Other;
                } else if let Some(entry) = current.as_mut() {
                    field = Field::from_tag(&name);
                    if field == Field::Link && entry.link.is_empty() {
                        if let Some(href) = atom_href(&e) {
                            entry.link = href;
                            field = Field::Other;
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(entry) = current.as_mut() {
                    if tag_name(&e) == "link" && entry.link.is_empty() {
                        if let Some(href) = atom_href(&e) {
                            entry.link = href;
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if name == "item" || name == "entry" {
                    if let Some(entry) = current.take() {
                        entries.push(entry.finish());
                        if entries.len() >= max_entries {
                            break;
                        }
                    }
                }
                field = Field::Other;
            }
            Ok(Event::Text(e)) => {
                if let Some(entry) = current.as_mut() {
                    let text = e.unescape().unwrap_or_default();
                    entry.push_text(field, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(entry) = current.as_mut() {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    entry.push_text(field, &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SentimentError::Xml(e)),
            _ => {}
        }
    }

    Ok(entries)
}
