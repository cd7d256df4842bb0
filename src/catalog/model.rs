use crate::catalog::dto::instagram_post_url;
use crate::dates::{to_canonical, to_display};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One catalog entry, already resolved to canonical field names.
/// `date` holds the ISO `YYYY-MM-DD` form when entered locally; imported
/// values are kept as given and may be unparseable, which date filters
/// treat as "matches any period".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, rename = "postUrl", skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,
}

impl EventRecord {
    /// Haystack the free-text search runs against (normalized by the caller).
    pub fn searchable_text(&self) -> String {
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.tags.as_deref(),
            self.venue.as_deref(),
        ]
        .into_iter()
        .flatten()
        .join(" ")
    }
}

/// Editing-form shape of a record: every field is plain text and the date
/// travels in the masked `DD/MM/YYYY` form until the draft is saved.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date_display: String,
    pub venue: String,
    pub description: String,
    pub tags: String,
    pub post_url: String,
    pub shortcode: String,
}

impl EventDraft {
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            title: record.title.clone(),
            date_display: to_display(record.date.as_deref().unwrap_or_default()),
            venue: record.venue.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            tags: record.tags.clone().unwrap_or_default(),
            post_url: record.post_url.clone().unwrap_or_default(),
            shortcode: record.shortcode.clone().unwrap_or_default(),
        }
    }

    /// Trims every field and converts the masked date to canonical ISO;
    /// only canonical dates ever enter the store from the editing path.
    pub fn into_record(self) -> EventRecord {
        let shortcode = non_empty(self.shortcode.trim());

        EventRecord {
            title: self.title.trim().to_string(),
            date: non_empty(&to_canonical(&self.date_display)),
            venue: non_empty(self.venue.trim()),
            description: non_empty(self.description.trim()),
            tags: non_empty(self.tags.trim()),
            post_url: non_empty(self.post_url.trim())
                .or_else(|| shortcode.as_deref().map(instagram_post_url)),
            shortcode,
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_save_a_draft_with_a_canonical_date() {
        let record = EventDraft {
            title: "  Sarau de Poesia  ".to_string(),
            date_display: "15/03/2024".to_string(),
            tags: "cultura, 11".to_string(),
            ..Default::default()
        }
        .into_record();

        assert_eq!(record.title, "Sarau de Poesia");
        assert_eq!(record.date.as_deref(), Some("2024-03-15"));
        assert_eq!(record.tags.as_deref(), Some("cultura, 11"));
        assert_eq!(record.venue, None);
    }

    #[test_log::test]
    fn should_save_an_unfinished_date_as_absent() {
        let record = EventDraft {
            title: "Oficina".to_string(),
            date_display: "15/03".to_string(),
            ..Default::default()
        }
        .into_record();

        assert_eq!(record.date, None);
    }

    #[test_log::test]
    fn should_synthesize_the_post_url_from_the_shortcode() {
        let record = EventDraft {
            title: "Mostra".to_string(),
            shortcode: "Cx1abc".to_string(),
            ..Default::default()
        }
        .into_record();

        assert_eq!(
            record.post_url.as_deref(),
            Some("https://www.instagram.com/p/Cx1abc/")
        );
    }

    #[test_log::test]
    fn should_round_trip_a_record_through_the_editing_form() {
        let record = EventRecord {
            title: "Festival de Cultura".to_string(),
            date: Some("2024-03-15".to_string()),
            venue: Some("Praça Central".to_string()),
            ..Default::default()
        };

        let draft = EventDraft::from_record(&record);

        assert_eq!(draft.date_display, "15/03/2024");
        assert_eq!(draft.into_record(), record);
    }
}
