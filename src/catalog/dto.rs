use crate::catalog::model::EventRecord;
use crate::catalog::store::CatalogError;
use crate::dates::parse_loose;
use itertools::Itertools;
use serde_json::{Map, Value};
use tracing::{error, warn};

// Candidate source keys per canonical field, in resolution order. The
// feed mixes Portuguese and English spellings for the same concept, so
// synonyms are resolved once here and never reach the filter engine.
const TITLE_KEYS: [&str; 3] = ["titulo", "título", "title"];
const DATE_KEYS: [&str; 6] = ["data_evento", "data", "data_inicio", "start", "data_post", "date"];
const VENUE_KEYS: [&str; 3] = ["local", "venue", "address"];
const DESCRIPTION_KEYS: [&str; 2] = ["descricao", "description"];
const TAG_KEYS: [&str; 3] = ["tags", "ods", "ODS"];
const URL_KEYS: [&str; 3] = ["url", "instagramUrl", "postUrl"];

const INSTAGRAM_POST_URL: &str = "https://www.instagram.com/p/";

/**
Parses a whole import document: either a bare JSON array of events or a
`{ "events": [...] }` wrapper. Anything else is rejected so the caller can
keep its previous collection untouched.
*/
pub fn parse_document(payload: &str) -> Result<Vec<EventRecord>, CatalogError> {
    let document: Value = serde_json::from_str(payload).map_err(|err| {
        error!("Import document is not valid JSON: {err}");
        CatalogError::InvalidDocument
    })?;

    let entries = match &document {
        Value::Array(entries) => entries,
        Value::Object(fields) => match fields.get("events") {
            Some(Value::Array(entries)) => entries,
            _ => {
                error!("Import document has no 'events' array");
                return Err(CatalogError::InvalidDocument);
            }
        },
        _ => {
            error!("Import document is neither an event array nor a wrapper object");
            return Err(CatalogError::InvalidDocument);
        }
    };

    Ok(entries.iter().map(resolve_event).collect())
}

/// Resolves one semi-structured source entry into the fixed record shape.
pub fn resolve_event(entry: &Value) -> EventRecord {
    let Some(fields) = entry.as_object() else {
        warn!("Event entry is not an object (keeping an empty record)");
        return EventRecord::default();
    };

    let date = first_text(fields, &DATE_KEYS);
    if let Some(raw_date) = date.as_deref() {
        if parse_loose(Some(raw_date)).is_none() {
            warn!("Event date '{raw_date}' is unparseable (record will match any period)");
        }
    }

    let shortcode = fields.get("shortcode").and_then(text_value);

    EventRecord {
        title: first_text(fields, &TITLE_KEYS).unwrap_or_default(),
        date,
        venue: first_text(fields, &VENUE_KEYS),
        description: first_text(fields, &DESCRIPTION_KEYS),
        tags: merged_text(fields, &TAG_KEYS),
        post_url: first_text(fields, &URL_KEYS)
            .or_else(|| shortcode.as_deref().map(instagram_post_url)),
        shortcode,
    }
}

pub(crate) fn instagram_post_url(shortcode: &str) -> String {
    format!("{INSTAGRAM_POST_URL}{shortcode}/")
}

/// First candidate key holding a non-empty value.
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| fields.get(*key).and_then(text_value))
}

/// All candidate keys joined, space-separated. Tag and ODS spellings are
/// additive rather than synonymous: a record may carry both.
fn merged_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let merged = keys
        .iter()
        .filter_map(|key| fields.get(*key).and_then(text_value))
        .join(" ");

    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}

// Some String fields arrive as numbers (ODS codes) or arrays of fragments.
fn text_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(parts) => parts.iter().filter_map(text_value).join(" "),
        _ => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test_log::test]
    fn should_resolve_synonym_keys_in_declared_order() {
        let record = resolve_event(&json!({
            "título": "Feira do Livro",
            "title": "Book Fair",
            "data": "2024-09-01",
            "local": "Biblioteca Municipal",
            "descricao": "Feira anual"
        }));

        assert_eq!(record.title, "Feira do Livro");
        assert_eq!(record.date.as_deref(), Some("2024-09-01"));
        assert_eq!(record.venue.as_deref(), Some("Biblioteca Municipal"));
        assert_eq!(record.description.as_deref(), Some("Feira anual"));
    }

    #[test_log::test]
    fn should_skip_empty_candidates() {
        let record = resolve_event(&json!({
            "titulo": "",
            "title": "Mostra de Dança"
        }));

        assert_eq!(record.title, "Mostra de Dança");
    }

    #[test_log::test]
    fn should_merge_tag_and_ods_fields() {
        let record = resolve_event(&json!({
            "title": "Oficina",
            "tags": "cultura,infantil",
            "ods": 11
        }));

        assert_eq!(record.tags.as_deref(), Some("cultura,infantil 11"));
    }

    #[test_log::test]
    fn should_concatenate_array_descriptions() {
        let record = resolve_event(&json!({
            "title": "Recital",
            "description": ["Primeira parte.", "Segunda parte."]
        }));

        assert_eq!(
            record.description.as_deref(),
            Some("Primeira parte. Segunda parte.")
        );
    }

    #[test_log::test]
    fn should_synthesize_post_url_only_without_an_explicit_one() {
        let explicit = resolve_event(&json!({
            "title": "Show",
            "url": "https://example.com/show",
            "shortcode": "Zz9xyz"
        }));
        let synthesized = resolve_event(&json!({
            "title": "Show",
            "shortcode": "Zz9xyz"
        }));

        assert_eq!(explicit.post_url.as_deref(), Some("https://example.com/show"));
        assert_eq!(
            synthesized.post_url.as_deref(),
            Some("https://www.instagram.com/p/Zz9xyz/")
        );
    }

    #[test_log::test]
    fn should_parse_a_wrapped_document() {
        let records = parse_document(r#"{ "events": [ { "titulo": "Sarau" } ] }"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Sarau");
    }

    #[test_log::test]
    fn should_reject_a_document_without_events() {
        assert_eq!(
            parse_document(r#"{ "foo": 1 }"#),
            Err(CatalogError::InvalidDocument)
        );
        assert_eq!(parse_document("not json"), Err(CatalogError::InvalidDocument));
        assert_eq!(parse_document("42"), Err(CatalogError::InvalidDocument));
    }
}
