use crate::catalog::model::EventRecord;
use crate::dates::parse_loose;
use crate::filter::criteria::{DatePreset, FilterCriteria};
use crate::text::normalize;
use chrono::{Datelike, Duration, Local, Months, NaiveDate};

/**
Applies the text, tag, and date clauses over the catalog, keeping input
order (stable filter, no resort). `today` is the current local calendar day.
*/
pub fn apply<'a>(catalog: &'a [EventRecord], criteria: &FilterCriteria) -> Vec<&'a EventRecord> {
    apply_on(catalog, criteria, Local::now().date_naive())
}

/// Same as [`apply`] with an explicit `today`, so preset windows are
/// reproducible under test.
pub fn apply_on<'a>(
    catalog: &'a [EventRecord],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<&'a EventRecord> {
    let needle = normalize(&criteria.query);
    let tokens = split_tag_tokens(&criteria.tag_tokens);
    let window = DateWindow::resolve(criteria, today);

    catalog
        .iter()
        .filter(|event| {
            matches_text(event, &needle) && matches_tags(event, &tokens) && window.admits(event)
        })
        .collect()
}

/// Tag/ODS filter input split into normalized tokens on commas and spaces.
pub fn split_tag_tokens(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(normalize)
        .collect()
}

fn matches_text(event: &EventRecord, needle: &str) -> bool {
    needle.is_empty() || normalize(&event.searchable_text()).contains(needle)
}

// AND semantics: every requested token must appear in the record's tag text.
fn matches_tags(event: &EventRecord, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    let tag_text = normalize(event.tags.as_deref().unwrap_or_default());

    tokens.iter().all(|token| tag_text.contains(token.as_str()))
}

/// The date clause resolved once per `apply` call.
#[derive(Debug, PartialEq, Eq)]
enum DateWindow {
    Unbounded,
    SameDay(NaiveDate),
    Between { start: NaiveDate, end: NaiveDate },
    Absolute { from: Option<NaiveDate>, to: Option<NaiveDate> },
}

/// Tri-state outcome of dating a record against the window. An undated
/// record is indeterminate and indeterminate admits: absence of
/// information never hides a record from a range query.
enum DateMatch {
    Admitted,
    Outside,
    Undated,
}

impl DateWindow {
    fn resolve(criteria: &FilterCriteria, today: NaiveDate) -> Self {
        if criteria.has_absolute_range() {
            return DateWindow::Absolute {
                from: criteria.from_date,
                to: criteria.to_date,
            };
        }

        match criteria.date_preset {
            DatePreset::All => DateWindow::Unbounded,
            DatePreset::Today => DateWindow::SameDay(today),
            DatePreset::Next7Days => DateWindow::Between {
                start: today,
                end: today + Duration::days(7),
            },
            DatePreset::Next30Days => DateWindow::Between {
                start: today,
                end: today + Duration::days(30),
            },
            DatePreset::ThisMonth => {
                let (start, end) = month_bounds(today);
                DateWindow::Between { start, end }
            }
        }
    }

    fn admits(&self, event: &EventRecord) -> bool {
        !matches!(self.status(event), DateMatch::Outside)
    }

    fn status(&self, event: &EventRecord) -> DateMatch {
        let Some(date) = parse_loose(event.date.as_deref()) else {
            return DateMatch::Undated;
        };

        let inside = match self {
            DateWindow::Unbounded => true,
            DateWindow::SameDay(day) => date == *day,
            DateWindow::Between { start, end } => date >= *start && date <= *end,
            DateWindow::Absolute { from, to } => {
                from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
            }
        };

        if inside {
            DateMatch::Admitted
        } else {
            DateMatch::Outside
        }
    }
}

fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(today);

    (start, end)
}
