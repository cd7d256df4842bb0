use crate::config::model::{Config, DebugConfig};
use crate::filter::criteria::DatePreset;
use std::env;

const DEFAULT_DATA_PATH: &str = "data/events.json";
const DEFAULT_PAGE_SIZE: usize = 9;

pub fn load_config() -> Config {
    let data_path = load_str_config("EVENTS_DATA_PATH", DEFAULT_DATA_PATH);
    let page_size = load_usize_config("PAGE_SIZE", DEFAULT_PAGE_SIZE);

    let query = load_str_config("FILTER_QUERY", "");
    let tag_tokens = load_str_config("FILTER_TAGS", "");
    let date_preset = load_preset_config("FILTER_PERIOD");

    let debug_event_limit = load_usize_option_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        data_path,
        page_size,
        query,
        tag_tokens,
        date_preset,
    }
}

fn load_str_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_usize_config(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a positive integer.", name)
        }),
        Err(_) => default,
    }
}

fn load_preset_config(name: &str) -> DatePreset {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected one of: all, today, 7, 30, month.",
                name
            )
        }),
        Err(_) => DatePreset::All,
    }
}

fn load_usize_option_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected an integer number.", name)
        })),
        Err(_) => None,
    }
}
