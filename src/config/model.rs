use crate::filter::criteria::DatePreset;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub data_path: String,
    pub page_size: usize,
    pub query: String,
    pub tag_tokens: String,
    pub date_preset: DatePreset,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<usize>,
}
