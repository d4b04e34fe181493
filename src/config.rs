//! Runtime Configuration
//!
//! Defaults can be overridden by `<meta>` tags in the served page:
//!
//! ```html
//! <meta name="todo:api-base" content="https://example.com/api">
//! <meta name="todo:user-id" content="42">
//! <meta name="todo:log-level" content="debug">
//! ```

use log::LevelFilter;

pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";
pub const DEFAULT_USER_ID: u32 = 12173;

const META_API_BASE: &str = "todo:api-base";
const META_USER_ID: &str = "todo:user-id";
const META_LOG_LEVEL: &str = "todo:log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API root without trailing slash
    pub base_url: String,
    /// Owner of every todo this client lists or creates
    pub user_id: u32,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Read overrides from the current document's meta tags.
    pub fn from_document() -> Self {
        Self::from_lookup(read_meta)
    }

    /// Build from a key lookup; unparsable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(META_API_BASE) {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                log::warn!("[CONFIG] empty {}, using {}", META_API_BASE, DEFAULT_BASE_URL);
            } else {
                config.base_url = base.to_string();
            }
        }

        if let Some(raw) = lookup(META_USER_ID) {
            match raw.trim().parse::<u32>() {
                Ok(id) => config.user_id = id,
                Err(e) => log::warn!("[CONFIG] invalid {} {:?}: {}", META_USER_ID, raw, e),
            }
        }

        if let Some(raw) = lookup(META_LOG_LEVEL) {
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("[CONFIG] invalid {} {:?}", META_LOG_LEVEL, raw),
            }
        }

        config
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
