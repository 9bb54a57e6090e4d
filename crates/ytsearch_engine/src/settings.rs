use crate::FetchSettings;

pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Scheme and host that results pages and the continuation endpoint hang off.
    pub base_url: String,
    pub fetch: FetchSettings,
}

impl SearchSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fetch: FetchSettings::default(),
        }
    }
}
