use std::time::Duration;

/// Build-time default for the document URL field.
const DEFAULT_URL: Option<&str> = option_env!("DOCVIEW_DEFAULT_URL");

#[derive(Debug, Clone)]
pub struct Config {
    /// Shown in the browser title next to the page title.
    pub app_title: &'static str,
    /// How long a notification stays up before it dismisses itself.
    pub toast_lifetime: Duration,
    /// Prefilled into the URL field; empty when not set at build time.
    pub default_source_url: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_title: "docview",
            toast_lifetime: Duration::from_secs(2),
            default_source_url: DEFAULT_URL.map(str::trim).unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn page_title(&self, page_title: Option<&str>) -> String {
        match page_title {
            Some(title) if !title.trim().is_empty() => format!("{title} - {}", self.app_title),
            _ => self.app_title.to_owned(),
        }
    }
}
