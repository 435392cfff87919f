/// Sentinel left in place until a real webhook URL is configured.
pub const WEBHOOK_PLACEHOLDER: &str = "YOUR_GOOGLE_SHEETS_WEBHOOK_URL";

/// Where submissions go. `Unset` selects the simulated client, a dev/demo
/// fallback that never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Unset,
    Url(String),
}

impl Endpoint {
    /// Interpret a configured setting. The placeholder sentinel, an empty
    /// string, or no setting at all mean no endpoint is configured.
    #[must_use]
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            None => Self::Unset,
            Some(url) if url.is_empty() || url == WEBHOOK_PLACEHOLDER => Self::Unset,
            Some(url) => Self::Url(url.to_string()),
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}
