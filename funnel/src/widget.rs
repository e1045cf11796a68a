pub const DEFAULT_WIDGET_BASE: &str = "https://api.leadconnectorhq.com/widget/booking";
pub const DEFAULT_WIDGET_ID: &str = "lGzVVFd7LHYgo7gLGxrV";
/// Instance suffix from the vendor's embed snippet.
/// Their resize script keys off the element id.
pub const DEFAULT_EMBED_INSTANCE: &str = "1766851261475";
pub const EMBED_SCRIPT_URL: &str = "https://link.msgsndr.com/js/form_embed.js";

/// The third-party booking widget shown in an iframe on the scheduling page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWidget {
    base_url: String,
    widget_id: String,
    instance: String,
}

impl Default for BookingWidget {
    fn default() -> Self {
        Self::new(DEFAULT_WIDGET_BASE, DEFAULT_WIDGET_ID, DEFAULT_EMBED_INSTANCE)
    }
}

impl BookingWidget {
    pub fn new(
        base_url: impl Into<String>,
        widget_id: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            widget_id: widget_id.into(),
            instance: instance.into(),
        }
    }

    /// Iframe `src` carrying the query string exactly as this page received it.
    pub fn embed_src(&self, query: &str) -> String {
        let query = query.strip_prefix('?').unwrap_or(query);
        if query.is_empty() {
            format!("{}/{}", self.base_url, self.widget_id)
        } else {
            format!("{}/{}?{}", self.base_url, self.widget_id, query)
        }
    }

    pub fn element_id(&self) -> String {
        format!("{}_{}", self.widget_id, self.instance)
    }
}
