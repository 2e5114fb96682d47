/// Single-slot notice area; each message replaces the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageSlot {
    text: Option<String>,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.text = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    /// Current message, empty when nothing was shown yet.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Message as sanitized HTML; scripts and unsafe attributes from the
    /// server are stripped, plain text passes through.
    pub fn to_html(&self) -> String {
        ammonia::clean(self.text())
    }
}
