/// Style class of an inline message region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// An inline status region. Hiding leaves the text in place; the next
/// `show` overwrites it.
#[derive(Debug, Default)]
pub struct MessageRegion {
    visible: bool,
    text: String,
    severity: Severity,
}

impl MessageRegion {
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) {
        self.text = text.into();
        self.severity = severity;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
