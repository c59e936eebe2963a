//! Narrative output: the write-only sink battle messages go to, and the inline
//! markup colours embedded in those messages.
//!
//! Markup is opaque to the rules engine. `[#f80]text[/]` style tags are
//! interpreted by whatever renders the sink's lines.

/// Write-only destination for narrative lines.
pub trait NarrativeSink {
    fn write_line(&mut self, message: &str);
}

impl NarrativeSink for Vec<String> {
    fn write_line(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Colour tags used inside narrative markup.
pub mod colours {
    pub const HIGHLIGHT: &str = "#fb0";
    pub const SUPER_EFFECTIVE: &str = "#f80";
    pub const SKILL: &str = "#faa";
    pub const HEAL: &str = "green";
    pub const FIRE: &str = "#f40";
    pub const POISON: &str = "#a0f";
    pub const PARALYZE: &str = "#ff4";
}

/// Wrap `text` in a colour tag.
pub fn coloured(colour: &str, text: impl std::fmt::Display) -> String {
    format!("[{colour}]{text}[/]")
}
