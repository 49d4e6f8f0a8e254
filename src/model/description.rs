use serde::Serialize;

/// Structured view of an App Store description block.
///
/// Fields may overlap: a single-line description is both headline and
/// mission line, and the trust line can be the mission line.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ParsedDescription {
    pub headline: String,
    pub bullets: Vec<String>,
    pub trust_line: String,
    pub mission_line: String,
}

impl ParsedDescription {
    pub fn bullet_at(&self, index: usize) -> Option<&str> {
        self.bullets.get(index).map(String::as_str)
    }
}
