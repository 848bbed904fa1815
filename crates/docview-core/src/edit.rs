//! Text buffer behind the markdown edit surface.

/// Local copy of the text being edited.
///
/// The buffer tracks the baseline it was seeded from. Handing it a different
/// baseline throws away whatever was typed since, which is what happens when
/// the user switches to another page mid-edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    baseline: String,
    text: String,
}

impl EditBuffer {
    pub fn new(content: impl Into<String>) -> Self {
        let baseline = content.into();
        Self {
            text: baseline.clone(),
            baseline,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Adopt `content` as the new baseline if it changed.
    ///
    /// Returns `true` when the buffer was reset.
    pub fn sync(&mut self, content: &str) -> bool {
        if content == self.baseline {
            return false;
        }
        self.baseline = content.to_owned();
        self.text = content.to_owned();
        true
    }

    /// Replace the edited text, returning the full text to report upstream.
    pub fn input(&mut self, text: impl Into<String>) -> &str {
        self.text = text.into();
        &self.text
    }
}
