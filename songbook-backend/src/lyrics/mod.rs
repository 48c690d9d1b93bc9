use songbook_api::common::Page;

/// Lyrics verses are delimited by exactly one blank line.
pub const SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verses<'a>(Vec<&'a str>);

impl<'a> Verses<'a> {
    /// Splits on every literal [`SEPARATOR`] without trimming or merging, so an empty text is
    /// one empty verse.
    pub fn split(text: &'a str) -> Self {
        Self(text.split(SEPARATOR).collect())
    }

    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// Returns `None` when the page starts past the last verse.
    pub fn page(&self, page: Page) -> Option<&[&'a str]> {
        let start = usize::try_from(page.offset()?).ok()?;
        if start >= self.0.len() {
            return None;
        }
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(self.0.len());
        Some(&self.0[start..end])
    }

    #[cfg(test)]
    pub fn join(&self) -> String {
        self.0.join(SEPARATOR)
    }
}
