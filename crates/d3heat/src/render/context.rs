//! Placeholder values for one render call.

/// An insert-ordered mapping from placeholder name to stringified value.
///
/// Keys are bare names (`TITLE`); the template carries them as `$TITLE$`.
/// Built fresh per render and consumed exactly once.
#[derive(Debug, Default, Clone)]
pub struct RenderContext {
    entries: Vec<(String, String)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placeholder value. Values are stringified with `Display`, so
    /// numbers embed the way they print.
    pub fn insert(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_stringifies() {
        let mut ctx = RenderContext::new();
        ctx.insert("WIDTH", 720).insert("TITLE", "x");
        assert_eq!(
            ctx.entries(),
            &[
                ("WIDTH".to_string(), "720".to_string()),
                ("TITLE".to_string(), "x".to_string())
            ]
        );
    }
}
