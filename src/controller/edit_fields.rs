/// The text inputs of a screen's edit area, in display order.
#[derive(Debug, Clone, Default)]
pub struct EditFields {
    fields: Vec<(&'static str, String)>,
}

impl EditFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `names` as the screen's inputs. Inputs that were already tracked
    /// keep their text.
    pub fn set_all_text_fields(&mut self, names: &[&'static str]) {
        let previous = std::mem::take(&mut self.fields);
        self.fields = names
            .iter()
            .map(|name| {
                let text = previous
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, text)| text.clone())
                    .unwrap_or_default();
                (*name, text)
            })
            .collect();
    }

    /// Text of the input `name`; untracked inputs read as empty.
    pub fn text(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| text.as_str())
            .unwrap_or("")
    }

    /// Sets the text of a tracked input. Returns `false` if `name` is not
    /// one of the screen's inputs.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, current)) => {
                *current = text.into();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for (_, text) in &mut self.fields {
            text.clear();
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn all_empty(&self) -> bool {
        self.fields.iter().all(|(_, text)| text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_blanks_every_field() {
        let mut fields = EditFields::new();
        fields.set_all_text_fields(&["name", "description", "unit"]);
        fields.set_text("name", "Espresso Bean");
        fields.set_text("unit", "g");

        fields.reset();

        assert!(fields.all_empty());
        assert_eq!(fields.names().count(), 3);
    }

    #[test]
    fn test_retracking_keeps_text() {
        let mut fields = EditFields::new();
        fields.set_all_text_fields(&["name"]);
        fields.set_text("name", "Latte");
        fields.set_all_text_fields(&["name", "brewtime"]);

        assert_eq!(fields.text("name"), "Latte");
        assert_eq!(fields.text("brewtime"), "");
        assert!(!fields.set_text("mail", "x"));
    }
}
