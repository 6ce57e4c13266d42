use unicode_width::UnicodeWidthStr;

/// Single-line text input.
#[derive(Debug, Default, Clone)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// The value with surrounding whitespace removed, or `None` if blank.
    pub fn trimmed(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Display width in terminal cells, used to place the cursor.
    pub fn width(&self) -> usize {
        self.value.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_operations() {
        let mut input = InputField::new();
        for c in "hey".chars() {
            input.push(c);
        }
        input.backspace();
        assert_eq!(input.value(), "he");

        input.clear();
        assert_eq!(input.value(), "");
        input.backspace();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_trimmed() {
        let mut input = InputField::new();
        assert_eq!(input.trimmed(), None);

        input.set_value(" \t  ");
        assert_eq!(input.trimmed(), None);

        input.set_value("  hi  ");
        assert_eq!(input.trimmed(), Some("hi"));
    }

    #[test]
    fn test_width_counts_wide_characters() {
        let mut input = InputField::new();
        input.set_value("日本");
        assert_eq!(input.width(), 4);
    }
}
