//! Form field value objects

/// A single text input with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
