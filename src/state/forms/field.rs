//! Form field value objects

/// Type-safe field values
///
/// `Choice` holds one of the options declared on the field (or an empty
/// string while nothing is selected). `File` holds the path the applicant
/// typed; an empty path means no file is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(String),
    File(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Selectable options; empty for text and file fields
    pub options: &'static [&'static str],
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_multiline,
            options: &[],
        }
    }

    /// Create a new choice field with no initial selection
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice(String::new()),
            is_multiline: false,
            options,
        }
    }

    /// Create a new file field with no file attached
    pub fn file(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::File(String::new()),
            is_multiline: false,
            options: &[],
        }
    }

    /// Get the raw string value regardless of variant
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) | FieldValue::File(s) => s,
        }
    }

    /// A field is present when its value is non-empty: a non-empty string,
    /// a made selection, or an attached file path.
    pub fn is_present(&self) -> bool {
        !self.as_text().is_empty()
    }

    /// Set the value, preserving the variant
    pub fn set(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) | FieldValue::File(s) => *s = value,
        }
    }

    /// Push a character to the field value (no-op for choice fields)
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::File(s) => s.push(c),
            FieldValue::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value (no-op for choice fields)
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::File(s) => {
                s.pop();
            }
            FieldValue::Choice(_) => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) | FieldValue::File(s) => s.clear(),
        }
    }

    /// Select the next option (wraps around). No-op for non-choice fields.
    pub fn cycle_next(&mut self) {
        if let FieldValue::Choice(current) = &mut self.value {
            if self.options.is_empty() {
                return;
            }
            let next = match self.options.iter().position(|o| o == current) {
                Some(i) => self.options[(i + 1) % self.options.len()],
                None => self.options[0],
            };
            *current = next.to_string();
        }
    }

    /// Select the previous option (wraps around). No-op for non-choice fields.
    pub fn cycle_prev(&mut self) {
        if let FieldValue::Choice(current) = &mut self.value {
            if self.options.is_empty() {
                return;
            }
            let prev = match self.options.iter().position(|o| o == current) {
                Some(0) | None => self.options[self.options.len() - 1],
                Some(i) => self.options[i - 1],
            };
            *current = prev.to_string();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(s) => {
                if s.is_empty() {
                    "Select".to_string()
                } else {
                    s.clone()
                }
            }
            FieldValue::File(s) => {
                if s.is_empty() {
                    "(no file)".to_string()
                } else {
                    s.clone()
                }
            }
        }
    }
}
