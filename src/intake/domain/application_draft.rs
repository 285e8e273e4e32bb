/// Draft value of the application name field.
///
/// The draft is held by the step alone; only `submit` hands a value to the
/// wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    value: String,
}

impl ApplicationDraft {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Returns the trimmed name, or `None` while submit is disabled.
    pub fn submit(&self) -> Option<String> {
        if self.can_submit() {
            Some(self.value.trim().to_string())
        } else {
            None
        }
    }
}
