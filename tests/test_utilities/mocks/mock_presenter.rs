use sentinel_assess::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps every rendered dashboard
#[derive(Default, Clone)]
pub struct MockPresenter {
    pub outputs: Arc<Mutex<Vec<String>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn last_output(&self) -> Option<String> {
        self.outputs.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
