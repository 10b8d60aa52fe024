use crate::catalog::DEFAULT_CATEGORY;

/// Currently displayed page.
#[derive(Debug, Clone)]
pub(super) struct ContentState {
    selected: &'static str,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            selected: DEFAULT_CATEGORY,
        }
    }
}

impl ContentState {
    pub(super) fn selected(&self) -> &'static str {
        self.selected
    }

    pub(super) fn select(&mut self, name: &'static str) {
        self.selected = name;
    }
}
