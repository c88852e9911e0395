/// One-contact viewport over the filtered view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.len.saturating_sub(1));
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Called whenever the filtered view changes length.
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        if self.index > 0 && self.index >= len {
            self.index = 0;
        }
    }

    pub fn current<'a, T>(&self, view: &'a [T]) -> Option<&'a T> {
        view.get(self.index)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn label(&self) -> String {
        if self.len == 0 {
            "No results".to_string()
        } else {
            format!("Contact {} of {}", self.index + 1, self.len)
        }
    }
}
