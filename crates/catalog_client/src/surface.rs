use crate::markup::Markup;

/// The region of the host page that receives rendered output.
pub trait DisplaySurface {
    /// Discards the current content and writes `markup` in its place.
    fn replace_container(&mut self, markup: &Markup);
}

/// Surface that keeps the container content in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    content: Markup,
    writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &Markup {
        &self.content
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplaySurface for MemorySurface {
    fn replace_container(&mut self, markup: &Markup) {
        self.content = markup.clone();
        self.writes += 1;
    }
}
