/// Index of the active slide in a wrapping carousel or lightbox.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Open at `index`, clamped to the last slide.
    pub fn open_at(len: usize, index: usize) -> Self {
        Self {
            len,
            active: index.min(len.saturating_sub(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    pub fn back(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
        self.active
    }
}
