use crate::utils::error::{DirectoryError, Result};

/// Load-more disclosure window over a filtered sequence. `disclosed` starts at
/// `page_size` and grows by one page at a time; any criteria change must
/// `reset()` before the next evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
    disclosed: usize,
}

impl PageWindow {
    /// A zero page size is rejected, not clamped, so caller bugs surface.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(DirectoryError::InvalidFilterState {
                field: "page_size".to_string(),
                value: page_size.to_string(),
                reason: "page size must be at least 1".to_string(),
            });
        }
        Ok(Self {
            page_size,
            disclosed: page_size,
        })
    }

    /// Rebuild a window from request parameters (stateless callers carry the
    /// disclosed count themselves). The count can never sit below one page.
    pub fn restore(page_size: usize, disclosed: usize) -> Result<Self> {
        let mut window = Self::new(page_size)?;
        if disclosed < page_size {
            return Err(DirectoryError::InvalidFilterState {
                field: "disclosed".to_string(),
                value: disclosed.to_string(),
                reason: format!("disclosed count below page size {}", page_size),
            });
        }
        window.disclosed = disclosed;
        Ok(window)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn disclosed(&self) -> usize {
        self.disclosed
    }

    pub fn reset(&mut self) {
        self.disclosed = self.page_size;
    }

    pub fn load_more(&mut self) {
        self.disclosed += self.page_size;
    }

    /// First `disclosed` elements of the filtered sequence, or all of them.
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..filtered.len().min(self.disclosed)]
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.disclosed < filtered_len
    }
}
