use crate::error::StitchError;

use std::num::NonZeroUsize;

/// Extensions admitted to the eligible stream, matched exactly.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Suffix after the final dot of `name`, dot excluded.
/// A name without a dot has no extension; `".png"` has extension `"png"`.
pub fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[i + 1..])
}

pub fn is_eligible(name: &str) -> bool {
    extension(name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// Keeps every `nth` eligible entry of a listing.
///
/// The sample index counts eligible entries only, starting at 1, so
/// interspersed non-image files never shift which images get picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector{
    nth: NonZeroUsize,
}

impl Selector{
    pub fn new(nth: i64) -> Result<Self, StitchError>{
        usize::try_from(nth)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(|nth| Self{ nth })
            .ok_or(StitchError::InvalidStride{ nth })
    }

    pub fn nth(&self) -> usize{
        self.nth.get()
    }

    /// Filters `entries` down to the selected names, keeping listing order.
    pub fn select<I, S>(&self, entries: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nth = self.nth.get();
        let mut index = 0usize;
        let mut selected = Vec::new();
        for entry in entries {
            if !is_eligible(entry.as_ref()) {
                log::debug!("Skipping {}", entry.as_ref());
                continue;
            }
            index += 1;
            if index % nth == 0 {
                selected.push(entry);
            }
        }
        selected
    }
}
