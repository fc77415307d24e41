/// Monotonic counter coordinating re-fetches after a mutation. The
/// authenticated shell owns one; a successful creation bumps it and every
/// observing view re-fetches. Fetches stamp the generation they were issued
/// under and discard their response once the stamp is no longer current, so a
/// late response can never overwrite a newer read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self) {
        self.0 += 1;
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Whether a response stamped with `issued` may still be applied.
    pub fn is_current(self, issued: Generation) -> bool {
        self == issued
    }
}
