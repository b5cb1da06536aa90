/// Settings for [`archive`](crate::archive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub deterministic: bool,
}

impl ArchiveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte-reproducible output: fixed timestamps, normalized modes,
    /// maximum compression and sorted entries.
    pub fn deterministic(mut self, deterministic: bool) -> Self {
        self.deterministic = deterministic;
        self
    }
}
