#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub processed: u64,
    pub kept: u64,
    pub removed: u64,
}

impl ProcessingStats {
    pub fn record(&mut self, outcome: super::Outcome) {
        self.processed += 1;
        match outcome {
            super::Outcome::Kept => self.kept += 1,
            super::Outcome::Removed => self.removed += 1,
        }
    }
}
