use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub suffix: String,
    pub file_count: usize,
    pub rows: usize,
    pub columns: usize,
    pub output: PathBuf,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub groups: Vec<GroupSummary>,
}
