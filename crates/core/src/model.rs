use serde::Serialize;

/// A named grouping of file extensions considered the same kind of photo file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileType {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryTally {
    /// Directory path with the scanned root's prefix stripped.
    pub path: String,
    /// Only categories with at least one match, in first-match order.
    pub counts: Vec<CategoryCount>,
}

/// Aggregate result of one counting pass. Directory order follows the
/// walk's visitation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct CountSummary {
    pub directories: Vec<DirectoryTally>,
}

impl CountSummary {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Per-category totals across all directories, in first-seen order.
    pub fn totals(&self) -> Vec<CategoryCount> {
        let mut totals: Vec<CategoryCount> = Vec::new();
        for tally in &self.directories {
            for item in &tally.counts {
                match totals
                    .iter_mut()
                    .find(|total| total.category == item.category)
                {
                    Some(total) => total.count += item.count,
                    None => totals.push(item.clone()),
                }
            }
        }
        totals
    }

    pub fn grand_total(&self) -> u64 {
        self.directories
            .iter()
            .flat_map(|tally| tally.counts.iter())
            .map(|item| item.count)
            .sum()
    }
}
