use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::classify::category_for;
use crate::error::CountError;
use crate::model::{CategoryCount, CountSummary, DirectoryTally};

/// Walks `root` and tallies recognized photo files per descendant directory.
///
/// The root itself is never reported: files sitting directly under it are
/// skipped, and directory keys are root-relative. Directories without a
/// single recognized file are omitted from the summary. Per-entry walk
/// errors (permission denied, entries vanishing mid-walk, non-UTF-8 names)
/// are absorbed and the walk continues.
pub fn count_photos(root: &Path) -> Result<CountSummary, CountError> {
    if !root.exists() {
        return Err(CountError::RootNotFound(root.to_path_buf()));
    }

    let root_prefix = root.to_string_lossy().into_owned();
    let mut summary = CountSummary::default();

    for item in WalkDir::new(root).follow_links(false) {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                debug!("walk error under {}: {}", root.display(), err);
                continue;
            }
        };
        // Depth-1 entries sit directly in the root; only deeper files count.
        if entry.depth() < 2 || !entry.file_type().is_file() {
            continue;
        }

        let Some(category) = entry.file_name().to_str().and_then(category_for) else {
            continue;
        };
        let Some(parent) = entry.path().parent() else {
            continue;
        };

        let parent = parent.to_string_lossy();
        let relative = parent
            .strip_prefix(root_prefix.as_str())
            .unwrap_or(parent.as_ref());
        bump(&mut summary, relative, category);
    }

    Ok(summary)
}

fn bump(summary: &mut CountSummary, path: &str, category: &'static str) {
    let index = match summary
        .directories
        .iter()
        .position(|tally| tally.path == path)
    {
        Some(index) => index,
        None => {
            summary.directories.push(DirectoryTally {
                path: path.to_string(),
                counts: Vec::new(),
            });
            summary.directories.len() - 1
        }
    };

    let tally = &mut summary.directories[index];
    match tally
        .counts
        .iter_mut()
        .find(|item| item.category == category)
    {
        Some(item) => item.count += 1,
        None => tally.counts.push(CategoryCount { category, count: 1 }),
    }
}
