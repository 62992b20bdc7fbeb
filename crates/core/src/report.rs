use crate::model::CountSummary;

const SEPARATOR_WIDTH: usize = 50;

/// Renders the per-directory breakdown followed by the grand totals.
pub fn render_report(summary: &CountSummary) -> String {
    let mut out = String::new();
    for tally in &summary.directories {
        out.push_str(&format!("{}:\n", tally.path));
        for item in &tally.counts {
            out.push_str(&format!("\t— {}: {}\n", item.category, item.count));
        }
    }

    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out.push_str(&format!("Total: {}\n", summary.grand_total()));
    for item in summary.totals() {
        out.push_str(&format!("\t— {}: {}\n", item.category, item.count));
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::model::{CategoryCount, CountSummary, DirectoryTally};

    use super::render_report;

    #[test]
    fn renders_directories_then_totals() {
        let summary = CountSummary {
            directories: vec![DirectoryTally {
                path: "/vacation".to_string(),
                counts: vec![
                    CategoryCount {
                        category: "JPEG",
                        count: 2,
                    },
                    CategoryCount {
                        category: "RAW",
                        count: 1,
                    },
                ],
            }],
        };

        let expected = format!(
            "/vacation:\n\t— JPEG: 2\n\t— RAW: 1\n{}\nTotal: 3\n\t— JPEG: 2\n\t— RAW: 1\n",
            "=".repeat(50)
        );
        assert_eq!(render_report(&summary), expected);
    }

    #[test]
    fn empty_summary_renders_separator_and_zero_total() {
        let expected = format!("{}\nTotal: 0\n", "=".repeat(50));
        assert_eq!(render_report(&CountSummary::default()), expected);
    }
}
