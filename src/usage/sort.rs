//! Table ordering driven by the two sortable columns.
//!
//! Sorting runs in two independent stable passes: report name first, then
//! credits. It is not a lexicographic multi-key sort. When both directives
//! are active the credit pass decides the global order and the report-name
//! order only survives between rows with equal credits.

use std::cmp::Ordering;

use feruca::Collator;

use crate::shared::types::UsageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirective {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirective {
    /// none -> ascending -> descending -> none
    pub fn next(self) -> Self {
        match self {
            SortDirective::None => SortDirective::Ascending,
            SortDirective::Ascending => SortDirective::Descending,
            SortDirective::Descending => SortDirective::None,
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirective::Ascending),
            "desc" => Some(SortDirective::Descending),
            _ => None,
        }
    }

    /// Query-string value; `None` means the key is omitted.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortDirective::None => None,
            SortDirective::Ascending => Some("asc"),
            SortDirective::Descending => Some("desc"),
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirective::Descending => ord.reverse(),
            _ => ord,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ReportName,
    Credits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub report: SortDirective,
    pub credits: SortDirective,
}

impl SortState {
    pub fn get(&self, column: SortColumn) -> SortDirective {
        match column {
            SortColumn::ReportName => self.report,
            SortColumn::Credits => self.credits,
        }
    }

    /// Advance one column's directive, leaving the other untouched.
    pub fn toggled(self, column: SortColumn) -> Self {
        match column {
            SortColumn::ReportName => SortState {
                report: self.report.next(),
                ..self
            },
            SortColumn::Credits => SortState {
                credits: self.credits.next(),
                ..self
            },
        }
    }
}

/// Unicode collation (CLDR root), so accented names sit next to their base
/// letters. Names the collator considers equal fall back to lowercase before
/// uppercase.
pub fn compare_report_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| {
        a.chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| b.cmp(a))
    })
}

pub fn sort_usage(records: &[UsageRecord], sort: SortState) -> Vec<UsageRecord> {
    let mut sorted = records.to_vec();

    if sort.report != SortDirective::None {
        let mut collator = Collator::default();
        sorted.sort_by(|a, b| {
            let a_name = a.report_name.as_deref().unwrap_or("");
            let b_name = b.report_name.as_deref().unwrap_or("");
            sort.report.apply(compare_report_names(&mut collator, a_name, b_name))
        });
    }

    if sort.credits != SortDirective::None {
        sorted.sort_by(|a, b| sort.credits.apply(a.credits.total_cmp(&b.credits)));
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [SortDirective; 3] = [
        SortDirective::None,
        SortDirective::Ascending,
        SortDirective::Descending,
    ];

    fn record(id: i64, report_name: Option<&str>, credits: f64) -> UsageRecord {
        UsageRecord {
            id,
            timestamp: "2024-04-29T02:08:29.375Z".to_string(),
            report_name: report_name.map(str::to_string),
            credits,
        }
    }

    fn sample() -> Vec<UsageRecord> {
        vec![
            record(1, Some("beta"), 5.0),
            record(2, None, 1.5),
            record(3, Some("Alpha"), 5.0),
            record(4, Some("gamma"), 0.25),
            record(5, Some("alpha"), 12.0),
            record(6, None, 5.0),
        ]
    }

    fn ids(records: &[UsageRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn directive_cycles_through_three_states() {
        let d = SortDirective::None;
        assert_eq!(d.next(), SortDirective::Ascending);
        assert_eq!(d.next().next(), SortDirective::Descending);
        assert_eq!(d.next().next().next(), SortDirective::None);
    }

    #[test]
    fn toggling_one_column_leaves_the_other() {
        let state = SortState {
            report: SortDirective::Descending,
            credits: SortDirective::None,
        };
        let toggled = state.toggled(SortColumn::Credits);
        assert_eq!(toggled.report, SortDirective::Descending);
        assert_eq!(toggled.credits, SortDirective::Ascending);
        assert_eq!(toggled.get(SortColumn::ReportName), SortDirective::Descending);
    }

    #[test]
    fn no_directives_keep_fetch_order() {
        let records = sample();
        assert_eq!(sort_usage(&records, SortState::default()), records);
    }

    #[test]
    fn report_name_sort_treats_missing_as_empty() {
        let asc = sort_usage(
            &sample(),
            SortState {
                report: SortDirective::Ascending,
                credits: SortDirective::None,
            },
        );
        assert_eq!(ids(&asc), vec![2, 6, 5, 3, 1, 4]);

        let desc = sort_usage(
            &sample(),
            SortState {
                report: SortDirective::Descending,
                credits: SortDirective::None,
            },
        );
        assert_eq!(ids(&desc), vec![4, 1, 3, 5, 2, 6]);
    }

    #[test]
    fn credit_sort_is_numeric() {
        let asc = sort_usage(
            &sample(),
            SortState {
                report: SortDirective::None,
                credits: SortDirective::Ascending,
            },
        );
        assert_eq!(ids(&asc), vec![4, 2, 1, 3, 6, 5]);

        let desc = sort_usage(
            &sample(),
            SortState {
                report: SortDirective::None,
                credits: SortDirective::Descending,
            },
        );
        assert_eq!(ids(&desc), vec![5, 1, 3, 6, 2, 4]);
    }

    #[test]
    fn credit_pass_overrides_report_pass() {
        // Credits decide the order; report names only break credit ties.
        let sorted = sort_usage(
            &sample(),
            SortState {
                report: SortDirective::Descending,
                credits: SortDirective::Ascending,
            },
        );
        assert_eq!(ids(&sorted), vec![4, 2, 1, 3, 6, 5]);

        let sorted = sort_usage(
            &sample(),
            SortState {
                report: SortDirective::Ascending,
                credits: SortDirective::Ascending,
            },
        );
        assert_eq!(ids(&sorted), vec![4, 2, 6, 3, 1, 5]);
    }

    #[test]
    fn every_directive_pair_is_a_permutation() {
        let records = sample();
        let mut expected = ids(&records);
        expected.sort();
        for report in ALL {
            for credits in ALL {
                let sorted = sort_usage(&records, SortState { report, credits });
                assert_eq!(sorted.len(), records.len());
                let mut got = ids(&sorted);
                got.sort();
                assert_eq!(got, expected, "report={report:?} credits={credits:?}");
                for r in &sorted {
                    assert!(records.contains(r));
                }
            }
        }
    }

    #[test]
    fn report_names_compare_case_insensitively() {
        let mut c = Collator::default();
        assert_eq!(compare_report_names(&mut c, "alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_report_names(&mut c, "Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_report_names(&mut c, "alpha", "Alpha"), Ordering::Less);
        assert_eq!(compare_report_names(&mut c, "", "a"), Ordering::Less);
        assert_eq!(compare_report_names(&mut c, "same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut c = Collator::default();
        assert_eq!(compare_report_names(&mut c, "Émission", "Zebra"), Ordering::Less);
        assert_eq!(compare_report_names(&mut c, "äpfel", "bar"), Ordering::Less);
        assert_eq!(compare_report_names(&mut c, "eclair", "éclair"), Ordering::Less);

        let records = vec![
            record(1, Some("Zebra Report"), 1.0),
            record(2, Some("Émission Report"), 1.0),
            record(3, Some("bar Report"), 1.0),
            record(4, Some("äpfel Report"), 1.0),
        ];
        let sorted = sort_usage(
            &records,
            SortState {
                report: SortDirective::Ascending,
                credits: SortDirective::None,
            },
        );
        assert_eq!(ids(&sorted), vec![4, 3, 2, 1]);
    }
}
