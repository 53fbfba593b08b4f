//! Insertion-ordered grouping of dependency records by (name, bucket)

use crate::domain::{ConflictSource, DependencyKind, DependencyRecord};
use std::collections::{HashMap, HashSet};

/// All records requesting one package in one bucket, in input order
#[derive(Debug, Clone)]
pub struct DependencyGroup<'a> {
    /// Package name
    pub name: &'a str,
    /// Bucket the records belong to
    pub kind: DependencyKind,
    /// Records in the order they were supplied
    pub records: Vec<&'a DependencyRecord>,
}

impl<'a> DependencyGroup<'a> {
    fn new(record: &'a DependencyRecord) -> Self {
        Self {
            name: &record.name,
            kind: record.kind(),
            records: vec![record],
        }
    }

    /// Specifier of the last record: the one that gets written
    pub fn winning_version(&self) -> &'a str {
        // groups are never created empty
        self.records
            .last()
            .copied()
            .map(|r| r.version_spec.as_str())
            .unwrap_or_default()
    }

    /// Distinct specifiers in first-seen order
    pub fn distinct_versions(&self) -> Vec<&'a str> {
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut versions: Vec<&'a str> = Vec::new();
        for record in self.records.iter().copied() {
            if seen.insert(record.version_spec.as_str()) {
                versions.push(&record.version_spec);
            }
        }
        versions
    }

    /// Distinct (source, version) pairs in first-seen order
    pub fn distinct_sources(&self) -> Vec<ConflictSource> {
        let mut seen: HashSet<(&'a str, &'a str)> = HashSet::new();
        let mut sources: Vec<ConflictSource> = Vec::new();
        for record in self.records.iter().copied() {
            if seen.insert((record.source.as_str(), record.version_spec.as_str())) {
                sources.push(ConflictSource::new(&record.source, &record.version_spec));
            }
        }
        sources
    }

    /// Returns true if the records disagree on the specifier
    pub fn is_conflicted(&self) -> bool {
        self.distinct_versions().len() > 1
    }
}

/// Partition records into groups, ordered by first appearance
pub fn group_records(records: &[DependencyRecord]) -> Vec<DependencyGroup<'_>> {
    let mut groups: Vec<DependencyGroup<'_>> = Vec::new();
    let mut index: HashMap<(&str, DependencyKind), usize> = HashMap::new();

    for record in records {
        let key = (record.name.as_str(), record.kind());
        match index.get(&key) {
            Some(&i) => groups[i].records.push(record),
            None => {
                index.insert(key, groups.len());
                groups.push(DependencyGroup::new(record));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_order_follows_first_appearance() {
        let records = vec![
            DependencyRecord::runtime("b", "1", "S1"),
            DependencyRecord::runtime("a", "1", "S1"),
            DependencyRecord::runtime("b", "2", "S2"),
        ];
        let groups = group_records(&records);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(groups[0].records.len(), 2);
    }

    #[test]
    fn test_buckets_are_grouped_separately() {
        let records = vec![
            DependencyRecord::runtime("ts", "^5.0.0", "A"),
            DependencyRecord::development("ts", "^4.0.0", "B"),
        ];
        let groups = group_records(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].kind, DependencyKind::Runtime);
        assert_eq!(groups[1].kind, DependencyKind::Development);
        assert!(!groups[0].is_conflicted());
        assert!(!groups[1].is_conflicted());
    }

    #[test]
    fn test_winning_version_is_last() {
        let records = vec![
            DependencyRecord::runtime("x", "^2.0.0", "A"),
            DependencyRecord::runtime("x", "^1.0.0", "B"),
        ];
        let groups = group_records(&records);
        assert_eq!(groups[0].winning_version(), "^1.0.0");
        assert!(groups[0].is_conflicted());
    }

    #[test]
    fn test_distinct_sources_collapse_duplicates() {
        let records = vec![
            DependencyRecord::runtime("x", "1", "A"),
            DependencyRecord::runtime("x", "2", "B"),
            DependencyRecord::runtime("x", "1", "A"),
            DependencyRecord::runtime("x", "1", "C"),
        ];
        let groups = group_records(&records);
        assert_eq!(
            groups[0].distinct_sources(),
            vec![
                ConflictSource::new("A", "1"),
                ConflictSource::new("B", "2"),
                ConflictSource::new("C", "1"),
            ]
        );
        assert_eq!(groups[0].distinct_versions(), vec!["1", "2"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_records(&[]).is_empty());
    }
}
