//! Redundant suppression marker detection rule.
//!
//! A suppressed literal that is a catalog key does not need the marker, but
//! only when it is alone on its line: with several literals the marker may
//! be there for one of the others. Sources backed by a form file are
//! skipped, since their code is generated.

use std::collections::HashMap;

use crate::{
    core::SourceModel,
    findings::{Finding, FindingKind},
};

pub fn check_redundant_suppressions(source: &SourceModel) -> Vec<Finding> {
    if source.generated {
        return Vec::new();
    }

    let mut per_line: HashMap<usize, usize> = HashMap::new();
    for occurrence in &source.occurrences {
        *per_line.entry(occurrence.line).or_default() += 1;
    }

    source
        .occurrences
        .iter()
        .filter(|o| o.found_in_catalog && o.suppressed && per_line.get(&o.line) == Some(&1))
        .map(|o| {
            Finding::new(
                FindingKind::RedundantSuppressionMarker,
                &source.file_path,
                o.line,
                &o.text,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StringOccurrence;

    fn found_suppressed(text: &str, line: usize) -> StringOccurrence {
        let mut o = StringOccurrence::new(text, line, false);
        o.suppressed = true;
        o.found_in_catalog = true;
        o
    }

    #[test]
    fn test_sole_literal_on_line_is_reported() {
        let source = SourceModel::new("A.java", false, vec![found_suppressed("LBL_Name", 3)]);

        let findings = check_redundant_suppressions(&source);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::RedundantSuppressionMarker);
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[0].message, "LBL_Name");
    }

    #[test]
    fn test_shared_line_is_not_reported() {
        let mut other = StringOccurrence::new("some.property", 3, false);
        other.suppressed = true;
        let source = SourceModel::new(
            "A.java",
            false,
            vec![found_suppressed("LBL_Name", 3), other],
        );

        assert!(check_redundant_suppressions(&source).is_empty());
    }

    #[test]
    fn test_generated_source_is_skipped() {
        let source = SourceModel::new("Form.java", true, vec![found_suppressed("LBL_Name", 3)]);
        assert!(check_redundant_suppressions(&source).is_empty());
    }

    #[test]
    fn test_unsuppressed_found_literal_is_fine() {
        let mut o = StringOccurrence::new("LBL_Name", 3, true);
        o.found_in_catalog = true;
        let source = SourceModel::new("A.java", false, vec![o]);
        assert!(check_redundant_suppressions(&source).is_empty());
    }
}
