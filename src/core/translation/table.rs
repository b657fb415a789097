//! The flat translation table exchanged with translators.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

/// Columns of the translation table, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Key,
    Primary,
    Translated,
    Group,
    Package,
}

impl TableColumn {
    pub const ALL: [TableColumn; 5] = [
        TableColumn::Key,
        TableColumn::Primary,
        TableColumn::Translated,
        TableColumn::Group,
        TableColumn::Package,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn header(self) -> &'static str {
        match self {
            TableColumn::Key => "Variable name",
            TableColumn::Primary => "English",
            TableColumn::Translated => "Translation",
            TableColumn::Group => "Module name",
            TableColumn::Package => "Package",
        }
    }
}

/// The header row written before the exported rows.
pub fn header_row() -> Vec<String> {
    TableColumn::ALL
        .iter()
        .map(|c| c.header().to_string())
        .collect()
}

/// Translations keyed by group identity, package sub-path and catalog key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    groups: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
}

impl TranslationTable {
    /// Build the table from decoded rows (header row excluded).
    ///
    /// Every row must have exactly five fields; a single bad row rejects the
    /// whole table. Rows with a blank translation are skipped.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let mut table = Self::default();
        let expected = TableColumn::ALL.len();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                bail!(
                    "Row {} has wrong number of values ({} instead of {}): {:?}",
                    index + 1,
                    row.len(),
                    expected,
                    row
                );
            }

            let translated = &row[TableColumn::Translated.index()];
            if translated.trim().is_empty() {
                continue;
            }

            table.insert(
                &row[TableColumn::Group.index()],
                &row[TableColumn::Package.index()],
                &row[TableColumn::Key.index()],
                translated,
            );
        }

        Ok(table)
    }

    pub fn insert(&mut self, group: &str, sub_path: &str, key: &str, translated: &str) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .entry(sub_path.to_string())
            .or_default()
            .insert(key.to_string(), translated.to_string());
    }

    /// Packages of `group` with their key → translation maps (keys sorted).
    pub fn group(&self, group: &str) -> Option<&BTreeMap<String, BTreeMap<String, String>>> {
        self.groups.get(group)
    }

    pub fn get(&self, group: &str, sub_path: &str, key: &str) -> Option<&str> {
        self.groups
            .get(group)?
            .get(sub_path)?
            .get(key)
            .map(String::as_str)
    }

    /// Iterate `(group, sub_path, translations)` in sorted order.
    pub fn packages(&self) -> impl Iterator<Item = (&str, &str, &BTreeMap<String, String>)> {
        self.groups.iter().flat_map(|(group, packages)| {
            packages
                .iter()
                .map(move |(sub_path, keys)| (group.as_str(), sub_path.as_str(), keys))
        })
    }

    pub fn len(&self) -> usize {
        self.packages().map(|(_, _, keys)| keys.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_row() {
        assert_eq!(
            header_row(),
            vec!["Variable name", "English", "Translation", "Module name", "Package"]
        );
    }

    #[test]
    fn test_from_rows() {
        let table = TranslationTable::from_rows(vec![
            row(&["K2", "Two", "Dva", "module1", "org/example"]),
            row(&["K1", "One", "Jedna", "module1", "org/example"]),
            row(&["K3", "Three", "  ", "module1", "org/example"]),
            row(&["K1", "One", "Ein", "module2", "org/other"]),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("module1", "org/example", "K1"), Some("Jedna"));
        assert_eq!(table.get("module1", "org/example", "K3"), None);
        assert_eq!(table.get("module2", "org/other", "K1"), Some("Ein"));

        let keys: Vec<&str> = table.group("module1").unwrap()["org/example"]
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["K1", "K2"]);
    }

    #[test]
    fn test_wrong_column_count_rejects_table() {
        let result = TranslationTable::from_rows(vec![
            row(&["K1", "One", "Jedna", "module1", "org/example"]),
            row(&["K2", "Two", "Dva", "module1"]),
        ]);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Row 2 has wrong number of values (4 instead of 5)"));
    }

    #[test]
    fn test_empty_table() {
        let table = TranslationTable::from_rows(Vec::<Vec<String>>::new()).unwrap();
        assert!(table.is_empty());
    }
}
