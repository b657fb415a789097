//! Translation export: primary catalogs to table rows.

use crate::core::{
    group::ParsedGroup,
    translation::{
        escape::{decode_unicode_escapes, escape_quotes},
        table::TableColumn,
    },
};

/// Build one row per primary catalog entry of every group.
///
/// Groups and packages are visited in sorted order, entries in file order.
/// The translation column is filled from the package's existing catalog for
/// `locale` (base name `primary_stem`), or left empty. Quotes are doubled in
/// every column, ready for [`write_table`](super::write_table).
pub fn export_rows(groups: &[ParsedGroup], locale: &str, primary_stem: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for group in groups {
        for (sub_path, catalogs) in &group.catalogs {
            let Some(primary) = &catalogs.primary else {
                continue;
            };
            let translated = catalogs
                .translated
                .iter()
                .find(|t| t.locale == locale && t.base_name == primary_stem);

            for entry in primary.entries.values() {
                let translation = translated
                    .and_then(|t| t.catalog.get(&entry.key))
                    .map(|t| escape_quotes(&decode_unicode_escapes(&t.value)))
                    .unwrap_or_default();

                let mut row = vec![String::new(); TableColumn::ALL.len()];
                row[TableColumn::Key.index()] = escape_quotes(&entry.key);
                row[TableColumn::Primary.index()] = escape_quotes(&entry.value);
                row[TableColumn::Translated.index()] = translation;
                row[TableColumn::Group.index()] = escape_quotes(&group.identity);
                row[TableColumn::Package.index()] = escape_quotes(sub_path);
                rows.push(row);
            }
        }
    }

    rows
}
