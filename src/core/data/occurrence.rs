/// One string literal found in a source file.
///
/// Created by the extractor; only `found_in_catalog` changes afterwards,
/// when the cross-reference pass matches the text against a catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringOccurrence {
    /// Literal content without its delimiters (escapes are kept verbatim).
    pub text: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// The literal shares its line with the bundle-lookup identifier
    /// (e.g. `NbBundle.getMessage(Foo.class, "KEY")`).
    pub near_lookup_identifier: bool,
    /// A line comment with the suppression marker ends this line.
    pub suppressed: bool,
    /// Set during cross-reference when the text is a key of a catalog.
    pub found_in_catalog: bool,
}

impl StringOccurrence {
    pub fn new(text: impl Into<String>, line: usize, near_lookup_identifier: bool) -> Self {
        Self {
            text: text.into(),
            line,
            near_lookup_identifier,
            suppressed: false,
            found_in_catalog: false,
        }
    }
}

/// All occurrences extracted from one source file.
#[derive(Debug, Clone)]
pub struct SourceModel {
    pub file_path: String,
    /// Source has a sibling form file, so its code is (partly) generated.
    pub generated: bool,
    pub occurrences: Vec<StringOccurrence>,
}

impl SourceModel {
    pub fn new(
        file_path: impl Into<String>,
        generated: bool,
        occurrences: Vec<StringOccurrence>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            generated,
            occurrences,
        }
    }
}
