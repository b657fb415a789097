//! Finding types for bundle verification results.
//!
//! Every problem the scanner reports is a [`Finding`]: a kind, the file and
//! line it points at, and a short message (usually the offending string or
//! key). The kind decides the severity and the heading it is printed under.

// ============================================================
// Severity
// ============================================================

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================
// Finding Kind
// ============================================================

/// Finding classification. Declaration order is the order findings are
/// grouped in when printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FindingKind {
    /// Literal next to a bundle lookup, but the key is not in any catalog.
    MissingKeyInBundle,
    /// Literal neither suppressed nor found in a catalog.
    MissingSuppressionOrKey,
    /// Catalog entry never referenced.
    PossiblyUnusedEntry,
    /// Module catalog declared in the manifest is missing or incomplete.
    ModuleCatalog,
    /// Layer file or a key it references is missing.
    LayerReference,
    /// Suppressed literal that is actually a catalog key.
    RedundantSuppressionMarker,
    /// A file of the group could not be read or parsed.
    UnreadableFile,
}

impl FindingKind {
    pub const ALL: [FindingKind; 7] = [
        FindingKind::MissingKeyInBundle,
        FindingKind::MissingSuppressionOrKey,
        FindingKind::PossiblyUnusedEntry,
        FindingKind::ModuleCatalog,
        FindingKind::LayerReference,
        FindingKind::RedundantSuppressionMarker,
        FindingKind::UnreadableFile,
    ];

    pub fn severity(self) -> Severity {
        match self {
            FindingKind::MissingKeyInBundle
            | FindingKind::ModuleCatalog
            | FindingKind::LayerReference
            | FindingKind::UnreadableFile => Severity::Error,
            FindingKind::MissingSuppressionOrKey
            | FindingKind::PossiblyUnusedEntry
            | FindingKind::RedundantSuppressionMarker => Severity::Warning,
        }
    }

    /// Heading printed above the findings of this kind.
    pub fn description(self) -> &'static str {
        match self {
            FindingKind::MissingKeyInBundle => "Very likely missing key in resource bundle",
            FindingKind::MissingSuppressionOrKey => {
                "Probably missing key in resource bundle or string should be marked with // NOI18N"
            }
            FindingKind::PossiblyUnusedEntry => "Probably unused resource bundle key",
            FindingKind::ModuleCatalog => "Module's resource bundle specified in manifest.mf",
            FindingKind::LayerReference => "Module's layer file specified in manifest.mf",
            FindingKind::RedundantSuppressionMarker => {
                "It is redundant to use NOI18N when the string actually is in resource bundle"
            }
            FindingKind::UnreadableFile => "File could not be read",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::MissingKeyInBundle => write!(f, "missing-key"),
            FindingKind::MissingSuppressionOrKey => write!(f, "missing-noi18n-or-key"),
            FindingKind::PossiblyUnusedEntry => write!(f, "unused-key"),
            FindingKind::ModuleCatalog => write!(f, "module-bundle"),
            FindingKind::LayerReference => write!(f, "layer-reference"),
            FindingKind::RedundantSuppressionMarker => write!(f, "redundant-noi18n"),
            FindingKind::UnreadableFile => write!(f, "unreadable-file"),
        }
    }
}

// ============================================================
// Finding
// ============================================================

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    pub message: String,
}

impl Finding {
    pub fn new(
        kind: FindingKind,
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}
