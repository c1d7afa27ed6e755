//! Code registry: bidirectional lookup between ISO 639-3 codes and names.
//!
//! The registry is built once, either from the embedded default table or from
//! a SIL `iso-639-3.tab` file, and is immutable afterwards. Construction
//! enforces that the mapping is a bijection: every code maps to exactly one
//! name and every name (compared case-insensitively) resolves back to exactly
//! one code.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DetectError, RegistryError};
use crate::table;

/// Immutable bidirectional table of language codes and display names.
///
/// Lookups by code are case-sensitive (model output is already lowercase
/// three-letter codes); lookups by name are case-insensitive because callers
/// pass arbitrary casing (`"english"`, `"English"`).
///
/// Safe to share across threads by reference once constructed.
#[derive(Debug, Clone)]
pub struct CodeRegistry {
    name_by_code: HashMap<String, String>,
    /// Keys are case-folded names.
    code_by_name: HashMap<String, String>,
}

impl CodeRegistry {
    /// Build the registry from the embedded default table.
    pub fn builtin() -> Self {
        Self::from_pairs(
            table::BUILTIN
                .iter()
                .map(|&(code, name)| (code.to_string(), name.to_string())),
        )
        .expect("embedded code table should be a bijection")
    }

    /// Build the registry from arbitrary (code, name) pairs.
    ///
    /// # Returns
    /// * `Ok(CodeRegistry)` if the pairs form a non-empty bijection
    /// * `Err(RegistryError)` on duplicate codes, duplicate names, or an
    ///   empty input
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, RegistryError> {
        let mut name_by_code = HashMap::new();
        let mut code_by_name = HashMap::new();

        for (code, name) in pairs {
            let folded = name.to_lowercase();
            if name_by_code.contains_key(&code) {
                return Err(RegistryError::DuplicateCode(code));
            }
            if code_by_name.contains_key(&folded) {
                return Err(RegistryError::DuplicateName(name));
            }
            code_by_name.insert(folded, code.clone());
            name_by_code.insert(code, name);
        }

        if name_by_code.is_empty() {
            return Err(RegistryError::EmptyTable);
        }

        Ok(Self {
            name_by_code,
            code_by_name,
        })
    }

    /// Load the registry from a SIL `iso-639-3.tab` file on disk.
    ///
    /// The file is tab-separated with a header row; only the `Id` (column 0)
    /// and `Ref_Name` (column 6) columns are used.
    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let file = File::open(path)?;
        Self::from_tsv_reader(BufReader::new(file))
    }

    /// Load the registry from any reader yielding `iso-639-3.tab` content.
    pub fn from_tsv_reader(reader: impl BufRead) -> Result<Self, RegistryError> {
        let mut pairs = Vec::new();

        // Line 1 is the column header.
        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < 7 {
                return Err(RegistryError::MalformedRow { line: index + 1 });
            }
            pairs.push((columns[0].to_string(), columns[6].to_string()));
        }

        Self::from_pairs(pairs)
    }

    /// Resolve a language code to its display name.
    ///
    /// # Returns
    /// * `Ok(&str)` with the name if the code is known
    /// * `Err(DetectError::UnknownCode)` otherwise
    pub fn name_for_code(&self, code: &str) -> Result<&str, DetectError> {
        self.name_by_code
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| DetectError::UnknownCode(code.to_string()))
    }

    /// Resolve a display name (any casing) to its language code.
    ///
    /// # Returns
    /// * `Ok(&str)` with the code if the name is known
    /// * `Err(DetectError::UnknownName)` otherwise
    pub fn code_for_name(&self, name: &str) -> Result<&str, DetectError> {
        self.code_by_name
            .get(&name.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| DetectError::UnknownName(name.to_string()))
    }

    /// Check whether a code has an entry.
    pub fn contains_code(&self, code: &str) -> bool {
        self.name_by_code.contains_key(code)
    }

    /// Number of (code, name) entries.
    pub fn len(&self) -> usize {
        self.name_by_code.len()
    }

    /// Whether the registry holds no entries. Construction rejects empty
    /// tables, so this is always `false` for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.name_by_code.is_empty()
    }

    /// Iterate over all known codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.name_by_code.keys().map(String::as_str)
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // ==================== Builtin Table Tests ====================

    #[test]
    fn test_builtin_lookup_by_code() {
        let registry = CodeRegistry::builtin();
        assert_eq!(registry.name_for_code("eng").unwrap(), "English");
        assert_eq!(registry.name_for_code("pol").unwrap(), "Polish");
        assert_eq!(registry.name_for_code("ron").unwrap(), "Romanian");
    }

    #[test]
    fn test_builtin_lookup_by_name_is_case_insensitive() {
        let registry = CodeRegistry::builtin();
        assert_eq!(registry.code_for_name("English").unwrap(), "eng");
        assert_eq!(registry.code_for_name("english").unwrap(), "eng");
        assert_eq!(registry.code_for_name("ENGLISH").unwrap(), "eng");
    }

    #[test]
    fn test_unknown_code_errors() {
        let registry = CodeRegistry::builtin();
        let err = registry.name_for_code("zzz").unwrap_err();
        assert!(matches!(err, DetectError::UnknownCode(code) if code == "zzz"));
    }

    #[test]
    fn test_unknown_name_errors() {
        let registry = CodeRegistry::builtin();
        let err = registry.code_for_name("Klingon").unwrap_err();
        assert!(matches!(err, DetectError::UnknownName(name) if name == "Klingon"));
    }

    #[test]
    fn test_code_lookup_is_case_sensitive() {
        let registry = CodeRegistry::builtin();
        assert!(registry.name_for_code("ENG").is_err());
    }

    #[test]
    fn test_builtin_roundtrip_is_bijective() {
        let registry = CodeRegistry::builtin();
        for code in registry.codes() {
            let name = registry.name_for_code(code).unwrap();
            assert_eq!(registry.code_for_name(name).unwrap(), code);
        }
    }

    #[test]
    fn test_default_is_builtin() {
        let registry = CodeRegistry::default();
        assert_eq!(registry.len(), CodeRegistry::builtin().len());
        assert!(!registry.is_empty());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_from_pairs_rejects_duplicate_code() {
        let pairs = vec![
            ("eng".to_string(), "English".to_string()),
            ("eng".to_string(), "Anglic".to_string()),
        ];
        let err = CodeRegistry::from_pairs(pairs).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCode(code) if code == "eng"));
    }

    #[test]
    fn test_from_pairs_rejects_duplicate_name_case_insensitively() {
        let pairs = vec![
            ("eng".to_string(), "English".to_string()),
            ("enm".to_string(), "ENGLISH".to_string()),
        ];
        let err = CodeRegistry::from_pairs(pairs).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
    }

    #[test]
    fn test_from_pairs_rejects_empty_input() {
        let err = CodeRegistry::from_pairs(Vec::new()).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyTable));
    }

    // ==================== TSV Loading Tests ====================

    const SAMPLE_TSV: &str = "Id\tPart2b\tPart2t\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\n\
        eng\teng\teng\ten\tI\tL\tEnglish\t\n\
        pol\tpol\tpol\tpl\tI\tL\tPolish\t\n";

    #[test]
    fn test_from_tsv_reader_parses_id_and_ref_name() {
        let registry = CodeRegistry::from_tsv_reader(Cursor::new(SAMPLE_TSV)).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name_for_code("eng").unwrap(), "English");
        assert_eq!(registry.code_for_name("polish").unwrap(), "pol");
    }

    #[test]
    fn test_from_tsv_reader_skips_blank_lines() {
        let tsv = format!("{}\n\n", SAMPLE_TSV);
        let registry = CodeRegistry::from_tsv_reader(Cursor::new(tsv)).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_from_tsv_reader_rejects_short_rows() {
        let tsv = "Id\tPart2b\tPart2t\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\n\
            eng\tEnglish\n";
        let err = CodeRegistry::from_tsv_reader(Cursor::new(tsv)).unwrap_err();
        assert!(matches!(err, RegistryError::MalformedRow { line: 2 }));
    }

    #[test]
    fn test_from_tsv_reader_header_only_is_empty() {
        let tsv = "Id\tPart2b\tPart2t\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\n";
        let err = CodeRegistry::from_tsv_reader(Cursor::new(tsv)).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyTable));
    }

    #[test]
    fn test_from_tsv_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("iso-639-3.tab");
        std::fs::write(&path, SAMPLE_TSV).expect("write table");

        let registry = CodeRegistry::from_tsv_path(&path).unwrap();
        assert_eq!(registry.name_for_code("pol").unwrap(), "Polish");
    }

    #[test]
    fn test_from_tsv_path_missing_file() {
        let err = CodeRegistry::from_tsv_path("/nonexistent/iso-639-3.tab").unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }
}
