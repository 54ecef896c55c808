//! Embedded template catalog.
//!
//! The templates that ship with bootforge are compiled into the binary so
//! the CLI works without a templates directory on disk. Bodies are opaque
//! fixtures: no in-body variable substitution happens anywhere — paths are
//! the only parameterized part of materialization.

use indexmap::IndexMap;

/// Catalog of template bodies keyed by `source_dir/filename`.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: IndexMap<String, &'static str>,
}

macro_rules! embed {
    ($entries:expr, $dir:literal, $file:literal) => {
        $entries.insert(
            concat!($dir, "/", $file).to_string(),
            include_str!(concat!("../templates/", $dir, "/", $file)),
        );
    };
}

impl TemplateCatalog {
    /// The templates shipped with this build.
    pub fn builtin() -> Self {
        let mut entries = IndexMap::new();

        embed!(entries, "server/web/main", "BadRequestException.java");
        embed!(entries, "server/web/main", "ErrorConstants.java");
        embed!(entries, "server/web/main", "ExceptionTranslator.java");
        embed!(entries, "server/web/main", "FieldErrorDto.java");
        embed!(entries, "server/web/main", "HeaderUtil.java");
        embed!(entries, "server/web/main", "ProblemConfiguration.java");

        embed!(entries, "server/web/test", "BadRequestExceptionTest.java");
        embed!(entries, "server/web/test", "ExceptionTranslatorIT.java");
        embed!(entries, "server/web/test", "ExceptionTranslatorTest.java");
        embed!(entries, "server/web/test", "ExceptionTranslatorTestController.java");
        embed!(entries, "server/web/test", "FieldErrorDtoTest.java");
        embed!(entries, "server/web/test", "HeaderUtilTest.java");

        Self { entries }
    }

    /// Body of one template, if present.
    pub fn get(&self, source_dir: &str, filename: &str) -> Option<&'static str> {
        self.entries.get(&format!("{source_dir}/{filename}")).copied()
    }

    pub fn contains(&self, source_dir: &str, filename: &str) -> bool {
        self.entries.contains_key(&format!("{source_dir}/{filename}"))
    }

    /// All `source_dir/filename` keys, in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ships_six_per_tree() {
        let catalog = TemplateCatalog::builtin();
        let main = catalog
            .keys()
            .filter(|k| k.starts_with("server/web/main/"))
            .count();
        let test = catalog
            .keys()
            .filter(|k| k.starts_with("server/web/test/"))
            .count();
        assert_eq!(main, 6);
        assert_eq!(test, 6);
    }

    #[test]
    fn lookup_by_dir_and_filename() {
        let catalog = TemplateCatalog::builtin();
        assert!(catalog.contains("server/web/main", "ErrorConstants.java"));
        assert!(!catalog.contains("server/web/main", "Nope.java"));
        assert!(
            catalog
                .get("server/web/test", "HeaderUtilTest.java")
                .unwrap()
                .contains("HeaderUtil")
        );
    }
}
