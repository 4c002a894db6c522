//! Package descriptor (`package.json`) reading

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::errors::LookupError;
use crate::core::fs_utils::read_source_file;

pub const PACKAGE_FILE: &str = "package.json";
pub const JS_EXTENSION: &str = ".js";
pub const JSON_EXTENSION: &str = ".json";

/// The parts of a `package.json` the resolver cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    path: PathBuf,
    main: Option<String>,
}

impl PackageDescriptor {
    /// Read and parse the descriptor at `path`.
    pub fn read(path: &Path) -> Result<Self, LookupError> {
        let text = read_source_file(path)?;
        Self::parse(&text, path)
    }

    /// Parse descriptor text; `path` is where it lives on disk.
    ///
    /// The document must be a JSON object. `main` is kept only when it is a
    /// string.
    pub fn parse(text: &str, path: &Path) -> Result<Self, LookupError> {
        let fields: Map<String, Value> = serde_json::from_str(text)?;
        let main = fields
            .get("main")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Ok(Self {
            path: path.to_path_buf(),
            main,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// `main` with a `.js` suffix ensured, resolved against the descriptor's
    /// own location.
    pub fn main_path(&self) -> Result<Option<PathBuf>, LookupError> {
        let Some(main) = self.main.as_deref() else {
            return Ok(None);
        };
        let descriptor = Url::from_file_path(&self.path)
            .map_err(|_| LookupError::NotLocal(self.path.display().to_string()))?;
        let target = descriptor.join(&with_js_extension(main))?;
        let path = target
            .to_file_path()
            .map_err(|_| LookupError::NotLocal(target.to_string()))?;
        Ok(Some(path))
    }
}

/// Append `.js` unless already present
pub fn with_js_extension(name: &str) -> String {
    if name.ends_with(JS_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{JS_EXTENSION}")
    }
}

/// Whether a module name already carries a `.js` or `.json` suffix
pub fn has_module_extension(name: &str) -> bool {
    name.ends_with(JS_EXTENSION) || name.ends_with(JSON_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_main_string_is_read() {
        let descriptor =
            PackageDescriptor::parse(r#"{"name": "lib", "main": "./lib/entry"}"#, Path::new("/pkg/package.json"))
                .unwrap();
        assert_eq!(descriptor.main(), Some("./lib/entry"));
        assert_eq!(
            descriptor.main_path().unwrap(),
            Some(PathBuf::from("/pkg/lib/entry.js"))
        );
    }

    #[test]
    fn test_non_string_main_is_ignored() {
        let descriptor =
            PackageDescriptor::parse(r#"{"main": ["a.js"]}"#, Path::new("/pkg/package.json")).unwrap();
        assert_eq!(descriptor.main(), None);
        assert_eq!(descriptor.main_path().unwrap(), None);
    }

    #[test]
    fn test_invalid_descriptor_is_an_error() {
        assert!(matches!(
            PackageDescriptor::parse("not json", Path::new("/pkg/package.json")),
            Err(LookupError::Json(_))
        ));
        assert!(PackageDescriptor::parse("[1, 2]", Path::new("/pkg/package.json")).is_err());
    }

    #[test]
    fn test_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PACKAGE_FILE);
        fs::write(&path, "\u{FEFF}{\"main\": \"index2.js\"}").unwrap();

        let descriptor = PackageDescriptor::read(&path).unwrap();
        assert_eq!(descriptor.main(), Some("index2.js"));
        assert_eq!(descriptor.main_path().unwrap(), Some(dir.path().join("index2.js")));
    }

    #[test]
    fn test_extension_helpers() {
        assert_eq!(with_js_extension("a"), "a.js");
        assert_eq!(with_js_extension("a.js"), "a.js");
        assert_eq!(with_js_extension("a.json"), "a.json.js");
        assert!(has_module_extension("a.json"));
        assert!(!has_module_extension("a.mjs"));
    }
}
