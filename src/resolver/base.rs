//! Candidate search bases

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::errors::LookupError;

/// Search-root class; privileged bases are always tried first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseKind {
    Privileged,
    Fallback,
}

/// A search root the resolver combines specifiers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBase {
    uri: Url,
    kind: BaseKind,
}

impl CandidateBase {
    /// Base from a directory path; relative paths are taken against the
    /// current directory.
    pub fn from_path(path: impl AsRef<Path>, kind: BaseKind) -> Result<Self, LookupError> {
        let path = absolute(path.as_ref())?;
        let uri = Url::from_directory_path(&path)
            .map_err(|_| LookupError::NotLocal(path.display().to_string()))?;
        Ok(Self { uri, kind })
    }

    /// Base from a URI string. A missing trailing `/` is added so that
    /// specifiers resolve inside it.
    pub fn from_uri(uri: &str, kind: BaseKind) -> Result<Self, LookupError> {
        let mut uri = Url::parse(uri)?;
        if !uri.cannot_be_a_base() && !uri.path().ends_with('/') {
            let path = format!("{}/", uri.path());
            uri.set_path(&path);
        }
        Ok(Self { uri, kind })
    }

    /// Accepts either a URI (`file:///...`, `https://...`) or a path.
    ///
    /// Single-letter schemes are treated as Windows drive letters.
    pub fn parse(location: &str, kind: BaseKind) -> Result<Self, LookupError> {
        match location.split_once(':') {
            Some((scheme, _)) if scheme.len() > 1 && is_scheme(scheme) => {
                Self::from_uri(location, kind)
            }
            _ => Self::from_path(location, kind),
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn kind(&self) -> BaseKind {
        self.kind
    }

    /// Local directory of the base, if it is a `file:` URI
    pub fn directory(&self) -> Option<PathBuf> {
        if self.uri.scheme() != "file" {
            return None;
        }
        self.uri.to_file_path().ok()
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub(crate) fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_is_directory_uri() {
        let base = CandidateBase::from_path("/srv/lib", BaseKind::Privileged).unwrap();
        assert_eq!(base.uri().as_str(), "file:///srv/lib/");
        assert_eq!(base.kind(), BaseKind::Privileged);
        assert_eq!(base.directory(), Some(PathBuf::from("/srv/lib/")));
    }

    #[test]
    fn test_relative_path_is_absolutized() {
        let base = CandidateBase::from_path("lib", BaseKind::Fallback).unwrap();
        let expected = env::current_dir().unwrap().join("lib");
        assert_eq!(base.directory().unwrap(), expected);
    }

    #[test]
    fn test_from_uri_adds_trailing_slash() {
        let base = CandidateBase::from_uri("file:///srv/lib", BaseKind::Fallback).unwrap();
        assert_eq!(base.uri().as_str(), "file:///srv/lib/");

        let remote = CandidateBase::from_uri("https://example.com/mods", BaseKind::Fallback).unwrap();
        assert_eq!(remote.uri().as_str(), "https://example.com/mods/");
        assert_eq!(remote.directory(), None);
    }

    #[test]
    fn test_parse_detects_uri_or_path() {
        let uri = CandidateBase::parse("file:///a/b", BaseKind::Privileged).unwrap();
        assert_eq!(uri.uri().as_str(), "file:///a/b/");

        let path = CandidateBase::parse("/a/b", BaseKind::Privileged).unwrap();
        assert_eq!(path.uri().as_str(), "file:///a/b/");
    }
}
