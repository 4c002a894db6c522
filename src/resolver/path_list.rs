//! Ordered search over candidate bases

use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use url::Url;

use super::base::{absolute, BaseKind, CandidateBase};
use super::locator::ModuleLocator;
use super::package::with_js_extension;
use crate::core::errors::ResolveError;
use crate::core::fs_utils::read_source_file;

/// A successfully resolved module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModule {
    /// The specifier as requested
    pub id: String,
    pub uri: Url,
    pub path: PathBuf,
    /// Base the module was found through
    pub base: Url,
    pub base_kind: BaseKind,
}

/// A resolved module together with its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    pub module: ResolvedModule,
    pub text: String,
}

/// CommonJS-style module resolver over privileged and fallback bases.
///
/// Holds no per-call state; resolution only reads the filesystem.
#[derive(Debug, Clone)]
pub struct ModuleResolver {
    privileged: Vec<CandidateBase>,
    fallback: Vec<CandidateBase>,
    locator: ModuleLocator,
}

impl ModuleResolver {
    /// Resolver whose `node_modules` search starts at the working directory
    pub fn new(privileged: Vec<CandidateBase>, fallback: Vec<CandidateBase>) -> Self {
        let context_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            privileged,
            fallback,
            locator: ModuleLocator::new(context_dir),
        }
    }

    /// Start the upward `node_modules` search at `dir` instead
    pub fn with_context_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let dir = absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
        self.locator = ModuleLocator::new(dir);
        self
    }

    pub fn privileged(&self) -> &[CandidateBase] {
        &self.privileged
    }

    pub fn fallback(&self) -> &[CandidateBase] {
        &self.fallback
    }

    pub fn context_dir(&self) -> &Path {
        self.locator.context_dir()
    }

    /// Privileged bases first, then fallback bases
    pub fn resolve(&self, specifier: &str) -> Option<ResolvedModule> {
        let resolved = self
            .resolve_in(specifier, &self.privileged)
            .or_else(|| self.resolve_in(specifier, &self.fallback));
        match &resolved {
            Some(module) => debug!("resolved {} to {}", specifier, module.path.display()),
            None => debug!("module {} not found", specifier),
        }
        resolved
    }

    /// First match over an explicit ordered list of bases
    pub fn resolve_in(&self, specifier: &str, bases: &[CandidateBase]) -> Option<ResolvedModule> {
        for base in bases {
            let Some(module_uri) = module_uri(specifier, base) else {
                trace!("{} cannot be combined with {}", specifier, base.uri());
                continue;
            };
            let Some(found) = self.locator.load_from_uri(&module_uri, base.uri()) else {
                continue;
            };
            let Ok(path) = found.to_file_path() else {
                continue;
            };
            return Some(ResolvedModule {
                id: specifier.to_string(),
                uri: found,
                path,
                base: base.uri().clone(),
                base_kind: base.kind(),
            });
        }
        None
    }

    /// Resolve and read the module text
    pub fn load(&self, specifier: &str) -> Result<ModuleSource, ResolveError> {
        let module = self
            .resolve(specifier)
            .ok_or_else(|| ResolveError::NotFound(specifier.to_string()))?;
        let text = read_source_file(&module.path).map_err(|source| ResolveError::Read {
            path: module.path.clone(),
            source,
        })?;
        Ok(ModuleSource { module, text })
    }
}

/// Location of `specifier` against `base`: URI combination when the
/// specifier is a valid reference, a filesystem path otherwise.
fn module_uri(specifier: &str, base: &CandidateBase) -> Option<Url> {
    if is_uri_reference(specifier) {
        if let Ok(uri) = base.uri().join(specifier) {
            return Some(uri);
        }
    }
    module_path_uri(specifier, base)
}

fn module_path_uri(specifier: &str, base: &CandidateBase) -> Option<Url> {
    let specified = Path::new(specifier);
    let mut path = if specified.is_absolute() {
        specified.to_path_buf()
    } else {
        base.directory()?.join(specified)
    };
    // a sibling `<name>.js` file wins over a `<name>` directory
    let file = PathBuf::from(with_js_extension(&path.to_string_lossy()));
    if path.is_dir() && file.is_file() {
        path = file;
    }
    Url::from_file_path(&path).ok()
}

/// Whether the specifier only uses characters allowed in an RFC 3986 reference
fn is_uri_reference(specifier: &str) -> bool {
    const ALLOWED: &str = "-._~:/?#[]@!$&'()*+,;=%";
    !specifier.is_empty()
        && specifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED.contains(c))
}
