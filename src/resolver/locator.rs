//! Per-candidate module lookup
//!
//! Lookup order for one module location:
//!
//! 1. the location itself as a file, `.js` appended unless it ends in `.js`/`.json`;
//! 2. `<location>/package.json` → its `main` entry, whether or not it exists;
//! 3. `<location>/index.js`;
//! 4. `node_modules/<relative path>` in the context directory and each of
//!    its ancestors (steps 1-3 only).
//!
//! If that yields nothing, or a `main` entry that is not a file, the exact,
//! unmodified location is accepted when it is an existing file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use url::Url;

use super::package::{has_module_extension, PackageDescriptor, JS_EXTENSION, PACKAGE_FILE};
use crate::core::errors::LookupError;

pub const MODULE_INDEX: &str = "index.js";
pub const SUBMODULE_DIRECTORY: &str = "node_modules";

/// Finds the concrete file for a module location
#[derive(Debug, Clone)]
pub struct ModuleLocator {
    context_dir: PathBuf,
}

impl ModuleLocator {
    /// `context_dir` is where the upward `node_modules` search starts.
    pub fn new(context_dir: impl Into<PathBuf>) -> Self {
        Self {
            context_dir: context_dir.into(),
        }
    }

    pub fn context_dir(&self) -> &Path {
        &self.context_dir
    }

    /// Full lookup plus the exact-location fallback. Errors are logged and
    /// treated as "not found".
    pub fn load_from_uri(&self, uri: &Url, base: &Url) -> Option<Url> {
        match self.locate_or_exact(uri, base) {
            Ok(found) => found,
            Err(err) => {
                trace!("lookup of {} failed: {}", uri, err);
                None
            }
        }
    }

    fn locate_or_exact(&self, uri: &Url, base: &Url) -> Result<Option<Url>, LookupError> {
        if let Some(found) = self.locate(uri, base, true)? {
            if local_path(&found)?.is_file() {
                return Ok(Some(found));
            }
            debug!("module location {} is not a file", found);
        }
        let exact = local_path(uri)?;
        if exact.is_file() {
            debug!("using exact module location {}", exact.display());
            return Ok(Some(file_url(&exact)?));
        }
        Ok(None)
    }

    /// Steps 1-4 for a single location
    pub fn locate(
        &self,
        uri: &Url,
        base: &Url,
        allow_submodules: bool,
    ) -> Result<Option<Url>, LookupError> {
        let path = local_path(uri)?;

        let file = with_extension(&path);
        if file.is_file() {
            return Ok(Some(file_url(&file)?));
        }

        // `main` is taken as is; the caller checks that it exists
        let descriptor = path.join(PACKAGE_FILE);
        if descriptor.is_file() {
            let package = PackageDescriptor::read(&descriptor)?;
            if let Some(main) = package.main_path()? {
                return Ok(Some(file_url(&main)?));
            }
        }

        let index = path.join(MODULE_INDEX);
        if index.is_file() {
            return Ok(Some(file_url(&index)?));
        }

        if !allow_submodules {
            return Ok(None);
        }
        let Some(relative) = relative_module_path(uri, base) else {
            return Ok(None);
        };
        Ok(search_submodules(&self.context_dir, &relative, |candidate| {
            self.locate(candidate, base, false)
        }))
    }
}

/// Walks `start` and its ancestors, trying `node_modules/<relative>` in each
/// directory that has a `node_modules` child. Lookup errors are skipped.
pub fn search_submodules<F>(start: &Path, relative: &str, mut lookup: F) -> Option<Url>
where
    F: FnMut(&Url) -> Result<Option<Url>, LookupError>,
{
    for dir in start.ancestors() {
        let submodules = dir.join(SUBMODULE_DIRECTORY);
        if !submodules.is_dir() {
            continue;
        }
        let candidate = match Url::from_directory_path(&submodules)
            .map_err(|_| LookupError::NotLocal(submodules.display().to_string()))
            .and_then(|dir_url| Ok(dir_url.join(relative)?))
        {
            Ok(candidate) => candidate,
            Err(err) => {
                trace!("skipping {}: {}", submodules.display(), err);
                continue;
            }
        };
        match lookup(&candidate) {
            Ok(Some(found)) => {
                debug!("found {} under {}", relative, submodules.display());
                return Some(found);
            }
            Ok(None) => {}
            Err(err) => trace!("lookup of {} failed: {}", candidate, err),
        }
    }
    None
}

/// Path of `uri` relative to `base`, when `uri` lies under it
pub fn relative_module_path(uri: &Url, base: &Url) -> Option<String> {
    uri.as_str()
        .strip_prefix(base.as_str())
        .filter(|relative| !relative.is_empty())
        .map(str::to_owned)
}

fn local_path(uri: &Url) -> Result<PathBuf, LookupError> {
    if uri.scheme() != "file" {
        return Err(LookupError::NotLocal(uri.to_string()));
    }
    uri.to_file_path()
        .map_err(|_| LookupError::NotLocal(uri.to_string()))
}

fn file_url(path: &Path) -> Result<Url, LookupError> {
    Url::from_file_path(path).map_err(|_| LookupError::NotLocal(path.display().to_string()))
}

fn with_extension(path: &Path) -> PathBuf {
    if has_module_extension(&path.to_string_lossy()) {
        return path.to_path_buf();
    }
    let mut extended = OsString::from(path.as_os_str());
    extended.push(JS_EXTENSION);
    PathBuf::from(extended)
}
