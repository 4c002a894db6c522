/*!
# Bridge Configuration

Search roots for the module resolver and output options for the AST
builder. Loaded from TOML or YAML, picked by file extension:

```toml
[resolver]
privileged = ["./lib"]
fallback = ["file:///usr/share/jsdoc/modules"]
context_dir = "."

[ast]
catch_handlers = "single"
```
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::bridge::BuildOptions;
use crate::resolver::{BaseKind, CandidateBase, ModuleResolver};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub resolver: ResolverConfig,
    pub ast: BuildOptions,
}

/// `[resolver]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Bases searched first, in order (paths or URIs)
    pub privileged: Vec<String>,
    /// Bases searched when no privileged base has the module
    pub fallback: Vec<String>,
    /// Start of the upward `node_modules` search; relative to the working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<PathBuf>,
}

impl ResolverConfig {
    /// Parsed privileged and fallback bases, in search order
    pub fn bases(&self) -> Result<(Vec<CandidateBase>, Vec<CandidateBase>)> {
        Ok((
            parse_bases(&self.privileged, BaseKind::Privileged)?,
            parse_bases(&self.fallback, BaseKind::Fallback)?,
        ))
    }
}

fn parse_bases(locations: &[String], kind: BaseKind) -> Result<Vec<CandidateBase>> {
    locations
        .iter()
        .map(|location| {
            CandidateBase::parse(location, kind)
                .with_context(|| format!("Invalid search base '{}'", location))
        })
        .collect()
}

impl BridgeConfig {
    /// Load configuration; `.yaml`/`.yml` files are read as YAML, anything else as TOML
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let is_yaml = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::load_from_yaml(path)
        } else {
            Self::load_from_toml(path)
        }
    }

    /// Load configuration from TOML file
    pub fn load_from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read config from {}", path.as_ref().display())
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!("Failed to parse TOML config from {}", path.as_ref().display())
        })?;

        config.checked()
    }

    /// Load configuration from YAML file
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read config from {}", path.as_ref().display())
        })?;

        let config: Self = serde_yaml::from_str(&content).with_context(|| {
            format!("Failed to parse YAML config from {}", path.as_ref().display())
        })?;

        config.checked()
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(&path, content).with_context(|| {
            format!("Failed to write config to {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Validate configuration.
    ///
    /// Unparseable bases are errors; local bases that do not exist only
    /// produce warnings.
    pub fn validate(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        let (privileged, fallback) = self.resolver.bases()?;

        for base in privileged.iter().chain(fallback.iter()) {
            if let Some(dir) = base.directory() {
                if !dir.is_dir() {
                    warnings.push(format!("Search base {} is not a directory", dir.display()));
                }
            }
        }

        if let Some(dir) = &self.resolver.context_dir {
            if !dir.is_dir() {
                warnings.push(format!("Context directory {} does not exist", dir.display()));
            }
        }

        Ok(warnings)
    }

    /// Resolver over the configured bases
    pub fn module_resolver(&self) -> Result<ModuleResolver> {
        let (privileged, fallback) = self.resolver.bases()?;
        let resolver = ModuleResolver::new(privileged, fallback);
        Ok(match &self.resolver.context_dir {
            Some(dir) => resolver.with_context_dir(dir),
            None => resolver,
        })
    }

    fn checked(self) -> Result<Self> {
        for warning in self.validate()? {
            warn!("{}", warning);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::CatchHandlerStyle;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert!(config.resolver.privileged.is_empty());
        assert!(config.resolver.fallback.is_empty());
        assert_eq!(config.ast.catch_handlers, CatchHandlerStyle::Single);
        assert!(config.validate().unwrap().is_empty());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let mut config = BridgeConfig::default();
        config.resolver.privileged.push("/srv/modules".to_string());
        config.ast.catch_handlers = CatchHandlerStyle::List;

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();

        let loaded = BridgeConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_picked_by_extension() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "resolver:\n  fallback: [\"file:///opt/mods\"]\nast:\n  catch_handlers: list").unwrap();

        let config = BridgeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.resolver.fallback, vec!["file:///opt/mods".to_string()]);
        assert_eq!(config.ast.catch_handlers, CatchHandlerStyle::List);
    }

    #[test]
    fn test_missing_base_is_a_warning() {
        let mut config = BridgeConfig::default();
        config.resolver.fallback.push("/definitely/not/here".to_string());
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("/definitely/not/here"));
    }

    #[test]
    fn test_invalid_uri_base_is_an_error() {
        let mut config = BridgeConfig::default();
        config.resolver.privileged.push("http://[broken".to_string());
        assert!(config.validate().is_err());
        assert!(config.module_resolver().is_err());
    }
}
