/*!
# jsdoc-bridge

Two building blocks for a JSDoc toolchain:

- **AST bridge**: parses JavaScript with tree-sitter and converts the
  concrete syntax tree into an ESTree/Esprima-compatible AST, attaching every
  `/** ... */` documentation comment to exactly one node (or to the program
  root when no node claims it).
- **Module resolver**: CommonJS-style `require` resolution (`package.json`
  `main`, `index.js`, upward `node_modules` search) over privileged search
  bases first and fallback bases second.

## Architecture

```text
jsdoc-bridge
├── core      - errors, positions, source decoding
├── estree    - standardized AST node model (serde)
├── bridge    - tree-sitter walker, comment attacher, node mapper, builder
├── resolver  - package descriptors, per-candidate lookup, base lists
├── config    - TOML/YAML configuration
└── cli_common - logging and output helpers for the binary
```

## Usage

```rust,no_run
use jsdoc_bridge::{build_ast, BridgeConfig};

let program = build_ast("/** Answer. */\nvar x = 42;", "inline.js")?;
let json = serde_json::to_string(&program)?;

let resolver = BridgeConfig::load_from_file("jsdoc-bridge.toml")?.module_resolver()?;
if let Some(module) = resolver.resolve("./lib/util") {
    println!("{} -> {}", module.id, module.path.display());
}
# Ok::<(), anyhow::Error>(())
```
*/

pub mod bridge;
pub mod cli_common;
pub mod config;
pub mod core;
pub mod estree;
pub mod resolver;

pub use bridge::{build_ast, AstBuilder, BuildOptions, CatchHandlerStyle};
pub use config::{BridgeConfig, ResolverConfig};
pub use crate::core::{BridgeError, ResolveError};
pub use estree::{Comment, Node, NodeKind, Program};
pub use resolver::{BaseKind, CandidateBase, ModuleResolver, ModuleSource, ResolvedModule};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use resolver::locator::SUBMODULE_DIRECTORY;

/// Read a source file and build its AST with the given builder
pub fn build_file_ast(builder: &mut AstBuilder, path: &Path) -> Result<Program> {
    let source = crate::core::read_source_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let program = builder
        .build(&source, &path.to_string_lossy())
        .with_context(|| format!("Failed to build AST for {}", path.display()))?;
    Ok(program)
}

/// Read a source file and build its AST with default options
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Program> {
    build_file_ast(&mut AstBuilder::new(), path.as_ref())
}

/// Expand files and directories into the `.js` files they contain.
///
/// Directories are walked recursively; `node_modules` subtrees are skipped.
/// Explicitly named files are kept whatever their extension. The result is
/// sorted and free of duplicates.
pub fn collect_source_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != SUBMODULE_DIRECTORY);
        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            let is_js = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("js"));
            if entry.file_type().is_file() && is_js {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
