/*!
# Module Resolver

CommonJS-style resolution of `require` specifiers to source files:
`package.json` `main`, `index.js`, upward `node_modules` search, tried
over privileged search roots first and fallback roots second.

Failures inside a single lookup are logged and swallowed; the caller only
ever sees "found" or "not found" ([`ModuleResolver::resolve`]) or a
[`crate::core::errors::ResolveError`] when asking for module text
([`ModuleResolver::load`]).
*/

pub mod base;
pub mod locator;
pub mod package;
pub mod path_list;

pub use base::{BaseKind, CandidateBase};
pub use locator::{search_submodules, ModuleLocator};
pub use package::PackageDescriptor;
pub use path_list::{ModuleResolver, ModuleSource, ResolvedModule};
