/*!
# Core Module

Core functionality shared by the AST bridge and the module resolver:
error types, source positions and file reading.
*/

pub mod errors;
pub mod position;
pub mod fs_utils;

pub use errors::{BridgeError, LookupError, ResolveError};
pub use position::{LinePosition, Range, SourceLocation};
pub use fs_utils::{decode_source, read_source_file};
