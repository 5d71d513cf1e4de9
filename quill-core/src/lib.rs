//! Collaborator utilities for quill generators.
//!
//! Nothing here knows about the node tree: these helpers prepare the text
//! that callers hand to `quill-emit` and write out what it produces.

mod error;
mod file;
mod naming;
mod resources;
mod template;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{File, Overwrite, WriteResult};
// Identifiers
pub use naming::{CSHARP_KEYWORDS, NamingConvention, is_keyword, sanitize_identifier};
// Templates
pub use resources::{TEMPLATE_EXTENSION, TemplateRegistry};
pub use template::{Template, Values};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
