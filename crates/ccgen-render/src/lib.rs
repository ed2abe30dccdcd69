//! # ccgen-render
//!
//! The rendering boundary: a read-only [`RenderContext`] built from the
//! resolved symbol table, the builtin output templates, templates loaded
//! from a directory at run time, and the JSON and dump artifacts written
//! next to the generated sources.

pub mod artifacts;
pub mod context;
pub mod directory;
pub mod error;
pub mod templates;

pub use artifacts::{dump_string, write_dump, write_json};
pub use context::{RenderContext, WARNING_BANNER};
pub use directory::{DirectoryTemplate, load_template_dir};
pub use error::RenderError;
pub use templates::{
    OutputTemplate, SerializationTemplate, builtin_templates, render_all, select_templates,
};
