#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod infer;
mod naming;
mod render;

// -----------------------------------------------------------------------------
// Exports

pub use error::CodegenError;
pub use infer::{FieldDef, StructDef, TypeRef, infer};
pub use render::{SourceFile, render};

use alloc::string::{String, ToString};

use rf_schema::document::{self, Document};

/// Output flavor of generated structs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// `#[derive(Schema)]` with `#[schema(rename = "...")]` where needed.
    #[default]
    Derive,
    /// A plain struct plus an explicit `impl Schema` calling the builder.
    Builder,
}

/// Options for [`generate`].
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    pub style: Style,
    /// Prepended to every nested struct name. The root name is used as is.
    pub type_prefix: String,
    /// Path of the schema crate in generated `use` lines.
    pub crate_path: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            style: Style::Derive,
            type_prefix: String::new(),
            crate_path: String::from("rf_schema"),
        }
    }
}

/// Generate Rust source for `root` and every object nested in it.
pub fn generate(
    root: &Document,
    root_name: &str,
    options: &CodegenOptions,
) -> Result<String, CodegenError> {
    let structs = infer(root, root_name, &options.type_prefix)?;
    Ok(render(&structs, options).to_string())
}

/// Parse `text`, then [`generate`].
pub fn generate_from_text(
    text: &str,
    root_name: &str,
    options: &CodegenOptions,
) -> Result<String, CodegenError> {
    let root = document::parse(text)?;
    generate(&root, root_name, options)
}
