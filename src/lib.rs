#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rf_codegen as codegen;
pub use rf_schema as schema;
pub use rf_utils as utils;
