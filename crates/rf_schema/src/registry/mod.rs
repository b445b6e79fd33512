//! Schema types and the process-wide descriptor registry.

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod schema;
mod schema_registry;

// -----------------------------------------------------------------------------
// Exports

pub use builder::SchemaBuilder;
pub use schema::Schema;
pub use schema_registry::SchemaRegistry;
