use core::fmt;

use crate::{CodegenOptions, StructDef, Style};

/// Generated source, written out through [`Display`](fmt::Display).
pub struct SourceFile<'a> {
    structs: &'a [StructDef],
    options: &'a CodegenOptions,
}

/// Render inferred structs as Rust source.
#[inline]
pub fn render<'a>(structs: &'a [StructDef], options: &'a CodegenOptions) -> SourceFile<'a> {
    SourceFile { structs, options }
}

impl fmt::Display for SourceFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let krate = &self.options.crate_path;
        match self.options.style {
            Style::Derive => writeln!(f, "use {krate}::Schema;")?,
            Style::Builder => {
                writeln!(f, "use {krate}::accessor;")?;
                writeln!(f, "use {krate}::registry::{{Schema, SchemaBuilder}};")?;
            }
        }

        for def in self.structs {
            writeln!(f)?;
            match self.options.style {
                Style::Derive => write_derive(f, def)?,
                Style::Builder => write_builder(f, def)?,
            }
        }
        Ok(())
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, def: &StructDef, renames: bool) -> fmt::Result {
    if def.fields.is_empty() {
        return writeln!(f, "pub struct {} {{}}", def.name);
    }

    writeln!(f, "pub struct {} {{", def.name)?;
    for field in &def.fields {
        if renames && field.needs_rename() {
            writeln!(f, "    #[schema(rename = {:?})]", field.key)?;
        }
        writeln!(f, "    pub {}: {},", field.ident, field.ty)?;
    }
    writeln!(f, "}}")
}

fn write_derive(f: &mut fmt::Formatter<'_>, def: &StructDef) -> fmt::Result {
    writeln!(f, "#[derive(Debug, Default, Clone, PartialEq, Schema)]")?;
    write_fields(f, def, true)
}

fn write_builder(f: &mut fmt::Formatter<'_>, def: &StructDef) -> fmt::Result {
    writeln!(f, "#[derive(Debug, Default, Clone, PartialEq)]")?;
    write_fields(f, def, false)?;

    writeln!(f)?;
    writeln!(f, "impl Schema for {} {{", def.name)?;
    if def.fields.is_empty() {
        writeln!(f, "    fn register(_builder: &mut SchemaBuilder<Self>) {{}}")?;
    } else {
        writeln!(f, "    fn register(builder: &mut SchemaBuilder<Self>) {{")?;
        writeln!(f, "        builder")?;
        let last = def.fields.len() - 1;
        for (index, field) in def.fields.iter().enumerate() {
            let end = if index == last { ";" } else { "" };
            writeln!(
                f,
                "            .field({:?}, accessor!(Self, {})){end}",
                field.key, field.ident
            )?;
        }
        writeln!(f, "    }}")?;
    }
    writeln!(f)?;
    writeln!(f, "    fn type_name() -> &'static str {{")?;
    writeln!(f, "        {:?}", def.name)?;
    writeln!(f, "    }}")?;
    writeln!(f, "}}")
}
