use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use rf_schema::NodeKind;
use rf_schema::document::{Document, DocumentMap};
use rf_utils::hash::HashSet;

use crate::CodegenError;
use crate::naming;

/// Rust type of a generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Integer,
    Boolean,
    Text,
    /// A generated struct, by name.
    Struct(String),
    List(Box<TypeRef>),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("i32"),
            Self::Boolean => f.write_str("bool"),
            Self::Text => f.write_str("String"),
            Self::Struct(name) => f.write_str(name),
            Self::List(inner) => write!(f, "Vec<{inner}>"),
        }
    }
}

/// One generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// The member key in the sample document, which is also the registered
    /// field name.
    pub key: String,
    /// The Rust identifier, possibly raw.
    pub ident: String,
    pub ty: TypeRef,
}

impl FieldDef {
    /// Returns `true` if the identifier does not spell the key.
    pub fn needs_rename(&self) -> bool {
        self.ident.strip_prefix("r#").unwrap_or(&self.ident) != self.key
    }
}

/// One generated struct. Fields keep sample-document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Infer struct definitions from a sample document.
///
/// The result lists nested structs before the structs using them; the root
/// struct is last.
pub fn infer(
    root: &Document,
    root_name: &str,
    type_prefix: &str,
) -> Result<Vec<StructDef>, CodegenError> {
    let Document::Object(members) = root else {
        return Err(CodegenError::RootNotObject {
            found: NodeKind::of(root),
        });
    };
    if !naming::is_valid_type_name(root_name) {
        return Err(CodegenError::InvalidTypeName {
            name: root_name.to_owned(),
        });
    }

    let mut type_names: HashSet<String> = naming::RESERVED_TYPE_NAMES
        .iter()
        .map(|name| (*name).to_owned())
        .collect();
    type_names.insert(root_name.to_owned());

    let mut inference = Inference {
        type_prefix,
        type_names,
        structs: Vec::new(),
    };
    inference.push_struct(root_name.to_owned(), members, "")?;
    Ok(inference.structs)
}

struct Inference<'a> {
    type_prefix: &'a str,
    type_names: HashSet<String>,
    structs: Vec<StructDef>,
}

impl Inference<'_> {
    fn push_struct(
        &mut self,
        name: String,
        members: &DocumentMap,
        path: &str,
    ) -> Result<(), CodegenError> {
        let mut idents = HashSet::default();
        let mut fields = Vec::with_capacity(members.len());

        for (key, node) in members {
            let member_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            let ty = self.type_of(key, node, &member_path)?;
            let ident = naming::unique(naming::snake_case(key), &mut idents, "_");
            fields.push(FieldDef {
                key: key.clone(),
                ident: naming::field_ident(ident),
                ty,
            });
        }

        log::debug!("inferred struct `{name}` with {} field(s)", fields.len());
        self.structs.push(StructDef { name, fields });
        Ok(())
    }

    fn type_of(&mut self, key: &str, node: &Document, path: &str) -> Result<TypeRef, CodegenError> {
        match node {
            Document::Null => Err(CodegenError::NullMember {
                path: path.to_owned(),
            }),
            Document::Bool(_) => Ok(TypeRef::Boolean),
            Document::Number(number) => {
                let fits = number
                    .as_i64()
                    .is_some_and(|value| i32::try_from(value).is_ok());
                if !fits {
                    log::warn!("member `{path}` holds {number}, which does not fit an i32 field");
                }
                Ok(TypeRef::Integer)
            }
            Document::String(_) => Ok(TypeRef::Text),
            Document::Array(items) => {
                let Some(first) = items.first() else {
                    return Err(CodegenError::EmptyArray {
                        path: path.to_owned(),
                    });
                };
                let first_kind = NodeKind::of(first);
                if let Some(other) = items.iter().map(NodeKind::of).find(|kind| *kind != first_kind) {
                    log::warn!(
                        "array `{path}` mixes {first_kind} and {other} elements; typing it from the first"
                    );
                }
                let element = self.type_of(key, first, &format!("{path}[]"))?;
                Ok(TypeRef::List(Box::new(element)))
            }
            Document::Object(members) => {
                let name = self.type_name_for(key)?;
                self.push_struct(name.clone(), members, path)?;
                Ok(TypeRef::Struct(name))
            }
        }
    }

    fn type_name_for(&mut self, key: &str) -> Result<String, CodegenError> {
        let mut base = self.type_prefix.to_string();
        base.push_str(&naming::pascal_case(key));
        // Reserved names are only taken, they get a suffix below.
        let checked = naming::RESERVED_TYPE_NAMES.contains(&base.as_str())
            || naming::is_valid_type_name(&base);
        if !checked {
            return Err(CodegenError::InvalidTypeName { name: base });
        }
        Ok(naming::unique(base, &mut self.type_names, ""))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::{TypeRef, infer};
    use crate::CodegenError;

    #[test]
    fn infers_nested_structs() {
        let doc = json!({
            "id": 1,
            "startTime": 5,
            "info": { "on": true },
            "subs": [{ "name": "x" }],
            "type": "a",
            "grid": [[1, 2], [3]],
        });
        let structs = infer(&doc, "Root", "").unwrap();

        let names: Vec<_> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Info", "Subs", "Root"]);

        let root = &structs[2];
        let fields: Vec<_> = root
            .fields
            .iter()
            .map(|f| (f.key.as_str(), f.ident.as_str(), f.ty.to_string()))
            .collect();
        assert_eq!(
            fields,
            [
                ("id", "id", String::from("i32")),
                ("startTime", "start_time", String::from("i32")),
                ("info", "info", String::from("Info")),
                ("subs", "subs", String::from("Vec<Subs>")),
                ("type", "r#type", String::from("String")),
                ("grid", "grid", String::from("Vec<Vec<i32>>")),
            ]
        );
        assert!(root.fields[1].needs_rename());
        assert!(!root.fields[4].needs_rename());
    }

    #[test]
    fn deduplicates_type_names() {
        let doc = json!({
            "info": { "a": 1 },
            "nested": { "info": { "b": true } },
            "string": { "c": "x" },
        });
        let structs = infer(&doc, "Info", "S").unwrap();
        let names: Vec<_> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["SInfo", "SInfo2", "SNested", "SString", "Info"]);

        let doc = json!({ "string": { "c": "x" }, "info": {} });
        let structs = infer(&doc, "Root", "").unwrap();
        let names: Vec<_> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["String2", "Info", "Root"]);
        assert_eq!(
            structs[2].fields[0].ty,
            TypeRef::Struct("String2".into())
        );
    }

    #[test]
    fn deduplicates_field_idents() {
        let doc = json!({ "jump_url": "", "jumpUrl": "", "jump-url": "" });
        let structs = infer(&doc, "Root", "").unwrap();
        let idents: Vec<_> = structs[0].fields.iter().map(|f| f.ident.as_str()).collect();
        assert_eq!(idents, ["jump_url", "jump_url_2", "jump_url_3"]);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            infer(&json!([1]), "Root", ""),
            Err(CodegenError::RootNotObject { .. })
        ));
        assert!(matches!(
            infer(&json!({}), "not valid", ""),
            Err(CodegenError::InvalidTypeName { .. })
        ));
        assert!(matches!(
            infer(&json!({ "a": { "b": null } }), "Root", ""),
            Err(CodegenError::NullMember { path }) if path == "a.b"
        ));
        assert!(matches!(
            infer(&json!({ "a": [[]] }), "Root", ""),
            Err(CodegenError::EmptyArray { path }) if path == "a[]"
        ));
        assert!(matches!(
            infer(&json!({ "a": {} }), "Root", "1"),
            Err(CodegenError::InvalidTypeName { name }) if name == "1A"
        ));
    }

    #[test]
    fn list_of_structs() {
        let structs = infer(&json!({ "subs": [{ "id": 1 }, { "id": 2 }] }), "Root", "").unwrap();
        assert_eq!(structs.len(), 2);
        assert_eq!(
            structs[1].fields[0].ty,
            TypeRef::List(Box::new(TypeRef::Struct("Subs".into())))
        );
    }
}
