use core::cell::Cell;

use crate::document::{Document, DocumentMap};
use crate::ops::MAX_DEPTH;
use crate::registry::Schema;
use crate::{DecodeError, NodeKind};

std::thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// One level of object nesting on this thread, released on drop.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Result<Self, DecodeError> {
        DEPTH.with(|depth| {
            if depth.get() == MAX_DEPTH {
                return Err(DecodeError::DepthExceeded {
                    limit: MAX_DEPTH,
                    offset: None,
                });
            }
            depth.set(depth.get() + 1);
            Ok(Self)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Fill `instance` from an object node.
///
/// Fields are visited in ascending name order. A missing member takes the
/// field's default or fails with [`DecodeError::MissingField`]. Members
/// with no matching field are ignored. Objects nested past
/// [`MAX_DEPTH`] fail with [`DecodeError::DepthExceeded`].
pub fn decode_document<T: Schema>(instance: &mut T, node: &Document) -> Result<(), DecodeError> {
    let Document::Object(members) = node else {
        return Err(DecodeError::unexpected_node(NodeKind::Object, node));
    };
    let _level = DepthGuard::enter()?;

    let descriptor = T::descriptor();
    for field in descriptor.fields_by_name() {
        match members.get(field.name()) {
            Some(member) => field.read_document(instance, member)?,
            None => {
                if !field.apply_default(instance) {
                    return Err(DecodeError::MissingField { field: field.name() });
                }
            }
        }
    }
    Ok(())
}

/// Render `instance` as an object node, members in registration order.
pub fn encode_document<T: Schema>(instance: &T) -> Document {
    let descriptor = T::descriptor();
    let mut members = DocumentMap::with_capacity(descriptor.len());
    for field in descriptor.fields() {
        members.insert(field.name().into(), field.write_document(instance));
    }
    Document::Object(members)
}
