use crate::DecodeError;
use crate::registry::Schema;
use crate::wire::{WireReader, WireWriter};

/// Decode one wire object into `instance`.
///
/// Pairs are applied in stream order. A name the schema does not know
/// fails with [`DecodeError::UnknownField`]; fields absent from the stream
/// keep their current values. Nesting past [`MAX_DEPTH`](super::MAX_DEPTH)
/// fails with [`DecodeError::DepthExceeded`].
pub fn decode_wire<T: Schema>(
    instance: &mut T,
    reader: &mut WireReader<'_>,
) -> Result<(), DecodeError> {
    let count = reader.begin_object()?;
    let descriptor = T::descriptor();
    for _ in 0..count {
        let name = reader.read_text()?;
        let Some(field) = descriptor.field(&name) else {
            return Err(DecodeError::UnknownField { field: name });
        };
        field.read_wire(instance, reader)?;
    }
    reader.end_object();
    Ok(())
}

/// Append `instance` as one wire object, fields in ascending name order.
pub fn encode_wire<T: Schema>(instance: &T, writer: &mut WireWriter) {
    let descriptor = T::descriptor();
    writer.begin_object(descriptor.len());
    for field in descriptor.fields_by_name() {
        writer.write_text(field.name());
        field.write_wire(instance, writer);
    }
}
