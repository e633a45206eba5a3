mod entity_schema;
mod field_descriptor;
mod field_shape;
mod lookup_kind;

pub use entity_schema::EntitySchema;
pub use field_descriptor::FieldDescriptor;
pub use field_shape::FieldShape;
pub use lookup_kind::LookupKind;
