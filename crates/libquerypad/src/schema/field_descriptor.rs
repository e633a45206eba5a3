use crate::schema::FieldShape;

/// One field of an [`EntitySchema`](crate::schema::EntitySchema): its name,
/// its display-only GraphQL type label, and its rendering shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub(super) name: &'static str,
    pub(super) shape: FieldShape,
    pub(super) type_label: &'static str,
}
impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    /// The GraphQL type label shown next to the field by rendering layers.
    /// Display-only; never checked against a live schema.
    pub fn type_label(&self) -> &'static str {
        self.type_label
    }
}
