use crate::schema::FieldDescriptor;
use crate::schema::FieldShape;
use crate::schema::LookupKind;

/// Static, read-only description of one queryable entity type: the operation
/// name and root field its documents are generated with, plus an ordered
/// table of its fields. Built once at compile time and never mutated.
#[derive(Debug, PartialEq)]
pub struct EntitySchema {
    pub(super) fields: &'static [FieldDescriptor],
    pub(super) lookup_kind: LookupKind,
    pub(super) name: &'static str,
    pub(super) operation_name: &'static str,
    pub(super) root_field: &'static str,
}
impl EntitySchema {
    /// The `students` collection.
    pub fn students() -> &'static EntitySchema {
        &STUDENTS
    }

    /// The `catBreed` by-id lookup.
    pub fn cat_breed() -> &'static EntitySchema {
        &CAT_BREED
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// All fields of this entity, in the order their selections render.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn lookup_kind(&self) -> &LookupKind {
        &self.lookup_kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    pub fn root_field(&self) -> &'static str {
        self.root_field
    }
}

const STUDENTS: EntitySchema = EntitySchema {
    fields: &[
        FieldDescriptor {
            name: "id",
            shape: FieldShape::Leaf,
            type_label: "ID!",
        },
        FieldDescriptor {
            name: "name",
            shape: FieldShape::Leaf,
            type_label: "String!",
        },
        FieldDescriptor {
            name: "career",
            shape: FieldShape::Leaf,
            type_label: "String!",
        },
        FieldDescriptor {
            name: "email",
            shape: FieldShape::Leaf,
            type_label: "String!",
        },
        FieldDescriptor {
            name: "age",
            shape: FieldShape::Leaf,
            type_label: "Int",
        },
        FieldDescriptor {
            name: "createdAt",
            shape: FieldShape::Leaf,
            type_label: "String",
        },
    ],
    lookup_kind: LookupKind::Collection,
    name: "students",
    operation_name: "Students",
    root_field: "students",
};

const CAT_BREED: EntitySchema = EntitySchema {
    fields: &[
        FieldDescriptor {
            name: "id",
            shape: FieldShape::Leaf,
            type_label: "String!",
        },
        FieldDescriptor {
            name: "name",
            shape: FieldShape::Leaf,
            type_label: "String!",
        },
        FieldDescriptor {
            name: "description",
            shape: FieldShape::Leaf,
            type_label: "String",
        },
        FieldDescriptor {
            name: "temperament",
            shape: FieldShape::Leaf,
            type_label: "String",
        },
        FieldDescriptor {
            name: "origin",
            shape: FieldShape::Leaf,
            type_label: "String",
        },
        FieldDescriptor {
            name: "lifeSpan",
            shape: FieldShape::Leaf,
            type_label: "String",
        },
        FieldDescriptor {
            name: "weight",
            shape: FieldShape::Composite(&["imperial", "metric"]),
            type_label: "CatWeight",
        },
        FieldDescriptor {
            name: "image",
            shape: FieldShape::Composite(&["url", "width", "height"]),
            type_label: "CatImage",
        },
    ],
    lookup_kind: LookupKind::ById,
    name: "catBreed",
    operation_name: "GetCatById",
    root_field: "catBreed",
};
