use crate::schema::EntitySchema;
use crate::schema::FieldDescriptor;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionError>;

/// User-controlled choice of which fields of one entity to include in a
/// generated document.
///
/// Only true-valued entries contribute selections; fields absent from the
/// map are treated as unselected. Iteration order is the order fields were
/// first toggled, and that order is what the generated document renders in.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    flags: IndexMap<String, bool>,
    schema: &'static EntitySchema,
}
impl FieldSelection {
    pub fn new(schema: &'static EntitySchema) -> Self {
        Self {
            flags: IndexMap::new(),
            schema,
        }
    }

    /// Flip the inclusion flag for `field_name`, returning the new flag.
    ///
    /// Field names not defined on this selection's entity are rejected
    /// rather than forwarded into a generated document as invalid
    /// selections.
    pub fn toggle(&mut self, field_name: &str) -> Result<bool> {
        if self.schema.field(field_name).is_none() {
            return Err(SelectionError::UndefinedFieldName {
                entity_name: self.schema.name(),
                field_name: field_name.to_string(),
            });
        }

        let flag = self.flags.entry(field_name.to_string()).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn is_selected(&self, field_name: &str) -> bool {
        self.flags.get(field_name).copied().unwrap_or(false)
    }

    /// Names of all selected fields, in toggle order.
    pub fn selected_fields(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, flag)| **flag)
            .map(|(name, _)| name.as_str())
    }

    /// Descriptors of all selected fields, in toggle order.
    pub fn selected_descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.selected_fields()
            .filter_map(|name| self.schema.field(name))
    }

    pub fn is_empty(&self) -> bool {
        self.selected_fields().next().is_none()
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error(
        "Attempted to toggle a field named `{field_name}`, but the \
        `{entity_name}` type has no such field defined."
    )]
    UndefinedFieldName {
        entity_name: &'static str,
        field_name: String,
    },
}
