use crate::schema::FieldShape;
use crate::schema::LookupKind;
use crate::selection::FieldSelection;

/// Fixed document that fetches only the identifier of every cat breed. Used
/// to (re)fill a session's known-identifiers cache; never generated from a
/// selection.
pub const CAT_BREED_IDS_DOCUMENT: &str = "\
query CatBreedIds {
  catBreeds {
    id
  }
}";

/// Generate the query document for the given selection.
///
/// Pure function of the selection: an empty selection yields an empty
/// string, and an unchanged selection always yields an identical document.
/// Selected fields render in toggle order, one per line; a
/// [`Composite`](FieldShape::Composite) field renders as a block selecting
/// its fixed sub-field list.
pub fn build(selection: &FieldSelection) -> String {
    if selection.is_empty() {
        return String::new();
    }

    let schema = selection.schema();
    let mut document = String::new();
    match schema.lookup_kind() {
        LookupKind::Collection => {
            document.push_str(&format!(
                "query {} {{\n  {} {{\n",
                schema.operation_name(),
                schema.root_field(),
            ));
        },

        LookupKind::ById => {
            let id_type_label = schema.field("id")
                .map(|field| field.type_label())
                .unwrap_or("String!");
            document.push_str(&format!(
                "query {}($id: {id_type_label}) {{\n  {}(id: $id) {{\n",
                schema.operation_name(),
                schema.root_field(),
            ));
        },
    }

    for descriptor in selection.selected_descriptors() {
        match descriptor.shape() {
            FieldShape::Leaf => {
                document.push_str(&format!("    {}\n", descriptor.name()));
            },

            FieldShape::Composite(sub_fields) => {
                document.push_str(&format!("    {} {{\n", descriptor.name()));
                for sub_field in *sub_fields {
                    document.push_str(&format!("      {sub_field}\n"));
                }
                document.push_str("    }\n");
            },
        }
    }

    document.push_str("  }\n}");
    document
}
