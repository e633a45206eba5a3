/// Similar to [`EntitySchema`](crate::schema::EntitySchema), except only the
/// root-field lookup style without the corresponding field table. Decides
/// which document template a flow's queries are generated from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LookupKind {
    /// The root field selects the whole collection and takes no arguments.
    Collection,

    /// The root field selects a single item through an `$id` variable.
    ById,
}
