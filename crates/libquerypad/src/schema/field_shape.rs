/// How a field renders inside a generated selection set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldShape {
    /// Rendered as a bare selection of the field name.
    Leaf,

    /// Rendered as a block selecting a fixed list of sub-fields. The
    /// sub-field list is part of the schema descriptor and never varies at
    /// runtime.
    Composite(&'static [&'static str]),
}
