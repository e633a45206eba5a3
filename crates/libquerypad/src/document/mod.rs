mod document_builder;

pub use document_builder::CAT_BREED_IDS_DOCUMENT;
pub use document_builder::build;

#[cfg(test)]
mod tests;
