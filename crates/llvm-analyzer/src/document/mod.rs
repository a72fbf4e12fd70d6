pub(crate) mod document_store;
pub(crate) mod lines;
pub(crate) mod text_document;

pub use document_store::DocumentStore;
pub use lines::TextLines;
pub use text_document::Document;
