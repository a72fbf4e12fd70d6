pub mod config;
pub mod document;
pub mod ide;
pub mod server;
pub mod symbols;
pub mod text_pos;

pub use config::ServerSettings;
pub use document::{Document, DocumentStore, TextLines};
pub use ide::{IdePosition, IdeRange, NavigationLink};
pub use server::LlvmLanguageServer;
pub use symbols::{FunctionSymbol, ReferenceResolver, SymbolExtractor, SymbolIndex, SymbolProvider, SymbolSession};
