//! Function outline and call-site navigation for LLVM IR.
//!
//! A [`SymbolSession`] owns one [`SymbolIndex`] shared by a
//! [`SymbolExtractor`] (writer) and a [`ReferenceResolver`] (reader).

mod extractor;
mod index;
pub mod patterns;
mod provider;
mod resolver;
mod session;
mod types;

pub use extractor::SymbolExtractor;
pub use index::SymbolIndex;
pub use provider::SymbolProvider;
pub use resolver::ReferenceResolver;
pub use session::SymbolSession;
pub use types::{FunctionSymbol, SymbolKind};
