// Load pipeline: fetch raw text, tokenize into rows, normalize into records

pub mod loader;
pub mod normalize;
pub mod tokenizer;

pub use loader::TabularLoader;
pub use normalize::RowNormalizer;
pub use tokenizer::{tokenize, RawRow};
