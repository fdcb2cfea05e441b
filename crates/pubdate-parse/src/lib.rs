pub mod detect;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod tables;
pub mod tokenizer;

pub use error::ParseError;
pub use extract::CanonicalDate;
pub use normalize::{normalize_filename, parse, Normalizer, Parsed};
