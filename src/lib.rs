//! API Documentation Normalizer
//!
//! This library turns raw HTML fragments harvested from an API reference
//! page into the pieces a code generator embeds in its output: wrapped
//! comment blocks, plain text, type tokens and identifiers.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `annotation`: HTML fragments to prose or plain text
//! - `wrap`: Greedy line wrapping with forced breaks
//! - `types`: Documented type phrases to type tokens
//! - `ident`: snake_case names to generated identifiers
//! - `patterns`: Matcher set compiled once and shared read-only
//! - `fragment`: Raw HTML fragments read by the converters
//! - `options`: Line width and link resolution settings
//! - `normalizer`: Facade wiring the components together
//!
//! # Concurrency
//!
//! Every operation is a synchronous, pure function of its input. The only
//! shared state is the compiled [`PatternSet`], which is never mutated
//! after construction.

// Module declarations
pub mod annotation;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod normalizer;
pub mod options;
pub mod patterns;
pub mod types;
pub mod wrap;

// Re-export main types for convenience
pub use annotation::AnnotationConverter;
pub use error::NormalizeError;
pub use fragment::DocFragment;
pub use normalizer::DocNormalizer;
pub use options::NormalizerOptions;
pub use patterns::PatternSet;
pub use types::{TypeDescriptor, TypeMapper, TypeToken};
pub use wrap::{LineWrapper, Token};
