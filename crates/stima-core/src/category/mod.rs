//! # Category Module
//!
//! Appraisal vocabulary, grouped into ordered categories, and the annotator
//! that paints and counts it.
//!
//! ## Modules
//!
//! - `builtin`: authored builtin table
//! - `table`: compiled, ordered category table
//! - `annotator`: match/rewrite engine
//!
//! ## Example
//!
//! ```rust
//! use stima_core::category::{Annotator, CategoryTable};
//!
//! let table = CategoryTable::builtin();
//! let annotation = Annotator::new(&table).annotate("Un lavoro discreto e spesso ottimo.");
//!
//! assert_eq!(annotation.count("Contributo apprezzabile"), Some(2));
//! assert_eq!(annotation.count("Contributo significativo"), Some(1));
//! ```

mod annotator;
mod builtin;
mod table;

// Re-exports
pub use annotator::{Annotation, Annotator, CategoryCount};
pub use builtin::{BuiltinCategory, CategoryDef, BUILTIN_CATEGORIES};
pub use table::{compile_pattern, Category, CategoryTable};
