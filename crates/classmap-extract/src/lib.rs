//! # Classmap Extract
//!
//! Pulls class-size records out of JVM class map reports and writes them as
//! CSV.
//!
//! A class map report is free-form text in which each archived class shows up
//! on a line like `@@ Class 128 java.lang.String`. Every such line becomes one
//! `className,size` row, with the class name rewritten to slash form
//! (`java/lang/String`, lambdas as `Outer$$Lambda+0x...`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use classmap_extract::{ClassSizeExtractor, ExtractorConfig};
//!
//! fn main() -> classmap_extract::Result<()> {
//!     let config = ExtractorConfig::default()
//!         .with_input_path("app.map")
//!         .with_output_path("classes.csv");
//!     let stats = ClassSizeExtractor::with_config(config).run()?;
//!     println!("Wrote {} rows", stats.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Class map  │ ──► │ Marker check │ ──► │   Pattern   │ ──► │  Sanitize   │
//! │ (lossy read)│     │  "@@ Class"  │     │ size + name │     │ . → / , 0x  │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                                     │
//!                                                                     ▼
//!                                                            ┌─────────────────┐
//!                                                            │    CSV rows     │
//!                                                            │ (input order)   │
//!                                                            └─────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod parse;
pub mod record;
pub mod sanitize;
pub mod table;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extract::{extract_class_sizes, ClassSizeExtractor, ExtractStats};
pub use parse::{parse_line, CLASS_MARKER};
pub use record::ClassSizeRecord;
pub use sanitize::sanitize_class_name;
pub use table::ClassSizeTable;
