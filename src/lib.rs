//! # Collection Patterns
//!
//! Standalone demonstrations of collection processing and related language
//! features. The core is [`sequences`]: pure transformations over ordered
//! sequences, sets and insertion-ordered maps with well-defined behaviour at
//! the boundaries (empty input, short inputs, trailing partial windows).
//!
//! ## Modules
//!
//! 1. **Sequence transformations** ([`sequences`], [`showcase`], [`person`])
//!    - map/filter composition, reduce vs fold
//!    - group-by, zip-with, flatten, tokenizing flat-map
//!    - distinct/sort, take/drop, chunking and windowing
//!    - copy-on-insert helpers and lazy pipelines
//!
//! 2. **Language features**
//!    - Delegated properties: observable, vetoable, lazy ([`delegation`])
//!    - Generic containers and extension traits ([`generics`])
//!    - Sum types with exhaustive matching ([`variants`])
//!    - Zero-cost newtypes ([`ids`])
//!    - A closure-based builder DSL ([`html`])
//!    - Explicit runtime type metadata ([`describe`])
//!
//! 3. **Supporting pieces**
//!    - A checked toy [`calculator`]
//!    - TOML [`config`] and the console [`demo`] runner
//!
//! ## Running
//!
//! ```bash
//! cargo run -- run
//! cargo run -- run --section collections --section pipelines
//! cargo run -- run --config demo.toml -v
//! cargo run -- list
//! ```

pub mod calculator;
pub mod config;
pub mod delegation;
pub mod demo;
pub mod describe;
pub mod error;
pub mod generics;
pub mod html;
pub mod ids;
pub mod person;
pub mod sequences;
pub mod showcase;
pub mod variants;

pub use config::{DemoConfig, Section};
pub use demo::{DemoError, DemoRunner};
pub use error::CollectionError;
pub use sequences::WindowSpec;
