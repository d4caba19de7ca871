//! Scripture reference resolution and verse rendering.
//!
//! Two independent pipelines share the book catalogue:
//!
//! - [`reference`] turns free-form, mixed-language references such as
//!   `"1 Kor 13:4,7; Ps 23"` into the compound key a scripture lookup tool
//!   expects.
//! - [`verses`] parses the tool's output into structured verses and
//!   passages, and [`render`] writes them as plain text, Typst, LaTeX,
//!   Markdown, or Org.
//!
//! The core performs no I/O; the `bfmt` binary wires it to the command line.

pub mod books;
pub mod error;
pub mod reference;
pub mod render;
pub mod verses;

pub use error::{Error, Result};
