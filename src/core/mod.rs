//! Core building blocks shared by the rest of the crate.
//!
//! This module contains:
//! - The primary [`AnnexError`] type.
//! - XML text escaping and the line-oriented [`XmlWriter`] element builder.

/// The primary error type (`AnnexError`) for the crate.
pub mod error;
/// XML escaping and the element builder used by the serializer.
pub mod xml;

pub use error::AnnexError;
pub use xml::{XmlWriter, escape};
