//! Class metadata scanning without loading code.
//!
//! Class files are parsed only far enough to know their name, super class, interfaces and
//! abstractness. That is enough to answer "which classes extend X" over a classpath
//! ([`TypeHierarchy`]) and "does class X exist in this variant's classpath"
//! ([`ClassScope`]).

pub mod classfile;
pub mod hierarchy;
pub mod scanner;
pub mod scope;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classfile::parse_class_header;
pub use hierarchy::TypeHierarchy;
pub use scanner::{ClasspathScanner, ScanResult};
pub use scope::ClassScope;
