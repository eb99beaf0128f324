pub mod document;
pub mod leaf;
pub mod scope;
pub mod tracker;

pub use crate::domain::DomainError;
pub use document::{Document, Node};
pub use leaf::LeafToken;
pub use scope::Scope;
pub use tracker::EnclosureTracker;
