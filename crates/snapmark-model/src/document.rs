//! The top-level annotated screenshot.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::container::Container;

/// A captured image with the containers drawn over it.
///
/// Containers are kept in paint order: the first is drawn first, the last
/// ends up on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Schema version the document's field tables conform to. Decoding
    /// backfills older documents up to the current version and stamps it.
    pub schema_version: u32,
    pub image: Asset,
    pub containers: Vec<Container>,
}

impl Document {
    /// Create an empty document over `image`.
    ///
    /// The schema version starts at 0 until the document has been through
    /// the persistence layer.
    pub fn new(image: Asset) -> Self {
        Self {
            schema_version: 0,
            image,
            containers: Vec::new(),
        }
    }

    /// Add a container on top of all existing ones.
    pub fn push(&mut self, container: impl Into<Container>) {
        self.containers.push(container.into());
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Compare image and containers with [`Container::same_content`],
    /// ignoring the schema version.
    pub fn same_content(&self, other: &Document) -> bool {
        self.image == other.image
            && self.containers.len() == other.containers.len()
            && self
                .containers
                .iter()
                .zip(&other.containers)
                .all(|(a, b)| a.same_content(b))
    }
}
