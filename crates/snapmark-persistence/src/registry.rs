//! Supported schema versions and their default field tables.
//!
//! The registry is built once, explicitly, and handed to the codec. It is
//! read-only afterwards, so one registry can serve any number of concurrent
//! encode and decode calls.

use std::collections::BTreeMap;

use snapmark_model::{ContainerKind, Field, FieldKind, default_fields};

use crate::error::{CodecError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, MIN_SUPPORTED_SCHEMA_VERSION};

/// Fields that did not exist yet in schema version 1.
const ABSENT_IN_V1: &[(ContainerKind, FieldKind)] = &[
    (ContainerKind::Text, FieldKind::TextHorizontalAlignment),
    (ContainerKind::Text, FieldKind::TextVerticalAlignment),
    (ContainerKind::Speechbubble, FieldKind::TextHorizontalAlignment),
    (ContainerKind::Speechbubble, FieldKind::TextVerticalAlignment),
    (ContainerKind::StepLabel, FieldKind::Flags),
    (ContainerKind::Obfuscate, FieldKind::PreviewQuality),
];

/// Default fields for every container kind at one schema version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionTable {
    defaults: BTreeMap<ContainerKind, Vec<Field>>,
}

impl VersionTable {
    /// The compiled-in defaults of this build.
    pub fn current() -> Self {
        Self {
            defaults: ContainerKind::ALL
                .into_iter()
                .map(|kind| (kind, default_fields(kind)))
                .collect(),
        }
    }

    /// A copy of this table without the listed `(container, field)` pairs.
    pub fn without(&self, absent: &[(ContainerKind, FieldKind)]) -> Self {
        let defaults = self
            .defaults
            .iter()
            .map(|(kind, fields)| {
                let kept = fields
                    .iter()
                    .filter(|field| !absent.contains(&(*kind, field.kind)))
                    .cloned()
                    .collect();
                (*kind, kept)
            })
            .collect();
        Self { defaults }
    }

    pub fn defaults(&self, kind: ContainerKind) -> &[Field] {
        self.defaults.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `field` is part of `kind`'s defaults in this table.
    pub fn declares(&self, kind: ContainerKind, field: FieldKind) -> bool {
        self.defaults(kind).iter().any(|f| f.kind == field)
    }
}

/// Registry of supported schema versions.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRegistry {
    current: u32,
    tables: BTreeMap<u32, VersionTable>,
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VersionRegistry {
    /// The versions this build knows how to read, with the current one last.
    pub fn builtin() -> Self {
        let current = VersionTable::current();
        let v1 = current.without(ABSENT_IN_V1);

        let mut tables = BTreeMap::new();
        tables.insert(MIN_SUPPORTED_SCHEMA_VERSION, v1);
        tables.insert(CURRENT_SCHEMA_VERSION, current);

        Self {
            current: CURRENT_SCHEMA_VERSION,
            tables,
        }
    }

    /// The version stamped on every encoded document.
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn min_supported(&self) -> u32 {
        self.tables.keys().next().copied().unwrap_or(self.current)
    }

    pub fn max_supported(&self) -> u32 {
        self.tables.keys().next_back().copied().unwrap_or(self.current)
    }

    /// Supported versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.tables.keys().copied()
    }

    pub fn is_supported(&self, version: u32) -> bool {
        self.tables.contains_key(&version)
    }

    /// Fail with [`CodecError::UnsupportedVersion`] unless `version` is supported.
    pub fn check(&self, version: u32) -> Result<()> {
        if self.is_supported(version) {
            return Ok(());
        }

        Err(CodecError::UnsupportedVersion {
            found: version,
            min_supported: self.min_supported(),
            max_supported: self.max_supported(),
        })
    }

    pub fn table(&self, version: u32) -> Option<&VersionTable> {
        self.tables.get(&version)
    }

    /// Defaults of `kind` as declared by `version`, if that version is known.
    pub fn defaults(&self, version: u32, kind: ContainerKind) -> Option<&[Field]> {
        self.table(version).map(|table| table.defaults(kind))
    }

    /// Defaults of `kind` in the current version; used to backfill older documents.
    pub fn current_defaults(&self, kind: ContainerKind) -> &[Field] {
        self.defaults(self.current, kind).unwrap_or(&[])
    }
}
