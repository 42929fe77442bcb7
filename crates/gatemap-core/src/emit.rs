//! The gate-map output document.

use std::collections::BTreeSet;
use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::descriptor::Mapping;
use crate::error::{GatemapError, Result};
use crate::table::map_name;

/// Indentation of the emitted JSON.
const INDENT: &[u8] = b"    ";

/// Mapped instruction names, in first-seen order.
///
/// Serializes as one JSON object whose keys are the original names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateMapDocument {
    entries: Vec<(String, Mapping)>,
}

impl GateMapDocument {
    /// Map every name through the canonical table.
    ///
    /// `names` is expected to be deduplicated already; the document keeps
    /// whatever order it is given.
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let entries = names
            .into_iter()
            .map(|name| {
                let mapping = map_name(&name);
                (name, mapping)
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Mapping)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mapping for a given original name.
    pub fn get(&self, name: &str) -> Option<&Mapping> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, mapping)| mapping)
    }

    /// Names that got the unknown placeholder, sorted.
    pub fn unmapped(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|(_, mapping)| mapping.is_unknown())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Write the document as four-space indented JSON.
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)
            .map_err(GatemapError::Serialization)
    }

    /// Render the document as four-space indented JSON.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        // serde_json only emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for GateMapDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, mapping) in &self.entries {
            map.serialize_entry(name, mapping)?;
        }
        map.end()
    }
}
