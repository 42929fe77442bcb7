//! Gate descriptors in the shape DQCsim's gate map expects.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key of the single field in the unknown-gate placeholder object.
pub const UNKNOWN_PLACEHOLDER_KEY: &str = "UNKNOWN?";

/// Non-unitary operation kinds that take a basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Measurement.
    Measure,
    /// State preparation.
    Prep,
}

impl OpKind {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Measure => "measure",
            OpKind::Prep => "prep",
        }
    }
}

/// Pauli basis of a measurement or prep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Basis {
    X,
    Y,
    #[default]
    Z,
}

impl Basis {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Basis::X => "x",
            Basis::Y => "y",
            Basis::Z => "z",
        }
    }

    /// Parse a basis name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "x" => Some(Basis::X),
            "y" => Some(Basis::Y),
            "z" => Some(Basis::Z),
            _ => None,
        }
    }
}

/// A canonical gate descriptor.
///
/// Serializes either as a bare string (`"C-X"`) or as an object
/// `{"type": "measure", "basis": "x"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDescriptor {
    /// Simple tag, e.g. `"RX_90"` or `"C-C-X"`.
    Tag(&'static str),
    /// Measurement or prep in an explicit basis.
    Structured {
        /// Operation kind.
        kind: OpKind,
        /// Basis.
        basis: Basis,
    },
}

impl Serialize for GateDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GateDescriptor::Tag(tag) => serializer.serialize_str(tag),
            GateDescriptor::Structured { kind, basis } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", kind.name())?;
                map.serialize_entry("basis", basis.name())?;
                map.end()
            }
        }
    }
}

impl fmt::Display for GateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateDescriptor::Tag(tag) => write!(f, "{tag}"),
            GateDescriptor::Structured { kind, basis } => {
                write!(f, "{}[basis={}]", kind.name(), basis.name())
            }
        }
    }
}

/// Outcome of mapping one instruction name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// The name has a canonical descriptor.
    Resolved(GateDescriptor),
    /// No table entry; the output gets a placeholder a human must replace.
    Unknown,
}

impl Mapping {
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Mapping::Unknown)
    }

    /// The resolved descriptor, if any.
    pub fn descriptor(&self) -> Option<GateDescriptor> {
        match self {
            Mapping::Resolved(descriptor) => Some(*descriptor),
            Mapping::Unknown => None,
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mapping::Resolved(descriptor) => descriptor.serialize(serializer),
            Mapping::Unknown => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(UNKNOWN_PLACEHOLDER_KEY, &())?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_serializes_as_string() {
        let value = serde_json::to_value(GateDescriptor::Tag("C-X")).unwrap();
        assert_eq!(value, json!("C-X"));
    }

    #[test]
    fn test_structured_serializes_type_then_basis() {
        let descriptor = GateDescriptor::Structured {
            kind: OpKind::Measure,
            basis: Basis::X,
        };
        let text = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(text, r#"{"type":"measure","basis":"x"}"#);
    }

    #[test]
    fn test_unknown_placeholder() {
        let text = serde_json::to_string(&Mapping::Unknown).unwrap();
        assert_eq!(text, r#"{"UNKNOWN?":null}"#);
        assert!(Mapping::Unknown.is_unknown());
        assert_eq!(Mapping::Unknown.descriptor(), None);
    }

    #[test]
    fn test_basis_parse() {
        assert_eq!(Basis::parse("X"), Some(Basis::X));
        assert_eq!(Basis::parse("y"), Some(Basis::Y));
        assert_eq!(Basis::parse("z"), Some(Basis::Z));
        assert_eq!(Basis::parse("w"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GateDescriptor::Tag("RX_90").to_string(), "RX_90");
        let prep = GateDescriptor::Structured {
            kind: OpKind::Prep,
            basis: Basis::Y,
        };
        assert_eq!(prep.to_string(), "prep[basis=y]");
    }
}
