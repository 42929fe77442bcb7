//! Typed view of an OpenQL platform description.
//!
//! Only the two instruction-bearing sections are modelled. Everything else
//! in the file (`eqasm_compiler`, `hardware_settings`, `topology`, ...) is
//! ignored.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::error::{GatemapError, Result};
use crate::ordered::OrderedMap;

/// The parts of a platform description that reference instruction names.
///
/// The document must be a JSON object; missing sections are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformDescription {
    /// The `instructions` section.
    pub instructions: InstructionList,

    /// The `gate_decomposition` section.
    pub gate_decomposition: GateDecomposition,
}

impl PlatformDescription {
    /// Build a description from already-split sections.
    pub fn new(
        instructions: impl IntoIterator<Item = impl Into<String>>,
        gate_decomposition: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Self {
        Self {
            instructions: InstructionList(instructions.into_iter().map(Into::into).collect()),
            gate_decomposition: GateDecomposition(gate_decomposition.into_iter().collect()),
        }
    }

    /// Parse a platform description from JSON text.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(GatemapError::InvalidPlatform)
    }

    /// True when neither section holds anything.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty() && self.gate_decomposition.is_empty()
    }
}

struct PlatformVisitor;

impl<'de> Visitor<'de> for PlatformVisitor {
    type Value = PlatformDescription;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a platform description object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut platform = PlatformDescription::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "instructions" => platform.instructions = map.next_value()?,
                "gate_decomposition" => platform.gate_decomposition = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(platform)
    }
}

impl<'de> Deserialize<'de> for PlatformDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(PlatformVisitor)
    }
}

/// Instruction entries such as `"cz q0,q2"`.
///
/// OpenQL writes this section as an object keyed by instruction, older
/// hand-written files use a plain array. Both are accepted; for the object
/// form only the keys matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionList(Vec<String>);

impl InstructionList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct InstructionListVisitor;

impl<'de> Visitor<'de> for InstructionListVisitor {
    type Value = InstructionList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of instruction strings or an object keyed by instruction")
    }

    fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(InstructionList::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq.next_element::<String>()? {
            entries.push(entry);
        }
        Ok(InstructionList(entries))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
            entries.push(key);
        }
        Ok(InstructionList(entries))
    }
}

impl<'de> Deserialize<'de> for InstructionList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(InstructionListVisitor)
    }
}

/// Decomposition rules, `"toffoli q0,q1,q2" -> ["h q2", "cnot q1,q2", ...]`,
/// in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GateDecomposition(OrderedMap<Vec<String>>);

impl GateDecomposition {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.0.iter().map(|(rule, body)| (rule.as_str(), body.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let platform = PlatformDescription::from_json("{}").unwrap();
        assert!(platform.is_empty());
    }

    #[test]
    fn test_instruction_array() {
        let platform =
            PlatformDescription::from_json(r#"{"instructions": ["x q0", "cz q0,q1"]}"#).unwrap();
        let names: Vec<&str> = platform.instructions.iter().collect();
        assert_eq!(names, ["x q0", "cz q0,q1"]);
    }

    #[test]
    fn test_instruction_object_keys_in_document_order() {
        let source = r#"{
            "instructions": {
                "y q1": {"duration": 20, "qubits": ["q1"]},
                "prepz q0": {"duration": 200},
                "cz q0,q2": {"duration": 40}
            }
        }"#;
        let platform = PlatformDescription::from_json(source).unwrap();
        let names: Vec<&str> = platform.instructions.iter().collect();
        assert_eq!(names, ["y q1", "prepz q0", "cz q0,q2"]);
    }

    #[test]
    fn test_decomposition_document_order() {
        let source = r#"{
            "gate_decomposition": {
                "z q0": ["y q0", "x q0"],
                "cnot q0,q1": ["ym90 q1", "cz q0,q1", "y90 q1"]
            }
        }"#;
        let platform = PlatformDescription::from_json(source).unwrap();
        let rules: Vec<&str> = platform.gate_decomposition.iter().map(|(k, _)| k).collect();
        assert_eq!(rules, ["z q0", "cnot q0,q1"]);
        let (_, body) = platform.gate_decomposition.iter().nth(1).unwrap();
        assert_eq!(body, ["ym90 q1", "cz q0,q1", "y90 q1"]);
    }

    #[test]
    fn test_unrelated_sections_ignored() {
        let source = r#"{
            "eqasm_compiler": "cc_light_compiler",
            "hardware_settings": {"qubit_number": 7, "cycle_time": 20},
            "instructions": ["h q0"]
        }"#;
        let platform = PlatformDescription::from_json(source).unwrap();
        assert_eq!(platform.instructions.len(), 1);
        assert!(platform.gate_decomposition.is_empty());
    }

    #[test]
    fn test_null_sections_are_empty() {
        let platform =
            PlatformDescription::from_json(r#"{"instructions": null, "gate_decomposition": null}"#)
                .unwrap();
        assert!(platform.is_empty());
    }

    #[test]
    fn test_wrong_shapes_rejected() {
        assert!(PlatformDescription::from_json(r#"{"instructions": 3}"#).is_err());
        assert!(PlatformDescription::from_json(r#"{"instructions": [1, 2]}"#).is_err());
        assert!(PlatformDescription::from_json(r#"{"gate_decomposition": ["x"]}"#).is_err());
        assert!(PlatformDescription::from_json(r#"{"gate_decomposition": {"x": "y"}}"#).is_err());
        assert!(PlatformDescription::from_json("[]").is_err());
        assert!(PlatformDescription::from_json(r#"[["x q0", "cz q0,q1"]]"#).is_err());
        assert!(PlatformDescription::from_json("null").is_err());
        assert!(PlatformDescription::from_json(r#""instructions""#).is_err());
        assert!(PlatformDescription::from_json("not json").is_err());
    }

    #[test]
    fn test_duplicate_rule_keeps_first_position_and_last_body() {
        let source = r#"{
            "gate_decomposition": {
                "a q0": ["x q0"],
                "b q0": ["y q0"],
                "a q0": ["z q0"]
            }
        }"#;
        let platform = PlatformDescription::from_json(source).unwrap();
        let rules: Vec<(&str, &[String])> = platform.gate_decomposition.iter().collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].0, "a q0");
        assert_eq!(rules[0].1, ["z q0"]);
        assert_eq!(rules[1].0, "b q0");
    }

    #[test]
    fn test_repeated_section_last_wins() {
        let platform =
            PlatformDescription::from_json(r#"{"instructions": ["x q0"], "instructions": ["y q0"]}"#)
                .unwrap();
        let names: Vec<&str> = platform.instructions.iter().collect();
        assert_eq!(names, ["y q0"]);
    }

    #[test]
    fn test_new_builds_sections() {
        let platform = PlatformDescription::new(
            ["x q0"],
            [("toffoli q0 q1 q2".to_string(), vec!["h q2".to_string()])],
        );
        assert_eq!(platform.instructions.len(), 1);
        assert_eq!(platform.gate_decomposition.len(), 1);
    }
}
