//! OpenQL platform description → DQCsim gate map
//!
//! This crate turns the instruction names used by an OpenQL platform
//! description into the gate-map document DQCsim's OpenQL mapper operator
//! loads. Mapping is purely lexical: names are normalized and looked up in a
//! fixed table. Anything the table does not know is written as a placeholder
//! and reported, so a human can finish the file.
//!
//! # Pipeline
//!
//! 1. [`extract_names`] collects the first word of every entry in
//!    `instructions` and `gate_decomposition`.
//! 2. [`dedup_first_seen`] removes repeats, keeping first-seen order.
//! 3. [`map_name`] normalizes each name and looks it up in
//!    [`CANONICAL_TABLE`]; [`GateMapDocument`] collects the results.
//!
//! [`convert`] runs all three and returns the document with a [`Report`].
//!
//! # Example
//!
//! ```rust
//! use gatemap_core::{PlatformDescription, convert};
//!
//! let platform = PlatformDescription::from_json(r#"{
//!     "instructions": ["x q0", "cz q0,q1", "x q1"],
//!     "gate_decomposition": {"toffoli q0,q1,q2": ["h q2", "cnot q1,q2"]}
//! }"#).unwrap();
//!
//! let conversion = convert(&platform);
//! assert!(conversion.report.is_clean());
//!
//! let json = conversion.document.to_json().unwrap();
//! assert!(json.starts_with("{\n    \"x\": \"X\",\n    \"cz\": \"C-Z\""));
//! ```
//!
//! # Loading a finished gate map
//!
//! [`GateMap`] reads the document back the way the simulator does,
//! desugaring `"C-C-X"` shorthand into a gate type plus control count and
//! rejecting leftover placeholders.
//!
//! ```rust
//! use gatemap_core::{GateMap, GateType, PredefinedGate};
//!
//! let map = GateMap::from_json(r#"{"toffoli": "C-C-X", "rx": "RX"}"#).unwrap();
//! let toffoli = map.get("toffoli").unwrap();
//! assert_eq!(toffoli.gate_type, GateType::Predefined(PredefinedGate::X));
//! assert_eq!(toffoli.controlled, 2);
//! assert!(map.has_angle("rx"));
//! ```

pub mod dedup;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod extract;
pub mod gatemap;
pub mod normalize;
mod ordered;
pub mod pipeline;
pub mod platform;
pub mod report;
pub mod table;

pub use dedup::dedup_first_seen;
pub use descriptor::{Basis, GateDescriptor, Mapping, OpKind, UNKNOWN_PLACEHOLDER_KEY};
pub use emit::GateMapDocument;
pub use error::{EntryError, GateMapError, GatemapError, Result};
pub use extract::{extract_names, first_word};
pub use gatemap::{
    DEFAULT_EPSILON, GateMap, GateMapEntry, GateSpec, GateType, Matrix, PredefinedGate,
};
pub use normalize::normalize;
pub use pipeline::{Conversion, convert, read_gatemap, read_platform, write_gatemap};
pub use platform::{GateDecomposition, InstructionList, PlatformDescription};
pub use report::Report;
pub use table::{CANONICAL_TABLE, lookup, map_name};
