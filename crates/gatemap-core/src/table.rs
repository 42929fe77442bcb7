//! The fixed OpenQL-name → DQCsim-descriptor table.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::descriptor::{Basis, GateDescriptor, Mapping, OpKind};
use crate::normalize::normalize;

const fn tag(name: &'static str) -> GateDescriptor {
    GateDescriptor::Tag(name)
}

const fn structured(kind: OpKind, basis: Basis) -> GateDescriptor {
    GateDescriptor::Structured { kind, basis }
}

/// Every known normalized name with its descriptor.
pub const CANONICAL_TABLE: &[(&str, GateDescriptor)] = &[
    // Paulis and Cliffords
    ("i", tag("I")),
    ("x", tag("X")),
    ("y", tag("Y")),
    ("z", tag("Z")),
    ("h", tag("H")),
    ("s", tag("S")),
    ("sdag", tag("S_DAG")),
    ("t", tag("T")),
    ("tdag", tag("T_DAG")),
    // X rotations
    ("x90", tag("RX_90")),
    ("xm90", tag("RX_M90")),
    ("mx90", tag("RX_M90")),
    ("x180", tag("RX_180")),
    ("rx90", tag("RX_90")),
    ("rxm90", tag("RX_M90")),
    ("rx180", tag("RX_180")),
    ("rx", tag("RX")),
    // Y rotations
    ("y90", tag("RY_90")),
    ("ym90", tag("RY_M90")),
    ("my90", tag("RY_M90")),
    ("y180", tag("RY_180")),
    ("ry90", tag("RY_90")),
    ("rym90", tag("RY_M90")),
    ("ry180", tag("RY_180")),
    ("ry", tag("RY")),
    // Z rotations
    ("z90", tag("RZ_90")),
    ("zm90", tag("RZ_M90")),
    ("mz90", tag("RZ_M90")),
    ("z180", tag("RZ_180")),
    ("rz90", tag("RZ_90")),
    ("rzm90", tag("RZ_M90")),
    ("rz180", tag("RZ_180")),
    ("rz", tag("RZ")),
    // Swaps
    ("swap", tag("SWAP")),
    ("sqswap", tag("SQSWAP")),
    ("sqrtswap", tag("SQSWAP")),
    // Controlled gates
    ("cx", tag("C-X")),
    ("ccx", tag("C-C-X")),
    ("cy", tag("C-Y")),
    ("ccy", tag("C-C-Y")),
    ("cz", tag("C-Z")),
    ("ccz", tag("C-C-Z")),
    ("cphase", tag("C-PHASE")),
    ("ccphase", tag("C-C-PHASE")),
    ("cnot", tag("C-X")),
    ("ccnot", tag("C-C-X")),
    ("toffoli", tag("C-C-X")),
    ("cswap", tag("C-SWAP")),
    ("fredkin", tag("C-SWAP")),
    // Measurement
    ("meas", tag("measure")),
    ("measx", structured(OpKind::Measure, Basis::X)),
    ("measy", structured(OpKind::Measure, Basis::Y)),
    ("measz", tag("measure")),
    // Prep
    ("prep", tag("prep")),
    ("prepx", structured(OpKind::Prep, Basis::X)),
    ("prepy", structured(OpKind::Prep, Basis::Y)),
    ("prepz", tag("prep")),
];

static TABLE: LazyLock<FxHashMap<&'static str, GateDescriptor>> =
    LazyLock::new(|| CANONICAL_TABLE.iter().copied().collect());

/// Look up an already-normalized key. Exact match only.
#[inline]
pub fn lookup(key: &str) -> Option<GateDescriptor> {
    TABLE.get(key).copied()
}

/// Normalize a raw instruction name and map it through the table.
pub fn map_name(name: &str) -> Mapping {
    let key = normalize(name);
    match lookup(&key) {
        Some(descriptor) => {
            debug!("Mapped {name} -> {descriptor} (key {key})");
            Mapping::Resolved(descriptor)
        }
        None => {
            debug!("No canonical descriptor for {name} (key {key})");
            Mapping::Unknown
        }
    }
}
