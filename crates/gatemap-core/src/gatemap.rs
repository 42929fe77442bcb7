//! Loading a finished gate map the way the simulator consumes it.
//!
//! String descriptors are shorthand: `"C-C-X"` means
//! `{"type": "x", "controlled": 2}`. Object descriptors carry a `type`,
//! optionally `controlled`, and either a `basis` or a `matrix`.
//!
//! Gates that take an angle (`rx`, `ry`, `rz`) are kept after all fixed
//! gates, so matrix-based detection tries the specific gates first and
//! never reports e.g. `RX` for what is really `RX_90`.

use num_complex::Complex64;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::descriptor::{Basis, UNKNOWN_PLACEHOLDER_KEY};
use crate::error::{EntryError, GateMapError};
use crate::ordered::OrderedMap;

/// Tolerance used for the unitarity check when none is given.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Predefined unitary gates of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedGate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    SDag,
    T,
    TDag,
    Rx90,
    RxM90,
    Rx180,
    Rx,
    Ry90,
    RyM90,
    Ry180,
    Ry,
    Rz90,
    RzM90,
    Rz180,
    Rz,
    Phase,
    Swap,
    SqSwap,
}

impl PredefinedGate {
    /// All predefined gates.
    pub const ALL: [PredefinedGate; 24] = [
        PredefinedGate::I,
        PredefinedGate::X,
        PredefinedGate::Y,
        PredefinedGate::Z,
        PredefinedGate::H,
        PredefinedGate::S,
        PredefinedGate::SDag,
        PredefinedGate::T,
        PredefinedGate::TDag,
        PredefinedGate::Rx90,
        PredefinedGate::RxM90,
        PredefinedGate::Rx180,
        PredefinedGate::Rx,
        PredefinedGate::Ry90,
        PredefinedGate::RyM90,
        PredefinedGate::Ry180,
        PredefinedGate::Ry,
        PredefinedGate::Rz90,
        PredefinedGate::RzM90,
        PredefinedGate::Rz180,
        PredefinedGate::Rz,
        PredefinedGate::Phase,
        PredefinedGate::Swap,
        PredefinedGate::SqSwap,
    ];

    /// Lowercase type name as written in a gate map.
    pub fn name(self) -> &'static str {
        match self {
            PredefinedGate::I => "i",
            PredefinedGate::X => "x",
            PredefinedGate::Y => "y",
            PredefinedGate::Z => "z",
            PredefinedGate::H => "h",
            PredefinedGate::S => "s",
            PredefinedGate::SDag => "s_dag",
            PredefinedGate::T => "t",
            PredefinedGate::TDag => "t_dag",
            PredefinedGate::Rx90 => "rx_90",
            PredefinedGate::RxM90 => "rx_m90",
            PredefinedGate::Rx180 => "rx_180",
            PredefinedGate::Rx => "rx",
            PredefinedGate::Ry90 => "ry_90",
            PredefinedGate::RyM90 => "ry_m90",
            PredefinedGate::Ry180 => "ry_180",
            PredefinedGate::Ry => "ry",
            PredefinedGate::Rz90 => "rz_90",
            PredefinedGate::RzM90 => "rz_m90",
            PredefinedGate::Rz180 => "rz_180",
            PredefinedGate::Rz => "rz",
            PredefinedGate::Phase => "phase",
            PredefinedGate::Swap => "swap",
            PredefinedGate::SqSwap => "sqswap",
        }
    }

    /// Look up a lowercase type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gate| gate.name() == name)
    }

    /// Target qubits, not counting controls.
    pub fn num_qubits(self) -> usize {
        match self {
            PredefinedGate::Swap | PredefinedGate::SqSwap => 2,
            _ => 1,
        }
    }

    /// Whether the gate takes a rotation angle.
    pub fn is_parameterized(self) -> bool {
        matches!(
            self,
            PredefinedGate::Rx | PredefinedGate::Ry | PredefinedGate::Rz
        )
    }
}

/// Kind of operation a gate-map entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateType {
    Measure,
    Prep,
    /// Custom unitary given by a matrix.
    Unitary,
    Predefined(PredefinedGate),
}

impl GateType {
    fn parse(name: &str) -> Result<Self, EntryError> {
        match name {
            "measure" => Ok(GateType::Measure),
            "prep" => Ok(GateType::Prep),
            "unitary" => Ok(GateType::Unitary),
            other => PredefinedGate::from_name(other)
                .map(GateType::Predefined)
                .ok_or_else(|| EntryError::UnknownType(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GateType::Measure => "measure",
            GateType::Prep => "prep",
            GateType::Unitary => "unitary",
            GateType::Predefined(gate) => gate.name(),
        }
    }
}

/// A square unitary, row-major, with columns normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    num_qubits: usize,
    entries: Vec<Complex64>,
}

impl Matrix {
    /// Parse `[[re, im], ...]`, normalize its columns and check unitarity.
    pub fn from_json(value: &Value, epsilon: f64) -> Result<Self, EntryError> {
        let elements = value.as_array().ok_or(EntryError::MatrixNotArray)?;
        let mut entries = Vec::with_capacity(elements.len());
        for element in elements {
            let pair = element.as_array().filter(|pair| pair.len() == 2);
            let (re, im) = match pair.map(|pair| (pair[0].as_f64(), pair[1].as_f64())) {
                Some((Some(re), Some(im))) => (re, im),
                _ => return Err(EntryError::MatrixElement),
            };
            entries.push(Complex64::new(re, im));
        }

        // Length must be 4^n with n >= 1.
        let mut len = entries.len();
        let mut num_qubits = 0;
        let mut dim = 1;
        while len > 1 {
            if len & 3 != 0 {
                return Err(EntryError::MatrixSize);
            }
            len >>= 2;
            dim <<= 1;
            num_qubits += 1;
        }
        if num_qubits == 0 {
            return Err(EntryError::MatrixSize);
        }

        for col in 0..dim {
            let norm: f64 = (0..dim).map(|row| entries[row * dim + col].norm_sqr()).sum();
            if norm == 0.0 {
                return Err(EntryError::NotUnitary);
            }
            let scale = 1.0 / norm.sqrt();
            for row in 0..dim {
                entries[row * dim + col] *= scale;
            }
        }

        let matrix = Self {
            num_qubits,
            entries,
        };
        if !matrix.is_approx_unitary(epsilon) {
            return Err(EntryError::NotUnitary);
        }
        Ok(matrix)
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Rows (and columns).
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    pub fn entries(&self) -> &[Complex64] {
        &self.entries
    }

    /// Check `U†U ≈ I` element-wise within `epsilon`.
    pub fn is_approx_unitary(&self, epsilon: f64) -> bool {
        let dim = self.dimension();
        for i in 0..dim {
            for j in 0..dim {
                let dot: Complex64 = (0..dim)
                    .map(|k| self.entries[k * dim + i].conj() * self.entries[k * dim + j])
                    .sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                if (dot - Complex64::new(expected, 0.0)).norm() > epsilon {
                    return false;
                }
            }
        }
        true
    }
}

/// Fully desugared description of one gate-map entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSpec {
    pub gate_type: GateType,
    /// Number of control qubits.
    pub controlled: usize,
    /// Basis for measure/prep; `Z` unless stated.
    pub basis: Basis,
    /// Custom matrix, if one was given.
    pub matrix: Option<Matrix>,
}

impl GateSpec {
    /// Whether the gate takes a rotation angle.
    pub fn is_parameterized(&self) -> bool {
        matches!(self.gate_type, GateType::Predefined(gate) if gate.is_parameterized())
    }

    /// Parse a single descriptor value.
    pub fn from_json(value: &Value, epsilon: f64) -> Result<Self, EntryError> {
        match value {
            Value::String(shorthand) => Self::from_shorthand(shorthand),
            Value::Object(fields) => {
                if fields.contains_key(UNKNOWN_PLACEHOLDER_KEY) {
                    return Err(EntryError::Placeholder);
                }
                let type_name = fields
                    .get("type")
                    .ok_or(EntryError::MissingType)?
                    .as_str()
                    .ok_or(EntryError::NotAString("type"))?
                    .to_lowercase();
                let gate_type = GateType::parse(&type_name)?;

                let controlled = match fields.get("controlled") {
                    None => 0,
                    Some(value) => value
                        .as_u64()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or(EntryError::InvalidControlled)?,
                };

                let mut basis = Basis::Z;
                let mut matrix = None;
                if let Some(value) = fields.get("matrix") {
                    matrix = Some(Matrix::from_json(value, epsilon)?);
                } else if let Some(value) = fields.get("basis") {
                    let name = value.as_str().ok_or(EntryError::NotAString("basis"))?;
                    basis = Basis::parse(name)
                        .ok_or_else(|| EntryError::UnknownBasis(name.to_string()))?;
                }

                Self::checked(gate_type, controlled, basis, matrix)
            }
            _ => Err(EntryError::InvalidShape),
        }
    }

    /// `"C-C-X"` → type `x`, two controls.
    fn from_shorthand(shorthand: &str) -> Result<Self, EntryError> {
        let lowered = shorthand.to_lowercase();
        let mut rest = lowered.as_str();
        let mut controlled = 0;
        while let Some(stripped) = rest.strip_prefix("c-") {
            rest = stripped;
            controlled += 1;
        }
        let gate_type = GateType::parse(rest)?;
        Self::checked(gate_type, controlled, Basis::Z, None)
    }

    fn checked(
        gate_type: GateType,
        controlled: usize,
        basis: Basis,
        matrix: Option<Matrix>,
    ) -> Result<Self, EntryError> {
        match gate_type {
            GateType::Measure | GateType::Prep if controlled > 0 => {
                return Err(EntryError::NotControllable(gate_type.name().to_string()));
            }
            GateType::Unitary if matrix.is_none() => return Err(EntryError::MissingMatrix),
            _ => {}
        }
        Ok(Self {
            gate_type,
            controlled,
            basis,
            matrix,
        })
    }
}

/// One named entry of a gate map.
#[derive(Debug, Clone, PartialEq)]
pub struct GateMapEntry {
    /// Instruction name, as written in the platform description.
    pub name: String,
    pub spec: GateSpec,
}

/// A loaded gate map: fixed gates first, then parameterized ones, each
/// group in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateMap {
    entries: Vec<GateMapEntry>,
    num_fixed: usize,
}

impl GateMap {
    /// Parse a gate-map document with the default tolerance.
    pub fn from_json(source: &str) -> Result<Self, GateMapError> {
        Self::from_json_with_epsilon(source, DEFAULT_EPSILON)
    }

    /// Parse a gate-map document.
    #[instrument(skip(source))]
    pub fn from_json_with_epsilon(source: &str, epsilon: f64) -> Result<Self, GateMapError> {
        let OrderedMap(raw) = serde_json::from_str::<OrderedMap<Value>>(source)?;

        let mut fixed = Vec::new();
        let mut parameterized = Vec::new();
        for (name, value) in raw {
            let spec = match GateSpec::from_json(&value, epsilon) {
                Ok(spec) => spec,
                Err(reason) => return Err(GateMapError::Entry { name, reason }),
            };
            debug!(
                "Loaded {name}: {} with {} control(s)",
                spec.gate_type.name(),
                spec.controlled
            );
            let entry = GateMapEntry { name, spec };
            if entry.spec.is_parameterized() {
                parameterized.push(entry);
            } else {
                fixed.push(entry);
            }
        }

        let num_fixed = fixed.len();
        fixed.extend(parameterized);
        Ok(Self {
            entries: fixed,
            num_fixed,
        })
    }

    /// All entries, fixed gates first.
    pub fn entries(&self) -> &[GateMapEntry] {
        &self.entries
    }

    pub fn fixed(&self) -> &[GateMapEntry] {
        &self.entries[..self.num_fixed]
    }

    pub fn parameterized(&self) -> &[GateMapEntry] {
        &self.entries[self.num_fixed..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&GateSpec> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.spec)
    }

    /// Whether instructions with this name carry an angle argument.
    pub fn has_angle(&self, name: &str) -> bool {
        self.parameterized().iter().any(|entry| entry.name == name)
    }
}
