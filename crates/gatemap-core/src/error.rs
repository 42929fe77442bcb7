//! Error types for the gate-map crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a platform description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatemapError {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file exists but could not be read.
    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input file is not a valid platform description.
    #[error("Failed to parse platform description {}: {source}", path.display())]
    InputParse {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// In-memory platform description text is invalid.
    #[error("Invalid platform description: {0}")]
    InvalidPlatform(serde_json::Error),

    /// The gate-map document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    /// Output file could not be written.
    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A gate-map document failed to load.
    #[error(transparent)]
    GateMap(#[from] GateMapError),
}

/// Errors raised while loading a (hand-finished) gate-map document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateMapError {
    /// Document is not valid JSON or not a JSON object.
    #[error("Invalid gate map: {0}")]
    Json(#[from] serde_json::Error),

    /// A single entry is malformed.
    #[error("while parsing gate-map entry for {name}: {reason}")]
    Entry {
        /// Instruction name of the offending entry.
        name: String,
        /// What is wrong with it.
        reason: EntryError,
    },
}

/// Reasons a single gate-map entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EntryError {
    /// The entry still holds the unknown-gate placeholder.
    #[error("entry is still the unknown-gate placeholder and must be edited by hand")]
    Placeholder,

    /// Descriptor is neither a string nor an object.
    #[error("descriptor must be a string or an object")]
    InvalidShape,

    /// Object descriptor lacks a `type` field.
    #[error("missing \"type\" field")]
    MissingType,

    /// A field has the wrong JSON type.
    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),

    /// Gate type is not known to the simulator.
    #[error("unknown gate type {0}")]
    UnknownType(String),

    /// Basis is not one of x, y, z.
    #[error("unknown basis {0}")]
    UnknownBasis(String),

    /// `controlled` is not a non-negative integer.
    #[error("\"controlled\" must be a non-negative integer")]
    InvalidControlled,

    /// Measurement and prep cannot take control qubits.
    #[error("{0} cannot be controlled")]
    NotControllable(String),

    /// `unitary` without a matrix.
    #[error("custom unitary requires a \"matrix\"")]
    MissingMatrix,

    /// `matrix` is not an array.
    #[error("\"matrix\" must be an array")]
    MatrixNotArray,

    /// `matrix` element is not a `[re, im]` pair.
    #[error("\"matrix\" elements must be arrays of size two")]
    MatrixElement,

    /// `matrix` length is not a power of four.
    #[error("\"matrix\" has invalid size")]
    MatrixSize,

    /// `matrix` is not unitary after column normalization.
    #[error("\"matrix\" is not unitary")]
    NotUnitary,
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, GatemapError>;
