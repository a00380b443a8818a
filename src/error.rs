use crate::graph::Vartype;
use thiserror::Error;

/// Errors raised by [`BinaryQuadraticModel`](crate::graph::BinaryQuadraticModel) operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An interaction was requested between a variable and itself.
    #[error("cannot add an interaction between variable {variable} and itself")]
    SelfLoop {
        /// The repeated variable.
        variable: usize,
    },
    /// A sample did not assign exactly one value per variable.
    #[error("sample has {found} values but the model has {expected} variables")]
    SampleLength {
        /// Number of variables in the model.
        expected: usize,
        /// Length of the offending sample.
        found: usize,
    },
    /// A sample value lies outside the domain of the model's vartype.
    #[error("value {value} of variable {variable} is not a valid {vartype:?} value")]
    InvalidValue {
        /// Variable holding the bad value.
        variable: usize,
        /// The bad value.
        value: i8,
        /// Vartype the sample was checked against.
        vartype: Vartype,
    },
}

/// Errors raised by the problem generators.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The size parameter failed its parity or minimum-size check.
    #[error("{0}")]
    InvalidArgument(String),
    /// A model primitive failed while building the problem.
    #[error(transparent)]
    Model(#[from] ModelError),
}
