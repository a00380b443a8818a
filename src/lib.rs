#![deny(
    missing_docs,
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

//! `anticross` builds anti-crossing benchmark problems for ising and annealing solvers.
//!
//! Each generator returns a spin valued [`BinaryQuadraticModel`] whose unique ground state is
//! known in advance (every variable `+1`), so the output of a solver can be checked against it.
//!
//! The model can be serialized with serde using the `serialize` feature.
//!
//! # Basic Example
//! ```
//! use anticross::{anti_crossing_clique, Vartype};
//!
//! let bqm = anti_crossing_clique(6)?;
//! assert_eq!(bqm.vartype(), Vartype::Spin);
//!
//! // The ground state energy.
//! let ground = vec![1i8; bqm.num_variables()];
//! assert_eq!(bqm.energy(&ground)?, -7.0);
//!
//! // Hand the problem to an ising solver as `(h, [((i, j), J)], offset)`.
//! let (biases, edges, offset) = bqm.to_ising();
//! assert_eq!(biases.len(), 6);
//! assert_eq!(edges.len(), 6);
//! assert_eq!(offset, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Error types.
pub mod error;
/// Problem generators.
pub mod generators;
/// A sparse binary quadratic model.
pub mod graph;

pub use error::{GeneratorError, ModelError};
pub use generators::{anti_crossing_clique, anti_crossing_loops};
pub use graph::{BinaryQuadraticModel, Edge, Vartype};
