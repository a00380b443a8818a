use crate::error::ModelError;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An edge between two variables.
pub type Edge = (usize, usize);

/// Bonds of a single variable as `(neighbour, bias)`, sorted by neighbour.
type Bonds = SmallVec<[(usize, f64); 4]>;

/// The domain of every variable in a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Vartype {
    /// Variables take values in `{-1, +1}`.
    Spin,
    /// Variables take values in `{0, 1}`.
    Binary,
}

impl Vartype {
    /// The two values a variable of this vartype can take, low first.
    pub fn values(self) -> [i8; 2] {
        match self {
            Vartype::Spin => [-1, 1],
            Vartype::Binary => [0, 1],
        }
    }

    /// Check if `value` belongs to this vartype.
    pub fn contains(self, value: i8) -> bool {
        self.values().contains(&value)
    }
}

/// A sparse binary quadratic model.
///
/// The energy of a sample `s` is `offset + sum_i h_i s_i + sum_{i<j} J_ij s_i s_j`.
/// Variables are labelled `0..num_variables()`; touching a variable creates it along with
/// every lower label that did not exist yet, with a linear bias of zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BinaryQuadraticModel {
    vartype: Vartype,
    linear: Vec<f64>,
    // Every interaction is stored twice, once under each endpoint.
    binding_mat: Vec<Bonds>,
    offset: f64,
    num_interactions: usize,
}

impl BinaryQuadraticModel {
    /// Make an empty model.
    pub fn new(vartype: Vartype) -> Self {
        Self::with_variables(vartype, 0)
    }

    /// Make a model with `n` variables, no interactions and zero biases.
    pub fn with_variables(vartype: Vartype, n: usize) -> Self {
        Self {
            vartype,
            linear: vec![0.0; n],
            binding_mat: vec![Bonds::new(); n],
            offset: 0.0,
            num_interactions: 0,
        }
    }

    /// The vartype of the model.
    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    /// Number of distinct interactions.
    pub fn num_interactions(&self) -> usize {
        self.num_interactions
    }

    /// Check if the model has no variables.
    pub fn is_empty(&self) -> bool {
        self.linear.is_empty()
    }

    /// Make sure variable `v` exists.
    pub fn add_variable(&mut self, v: usize) {
        if v >= self.linear.len() {
            self.linear.resize(v + 1, 0.0);
            self.binding_mat.resize_with(v + 1, Bonds::new);
        }
    }

    /// Linear biases indexed by variable.
    pub fn linear(&self) -> &[f64] {
        &self.linear
    }

    /// Linear bias of `v`, `None` if the variable does not exist.
    pub fn get_linear(&self, v: usize) -> Option<f64> {
        self.linear.get(v).copied()
    }

    /// Overwrite the linear bias of `v`.
    pub fn set_linear(&mut self, v: usize, bias: f64) {
        self.add_variable(v);
        self.linear[v] = bias;
    }

    /// Add `bias` to the linear bias of `v`.
    pub fn add_linear(&mut self, v: usize, bias: f64) {
        self.add_variable(v);
        self.linear[v] += bias;
    }

    /// Quadratic bias between `u` and `v` in either order, `None` if they do not interact.
    pub fn get_quadratic(&self, u: usize, v: usize) -> Option<f64> {
        let bonds = self.binding_mat.get(u)?;
        bonds
            .binary_search_by_key(&v, |(w, _)| *w)
            .ok()
            .map(|indx| bonds[indx].1)
    }

    /// Overwrite the quadratic bias between `u` and `v`.
    pub fn set_quadratic(&mut self, u: usize, v: usize, bias: f64) -> Result<(), ModelError> {
        self.update_quadratic(u, v, |j| *j = bias)
    }

    /// Add `bias` to the quadratic bias between `u` and `v`, a missing interaction counts as zero.
    pub fn add_quadratic(&mut self, u: usize, v: usize, bias: f64) -> Result<(), ModelError> {
        self.update_quadratic(u, v, |j| *j += bias)
    }

    fn update_quadratic<F: Fn(&mut f64)>(
        &mut self,
        u: usize,
        v: usize,
        update: F,
    ) -> Result<(), ModelError> {
        if u == v {
            return Err(ModelError::SelfLoop { variable: u });
        }
        self.add_variable(u.max(v));
        let inserted = update_bond(&mut self.binding_mat[u], v, &update);
        update_bond(&mut self.binding_mat[v], u, &update);
        if inserted {
            self.num_interactions += 1;
        }
        Ok(())
    }

    /// Iterate over the interactions as `((u, v), bias)` with `u < v`, sorted.
    pub fn quadratic(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        self.binding_mat.iter().enumerate().flat_map(|(u, bonds)| {
            bonds
                .iter()
                .filter(move |(v, _)| *v > u)
                .map(move |(v, j)| ((u, *v), *j))
        })
    }

    /// Iterate over the neighbours of `v` as `(neighbour, bias)`, sorted by neighbour.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.binding_mat
            .get(v)
            .into_iter()
            .flat_map(|bonds| bonds.iter().copied())
    }

    /// Number of interactions involving `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.binding_mat.get(v).map_or(0, |bonds| bonds.len())
    }

    /// The constant energy term.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Overwrite the constant energy term.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Add to the constant energy term.
    pub fn add_offset(&mut self, offset: f64) {
        self.offset += offset;
    }

    /// Get the energy of a sample, one value per variable in the model's vartype.
    pub fn energy(&self, sample: &[i8]) -> Result<f64, ModelError> {
        if sample.len() != self.num_variables() {
            return Err(ModelError::SampleLength {
                expected: self.num_variables(),
                found: sample.len(),
            });
        }
        if let Some((variable, value)) = sample
            .iter()
            .copied()
            .enumerate()
            .find(|(_, s)| !self.vartype.contains(*s))
        {
            return Err(ModelError::InvalidValue {
                variable,
                value,
                vartype: self.vartype,
            });
        }
        let linear_e: f64 = self
            .linear
            .iter()
            .zip(sample)
            .map(|(h, s)| h * f64::from(*s))
            .sum();
        let quadratic_e: f64 = self
            .quadratic()
            .map(|((u, v), j)| j * f64::from(sample[u]) * f64::from(sample[v]))
            .sum();
        Ok(self.offset + linear_e + quadratic_e)
    }

    /// Make an equivalent model over `vartype`, every sample keeps its energy once mapped
    /// through `s = 2x - 1`.
    pub fn change_vartype(&self, vartype: Vartype) -> Self {
        match (self.vartype, vartype) {
            (Vartype::Spin, Vartype::Binary) => {
                let mut bqm = self.scaled_interactions(vartype, 4.0);
                for (v, h) in self.linear.iter().enumerate() {
                    bqm.linear[v] = 2.0 * h;
                    bqm.offset -= h;
                }
                for ((u, v), j) in self.quadratic() {
                    bqm.linear[u] -= 2.0 * j;
                    bqm.linear[v] -= 2.0 * j;
                    bqm.offset += j;
                }
                bqm
            }
            (Vartype::Binary, Vartype::Spin) => {
                let mut bqm = self.scaled_interactions(vartype, 0.25);
                for (v, a) in self.linear.iter().enumerate() {
                    bqm.linear[v] = 0.5 * a;
                    bqm.offset += 0.5 * a;
                }
                for ((u, v), b) in self.quadratic() {
                    bqm.linear[u] += 0.25 * b;
                    bqm.linear[v] += 0.25 * b;
                    bqm.offset += 0.25 * b;
                }
                bqm
            }
            _ => self.clone(),
        }
    }

    /// Split the spin form of the model into linear biases, interactions and offset.
    pub fn to_ising(&self) -> (Vec<f64>, Vec<(Edge, f64)>, f64) {
        let spin = self.change_vartype(Vartype::Spin);
        let edges = spin.quadratic().collect::<Vec<_>>();
        (spin.linear, edges, spin.offset)
    }

    fn scaled_interactions(&self, vartype: Vartype, scale: f64) -> Self {
        Self {
            vartype,
            linear: self.linear.clone(),
            binding_mat: self
                .binding_mat
                .iter()
                .map(|bonds| bonds.iter().map(|(w, j)| (*w, scale * j)).collect())
                .collect(),
            offset: self.offset,
            num_interactions: self.num_interactions,
        }
    }
}

/// Apply `update` to the bond with `other`, inserting it at zero first if absent.
/// Returns whether a bond was inserted.
fn update_bond<F: Fn(&mut f64)>(bonds: &mut Bonds, other: usize, update: &F) -> bool {
    match bonds.binary_search_by_key(&other, |(w, _)| *w) {
        Ok(indx) => {
            update(&mut bonds[indx].1);
            false
        }
        Err(indx) => {
            let mut j = 0.0;
            update(&mut j);
            bonds.insert(indx, (other, j));
            true
        }
    }
}
