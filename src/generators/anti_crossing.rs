use crate::error::GeneratorError;
use crate::graph::{BinaryQuadraticModel, Vartype};
use tracing::{debug, instrument, warn};

/// Generate an anti-crossing problem with a single clique.
///
/// Let `n = num_variables / 2`. Variables `[0, n)` form a ferromagnetic clique and each
/// clique variable `v` also interacts ferromagnetically with its pendant `v + n`.
/// Clique variables have a linear bias of `+1`, except variable `1` which has none, and
/// pendants have a linear bias of `-1`.
///
/// The unique ground state is `+1` for every variable.
///
/// `num_variables` must be an even number greater than or equal to 6.
///
/// ```
/// use anticross::generators::anti_crossing_clique;
///
/// let bqm = anti_crossing_clique(6)?;
/// assert_eq!(bqm.linear(), &[1.0, 0.0, 1.0, -1.0, -1.0, -1.0]);
/// assert!(bqm.quadratic().all(|(_, j)| j == -1.0));
/// # Ok::<(), anticross::GeneratorError>(())
/// ```
#[instrument(level = "debug")]
pub fn anti_crossing_clique(num_variables: usize) -> Result<BinaryQuadraticModel, GeneratorError> {
    check_size(num_variables, 6)?;

    let half = num_variables / 2;
    let mut bqm = BinaryQuadraticModel::with_variables(Vartype::Spin, num_variables);
    for n in 0..half {
        for m in n + 1..half {
            bqm.add_quadratic(n, m, -1.0)?;
        }
        bqm.add_quadratic(n, n + half, -1.0)?;

        bqm.add_linear(n, 1.0);
        bqm.add_linear(n + half, -1.0);
    }
    // Removing the field on one clique variable makes the ground state unique.
    bqm.set_linear(1, 0.0);

    debug!(
        num_variables = bqm.num_variables(),
        num_interactions = bqm.num_interactions(),
        "built anti-crossing clique"
    );
    Ok(bqm)
}

/// Generate an anti-crossing problem with two loops.
///
/// With `q = num_variables / 4`, variables `[0, q)` and `[q, 2q)` each form a ferromagnetic
/// ring, the rings are joined at every odd position and every ring variable `v` carries a
/// pendant `v + 2q`. Ring variables have a linear bias of `+1`, except `0` and `q` which have
/// none, and pendants have a linear bias of `-1`. This is the 16 qubit problem of
/// Dickson et al., "Thermally assisted quantum annealing of a 16-qubit problem",
/// Nat Commun 4, 1903 (2013).
///
/// The unique ground state is `+1` for every variable.
///
/// `num_variables` must be an even number greater than or equal to 8. For `q = 2` each ring
/// collapses to a single edge. When `num_variables` is not a multiple of 4 the model only
/// holds the first `4 * q` variables.
///
/// ```
/// use anticross::generators::anti_crossing_loops;
///
/// let bqm = anti_crossing_loops(16)?;
/// assert_eq!(bqm.get_quadratic(1, 5), Some(-1.0));
/// assert_eq!(bqm.get_quadratic(0, 4), None);
/// # Ok::<(), anticross::GeneratorError>(())
/// ```
#[instrument(level = "debug")]
pub fn anti_crossing_loops(num_variables: usize) -> Result<BinaryQuadraticModel, GeneratorError> {
    check_size(num_variables, 8)?;

    let quarter = num_variables / 4;
    let mut bqm = BinaryQuadraticModel::with_variables(Vartype::Spin, 4 * quarter);
    for n in 0..quarter {
        let next = (n + 1) % quarter;
        if n % 2 == 1 {
            bqm.set_quadratic(n, n + quarter, -1.0)?;
        }

        bqm.set_quadratic(n, next, -1.0)?;
        bqm.set_quadratic(n + quarter, next + quarter, -1.0)?;

        bqm.set_quadratic(n, n + 2 * quarter, -1.0)?;
        bqm.set_quadratic(n + quarter, n + 3 * quarter, -1.0)?;

        bqm.add_linear(n, 1.0);
        bqm.add_linear(n + quarter, 1.0);
        bqm.add_linear(n + 2 * quarter, -1.0);
        bqm.add_linear(n + 3 * quarter, -1.0);
    }
    bqm.set_linear(0, 0.0);
    bqm.set_linear(quarter, 0.0);

    debug!(
        num_variables = bqm.num_variables(),
        num_interactions = bqm.num_interactions(),
        "built anti-crossing loops"
    );
    Ok(bqm)
}

fn check_size(num_variables: usize, minimum: usize) -> Result<(), GeneratorError> {
    if num_variables % 2 != 0 || num_variables < minimum {
        warn!(num_variables, minimum, "rejected anti-crossing size");
        return Err(GeneratorError::InvalidArgument(format!(
            "num_variables must be an even number >= {minimum}"
        )));
    }
    Ok(())
}
