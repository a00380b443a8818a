use anticross::{anti_crossing_clique, anti_crossing_loops, GeneratorError, Vartype};
use rstest::rstest;

#[rstest]
fn clique_counts(#[values(6, 8, 10, 12, 20, 50)] n: usize) {
    let bqm = anti_crossing_clique(n).unwrap();
    let half = n / 2;
    assert_eq!(bqm.vartype(), Vartype::Spin);
    assert_eq!(bqm.num_variables(), n);
    assert_eq!(bqm.num_interactions(), half * (half - 1) / 2 + half);
    assert_eq!(bqm.quadratic().count(), bqm.num_interactions());
    assert!(bqm.quadratic().all(|(_, j)| j == -1.0));
}

#[test]
fn clique_six() {
    let bqm = anti_crossing_clique(6).unwrap();
    assert_eq!(bqm.linear(), &[1.0, 0.0, 1.0, -1.0, -1.0, -1.0]);
    let edges = bqm.quadratic().map(|(e, _)| e).collect::<Vec<_>>();
    assert_eq!(edges, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 4), (2, 5)]);
}

#[rstest]
fn clique_structure(#[values(8, 14)] n: usize) {
    let bqm = anti_crossing_clique(n).unwrap();
    let half = n / 2;
    for v in 0..half {
        for w in 0..half {
            if v != w {
                assert_eq!(bqm.get_quadratic(v, w), Some(-1.0));
            }
        }
        assert_eq!(bqm.degree(v), half);
        assert_eq!(bqm.get_quadratic(v, v + half), Some(-1.0));
        assert_eq!(bqm.degree(v + half), 1);

        let expected = if v == 1 { 0.0 } else { 1.0 };
        assert_eq!(bqm.get_linear(v), Some(expected));
        assert_eq!(bqm.get_linear(v + half), Some(-1.0));
    }
}

#[rstest]
#[case(0)]
#[case(4)]
#[case(5)]
#[case(7)]
fn clique_rejects(#[case] n: usize) {
    assert_eq!(
        anti_crossing_clique(n),
        Err(GeneratorError::InvalidArgument(
            "num_variables must be an even number >= 6".to_string()
        ))
    );
}

#[test]
fn loops_sixteen() {
    let bqm = anti_crossing_loops(16).unwrap();
    assert_eq!(bqm.vartype(), Vartype::Spin);
    assert_eq!(bqm.num_variables(), 16);
    assert_eq!(bqm.num_interactions(), 18);

    for v in [0, 4] {
        assert_eq!(bqm.get_linear(v), Some(0.0));
    }
    for v in [1, 2, 3, 5, 6, 7] {
        assert_eq!(bqm.get_linear(v), Some(1.0));
    }
    for v in 8..16 {
        assert_eq!(bqm.get_linear(v), Some(-1.0));
    }

    // Loops are joined at odd positions only.
    assert_eq!(bqm.get_quadratic(0, 4), None);
    assert_eq!(bqm.get_quadratic(1, 5), Some(-1.0));
    assert_eq!(bqm.get_quadratic(2, 6), None);
    assert_eq!(bqm.get_quadratic(3, 7), Some(-1.0));

    for n in 0..4 {
        assert_eq!(bqm.get_quadratic(n, (n + 1) % 4), Some(-1.0));
        assert_eq!(bqm.get_quadratic(n + 4, (n + 1) % 4 + 4), Some(-1.0));
        assert_eq!(bqm.get_quadratic(n, n + 8), Some(-1.0));
        assert_eq!(bqm.get_quadratic(n + 4, n + 12), Some(-1.0));
    }
}

#[rstest]
fn loops_counts(#[values(12, 16, 20, 24, 40, 42)] n: usize) {
    let bqm = anti_crossing_loops(n).unwrap();
    let q = n / 4;
    assert_eq!(bqm.num_variables(), 4 * q);
    assert_eq!(bqm.num_interactions(), 4 * q + q / 2);
    assert!(bqm.quadratic().all(|(_, j)| j == -1.0));

    for v in 0..2 * q {
        let cross = usize::from(v % q % 2 == 1);
        assert_eq!(bqm.degree(v), 3 + cross);
        assert_eq!(bqm.degree(v + 2 * q), 1);
        assert_eq!(bqm.get_linear(v + 2 * q), Some(-1.0));
    }
}

#[rstest]
#[case(8)]
#[case(10)]
fn loops_collapse_to_edges(#[case] n: usize) {
    let bqm = anti_crossing_loops(n).unwrap();
    assert_eq!(bqm.num_variables(), 8);
    assert_eq!(bqm.num_interactions(), 7);
    assert_eq!(bqm.get_quadratic(0, 1), Some(-1.0));
    assert_eq!(bqm.get_quadratic(2, 3), Some(-1.0));
    assert_eq!(bqm.get_quadratic(1, 3), Some(-1.0));
    assert_eq!(bqm.get_quadratic(0, 2), None);
    assert_eq!(
        bqm.linear(),
        &[0.0, 1.0, 0.0, 1.0, -1.0, -1.0, -1.0, -1.0]
    );
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(7)]
#[case(9)]
fn loops_rejects(#[case] n: usize) {
    assert_eq!(
        anti_crossing_loops(n),
        Err(GeneratorError::InvalidArgument(
            "num_variables must be an even number >= 8".to_string()
        ))
    );
}

#[rstest]
fn generators_are_pure(#[values(8, 12, 30)] n: usize) {
    assert_eq!(anti_crossing_clique(n), anti_crossing_clique(n));
    assert_eq!(anti_crossing_loops(n), anti_crossing_loops(n));
}
