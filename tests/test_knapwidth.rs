use std::{path::PathBuf, time::Duration};

use rand::{rngs::StdRng, Rng, SeedableRng};

use knapwidth::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id)
}

fn instance(id: &str) -> Instance {
    Instance::from_file(locate(id)).expect("cannot read instance")
}

/// The best objective among all feasible selections (exhaustive)
fn brute_force(instance: &Instance) -> isize {
    let n = instance.nb_items();
    let mut best = 0;
    for mask in 0_u32..(1 << n) {
        let selection = (0..n).filter(|i| mask & (1 << i) != 0).collect::<Vec<_>>();
        let evaluation = instance.evaluate(&selection).unwrap();
        if evaluation.is_feasible() {
            best = best.max(evaluation.objective());
        }
    }
    best
}

/// A small instance with random conflicts (and small enough numbers for
/// capacities to bind)
fn random_instance(rng: &mut StdRng, nb_items: usize, with_conflicts: bool) -> Instance {
    let mut builder = InstanceBuilder::new(rng.random_range(0..=30));
    for _ in 0..nb_items {
        builder = builder.item(rng.random_range(1..=12), rng.random_range(0..=10), rng.random_range(0..=15));
    }
    if with_conflicts {
        builder = builder.with_conflicts();
        for a in 0..nb_items {
            for b in a + 1..nb_items {
                if rng.random_bool(0.25) {
                    builder = builder.conflict(a, b);
                }
            }
        }
    }
    builder.build().unwrap()
}

fn objective(instance: &Instance, selection: &[usize]) -> isize {
    let evaluation = instance.evaluate(selection).unwrap();
    assert!(evaluation.is_feasible());
    evaluation.objective()
}

// ----------------------------------------------------------------------------
// --- SCENARIOS --------------------------------------------------------------
// ----------------------------------------------------------------------------
#[test]
fn scenario_1_both_items_are_selected() {
    let instance = instance("scenario_1.json");
    assert_eq!(Variant::WithoutConflicts, instance.variant());

    let selection = dynamic_programming(&instance).unwrap();
    assert_eq!(16, objective(&instance, &selection));
    assert_eq!(2, selection.len());
}

#[test]
fn scenario_2_narrower_item_is_selected() {
    let instance = instance("scenario_2.json");
    let scheme = KnapsackWithWidthBranching::new(&instance);
    let parameters = SearchParameters::default();

    for output in [best_first_search(&scheme, &parameters), iterative_beam_search(&scheme, &parameters)] {
        assert_eq!(None, output.reason);
        let selection = scheme.to_solution(output.solution_pool.best());
        assert_eq!(vec![0], selection);
        assert_eq!(7, objective(&instance, &selection));
    }
    assert!(dynamic_programming(&instance).is_err());
}

#[test]
fn scenario_3_nothing_fits_in_an_empty_knapsack() {
    let instance = instance("scenario_3.json");
    let scheme = KnapsackWithWidthBranching::new(&instance);
    let parameters = SearchParameters::default();

    assert!(dynamic_programming(&instance).unwrap().is_empty());
    for output in [greedy(&scheme, &parameters), best_first_search(&scheme, &parameters), iterative_beam_search(&scheme, &parameters)] {
        let selection = scheme.to_solution(output.solution_pool.best());
        assert!(selection.is_empty());
        assert_eq!(0, objective(&instance, &selection));
    }
}

#[test]
fn scenario_4_duplicates_are_reported() {
    let instance = instance("scenario_1.json");
    let certificate = Certificate::from_file(locate("scenario_4.json")).unwrap();
    let evaluation = instance.evaluate(&certificate.items).unwrap();

    assert_eq!(1, evaluation.nb_duplicates);
    assert!(!evaluation.is_feasible());
    assert!(evaluation.to_string().contains("Number of duplicates: 1"));
    assert!(evaluation.to_string().contains("Feasible: false"));
}

#[test]
fn ill_formed_instances_are_rejected() {
    let error = Instance::from_file(locate("ill_formed.json")).unwrap_err();
    assert!(matches!(error, Error::LengthMismatch { weights: 2, widths: 1, profits: 2 }));
}

#[test]
fn missing_files_are_io_errors() {
    let error = Instance::from_file(locate("no_such_file.json")).unwrap_err();
    assert!(matches!(error, Error::Io(_)));
}

// ----------------------------------------------------------------------------
// --- OPTIMALITY -------------------------------------------------------------
// ----------------------------------------------------------------------------
#[test]
fn exhaustive_best_first_is_optimal_with_conflicts() {
    let mut rng = StdRng::seed_from_u64(2023);
    for _ in 0..60 {
        let nb_items = rng.random_range(0..=6);
        let instance = random_instance(&mut rng, nb_items, true);
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = EmptyDominanceChecker::<Node>::default();

        let output = BestFirstSearch::new(&scheme, &dominance, &NoCutoff, 1).search();
        let selection = scheme.to_solution(output.solution_pool.best());
        assert!(output.is_exact);
        assert_eq!(brute_force(&instance), objective(&instance, &selection));
    }
}

#[test]
fn exhaustive_beam_search_is_optimal_with_conflicts() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..40 {
        let nb_items = rng.random_range(0..=6);
        let instance = random_instance(&mut rng, nb_items, true);
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = EmptyDominanceChecker::<Node>::default();
        let parameters = SearchParameters::default();

        let output = IterativeBeamSearch::new(&scheme, &dominance, &NoCutoff, &parameters).search();
        let selection = scheme.to_solution(output.solution_pool.best());
        assert!(output.is_exact);
        assert_eq!(brute_force(&instance), objective(&instance, &selection));
    }
}

#[test]
fn pruning_by_dominance_is_never_reported_as_a_proof() {
    // {0} dominates {1} in their bucket, yet {1, 3} is the only optimum
    let instance = InstanceBuilder::new(10)
        .item(1, 0, 5)
        .item(1, 6, 10)
        .item(1, 0, 95)
        .item(1, 6, 100)
        .conflict(0, 1)
        .conflict(2, 3)
        .build()
        .unwrap();
    let scheme = KnapsackWithWidthBranching::new(&instance);
    let parameters = SearchParameters::default();
    assert_eq!(104, brute_force(&instance));

    for output in [best_first_search(&scheme, &parameters), iterative_beam_search(&scheme, &parameters)] {
        let selection = scheme.to_solution(output.solution_pool.best());
        let found = objective(&instance, &selection);
        assert!(!output.is_exact || found == 104);
        assert!(found <= 104);
    }

    let dominance = EmptyDominanceChecker::<Node>::default();
    let output = BestFirstSearch::new(&scheme, &dominance, &NoCutoff, 1).search();
    let mut selection = scheme.to_solution(output.solution_pool.best());
    selection.sort_unstable();
    assert!(output.is_exact);
    assert_eq!(vec![1, 3], selection);
    assert_eq!(104, objective(&instance, &selection));
}

#[test]
fn shorthands_only_claim_optimality_when_it_holds() {
    let mut rng = StdRng::seed_from_u64(404);
    for _ in 0..60 {
        let nb_items = rng.random_range(0..=7);
        let instance = random_instance(&mut rng, nb_items, true);
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let parameters = SearchParameters::default();
        let optimum = brute_force(&instance);

        for output in [best_first_search(&scheme, &parameters), iterative_beam_search(&scheme, &parameters)] {
            let selection = scheme.to_solution(output.solution_pool.best());
            let found = objective(&instance, &selection);
            assert!(found <= optimum);
            assert!(!output.is_exact || found == optimum);
        }
    }
}

#[test]
fn dp_and_tree_search_agree_without_conflicts() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..40 {
        let nb_items = rng.random_range(0..=6);
        let instance = random_instance(&mut rng, nb_items, false);
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let dominance = EmptyDominanceChecker::<Node>::default();

        let output = BestFirstSearch::new(&scheme, &dominance, &NoCutoff, 1).search();
        let searched = scheme.to_solution(output.solution_pool.best());
        let programmed = dynamic_programming(&instance).unwrap();
        assert_eq!(objective(&instance, &programmed), objective(&instance, &searched));
    }
}

// ----------------------------------------------------------------------------
// --- HEURISTIC RUNS ---------------------------------------------------------
// ----------------------------------------------------------------------------
#[test]
fn every_driver_returns_a_feasible_selection() {
    let mut rng = StdRng::seed_from_u64(8);
    for nb_items in [0, 1, 5, 20, 40] {
        let instance = generate(nb_items, &mut rng).unwrap();
        let scheme = KnapsackWithWidthBranching::new(&instance);
        let parameters = SearchParametersBuilder::default()
            .time_limit(Duration::from_secs(5))
            .maximum_beam_width(32)
            .build()
            .unwrap();

        for output in [greedy(&scheme, &parameters), iterative_beam_search(&scheme, &parameters)] {
            let selection = scheme.to_solution(output.solution_pool.best());
            let evaluation = instance.evaluate(&selection).unwrap();
            assert!(evaluation.is_feasible());
            assert_eq!(evaluation.objective(), output.solution_pool.best().value().max(0));
        }
    }
}

#[test]
fn time_limited_search_returns_its_incumbent() {
    let mut rng = StdRng::seed_from_u64(1);
    let instance = generate(100, &mut rng).unwrap();
    let scheme = KnapsackWithWidthBranching::new(&instance);
    let parameters = SearchParametersBuilder::default()
        .time_limit(Duration::from_millis(200))
        .build()
        .unwrap();

    let output = best_first_search(&scheme, &parameters);
    assert!(!output.is_exact);
    assert!(matches!(output.reason, None | Some(Reason::CutoffOccurred)));
    let selection = scheme.to_solution(output.solution_pool.best());
    assert!(instance.evaluate(&selection).unwrap().is_feasible());
}

#[test]
fn solution_pool_is_sorted_best_first() {
    let mut rng = StdRng::seed_from_u64(12);
    let instance = generate(10, &mut rng).unwrap();
    let scheme = KnapsackWithWidthBranching::new(&instance);
    let parameters = SearchParametersBuilder::default()
        .solution_pool_size(5)
        .maximum_beam_width(8)
        .build()
        .unwrap();

    let output = iterative_beam_search(&scheme, &parameters);
    let pool = output.solution_pool.nodes();
    assert!(pool.len() <= 5);
    for pair in pool.windows(2) {
        assert!(!scheme.better(&pair[1], &pair[0]));
    }
}

// ----------------------------------------------------------------------------
// --- FILES ------------------------------------------------------------------
// ----------------------------------------------------------------------------
#[test]
fn generated_instances_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for nb_items in [0, 2, 15] {
        let instance = generate(nb_items, &mut rng).unwrap();
        let fname = dir.path().join(format!("instance_{nb_items}.json"));
        instance.write(&fname).unwrap();
        assert_eq!(instance, Instance::from_file(&fname).unwrap());
    }
}

#[test]
fn certificates_can_be_checked_after_a_run() {
    let dir = tempfile::tempdir().unwrap();
    let instance = instance("scenario_2.json");
    let scheme = KnapsackWithWidthBranching::new(&instance);
    let output = best_first_search(&scheme, &SearchParameters::default());

    let fname = dir.path().join("certificate.json");
    Certificate::new(scheme.to_solution(output.solution_pool.best())).write(&fname).unwrap();

    let certificate = Certificate::from_file(&fname).unwrap();
    let evaluation = instance.evaluate(&certificate.items).unwrap();
    assert!(evaluation.is_feasible());
    assert_eq!(Some(0), evaluation.nb_conflicts);
    assert_eq!(7, evaluation.objective());
}
