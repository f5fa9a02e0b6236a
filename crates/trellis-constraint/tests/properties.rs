//! Property tests for the solver.

use proptest::prelude::*;
use trellis_constraint::{
    Constraint, ConstraintId, Relation, Solver, SolverConfig, Strength, Variable,
};

const VARS: usize = 4;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn checked_solver() -> (Solver, Vec<Variable>) {
    let mut solver = Solver::with_config(SolverConfig::default().with_assertions(true));
    let vars = (0..VARS).map(|i| solver.new_slot(format!("v{}", i))).collect();
    (solver, vars)
}

/// Whether a constraint holds on the solver's current values.
fn holds(solver: &Solver, constraint: &Constraint) -> bool {
    let value = constraint
        .expression
        .terms()
        .iter()
        .fold(constraint.expression.constant, |acc, term| {
            acc + term.coefficient * solver.value(term.variable)
        });
    match constraint.relation {
        Relation::Eq => value.abs() < 1e-6,
        Relation::GreaterEq => value > -1e-6,
        Relation::LessEq => value < 1e-6,
    }
}

#[derive(Debug, Clone)]
enum Op {
    Prefer { var: usize, value: f64, strength: f64 },
    AtLeast { var: usize, other: usize, gap: f64, strength: f64 },
    Remove { index: usize },
    Edit { var: usize, value: f64 },
    StopEdit { var: usize },
}

fn strength() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(Strength::WEAK.value()),
        Just(Strength::MEDIUM.value()),
        Just(Strength::STRONG.value()),
        1.0..1000.0f64,
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..VARS, -200.0..200.0f64, strength())
            .prop_map(|(var, value, strength)| Op::Prefer { var, value, strength }),
        (0..VARS, 0..VARS, -50.0..50.0f64, strength()).prop_map(|(var, other, gap, strength)| {
            Op::AtLeast { var, other, gap, strength }
        }),
        (0..16usize).prop_map(|index| Op::Remove { index }),
        (0..VARS, -300.0..300.0f64).prop_map(|(var, value)| Op::Edit { var, value }),
        (0..VARS).prop_map(|var| Op::StopEdit { var }),
    ]
}

/// Required constraints that all hold at a fixed target point, so any
/// subset of them is satisfiable and repeats are redundant.
#[derive(Debug, Clone)]
enum Required {
    Pin(usize),
    Gap(usize, usize),
    Sum(usize, usize),
    Floor(usize, f64),
}

fn required() -> impl Strategy<Value = Required> {
    prop_oneof![
        (0..VARS).prop_map(Required::Pin),
        (0..VARS, 0..VARS).prop_map(|(a, b)| Required::Gap(a, b)),
        (0..VARS, 0..VARS).prop_map(|(a, b)| Required::Sum(a, b)),
        (0..VARS, 0.0..50.0f64).prop_map(|(a, margin)| Required::Floor(a, margin)),
    ]
}

fn build_required(kind: &Required, vars: &[Variable], targets: &[f64]) -> Constraint {
    let strength = Strength::REQUIRED;
    match *kind {
        Required::Pin(a) => Constraint::equal(vars[a], targets[a], strength),
        Required::Gap(a, b) => {
            Constraint::equal(vars[a] - vars[b], targets[a] - targets[b], strength)
        }
        Required::Sum(a, b) => {
            Constraint::equal(vars[a] + vars[b], targets[a] + targets[b], strength)
        }
        Required::Floor(a, margin) => {
            Constraint::greater_eq(vars[a], targets[a] - margin, strength)
        }
    }
}

/// Weak preferences with strengths 1, 10, 100, 1000 so the optimum is unique.
fn add_preferences(solver: &mut Solver, vars: &[Variable], preferences: &[f64]) {
    let mut weight = 1.0;
    for (&var, &preference) in vars.iter().zip(preferences) {
        solver
            .add_constraint(Constraint::equal(var, preference, Strength::new(weight)))
            .unwrap();
        weight *= 10.0;
    }
}

proptest! {
    #[test]
    fn test_required_solution_is_order_independent(
        targets in prop::collection::vec(-100.0..100.0f64, VARS),
        order in Just((0..VARS * 2).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        init_tracing();

        // Pin every variable, half directly and half relative to its neighbour.
        let build = |solver: &mut Solver, vars: &[Variable], i: usize| {
            let constraint = if i < VARS {
                Constraint::equal(vars[i], targets[i], Strength::REQUIRED)
            } else {
                let a = i - VARS;
                let b = (a + 1) % VARS;
                Constraint::equal(vars[a] - vars[b], targets[a] - targets[b], Strength::REQUIRED)
            };
            solver.add_constraint(constraint).unwrap();
        };

        let (mut forward, vars) = checked_solver();
        for i in 0..VARS * 2 {
            build(&mut forward, &vars, i);
        }
        let (mut shuffled, shuffled_vars) = checked_solver();
        for &i in &order {
            build(&mut shuffled, &shuffled_vars, i);
        }

        for i in 0..VARS {
            let slot_value = shuffled.variable(shuffled_vars[i]).unwrap().value();
            prop_assert!((forward.value(vars[i]) - targets[i]).abs() < 1e-6);
            prop_assert!((shuffled.value(shuffled_vars[i]) - targets[i]).abs() < 1e-6);
            prop_assert!((slot_value - targets[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_removal_matches_fresh_solver(
        targets in prop::collection::vec(-100.0..100.0f64, VARS),
        preferences in prop::collection::vec(-100.0..100.0f64, VARS),
        kinds in prop::collection::vec(required(), 4..16),
        removed in prop::collection::vec(any::<bool>(), 16),
        order in Just((0..16).collect::<Vec<usize>>()).prop_shuffle(),
    ) {
        init_tracing();

        let (mut solver, vars) = checked_solver();
        add_preferences(&mut solver, &vars, &preferences);
        let ids: Vec<ConstraintId> = kinds
            .iter()
            .map(|kind| solver.add_constraint(build_required(kind, &vars, &targets)).unwrap())
            .collect();

        // Remove a subset in shuffled order.
        for &i in order.iter().filter(|&&i| i < kinds.len() && removed[i]) {
            solver.remove_constraint(ids[i]).unwrap();
        }

        let (mut fresh, fresh_vars) = checked_solver();
        add_preferences(&mut fresh, &fresh_vars, &preferences);
        for (i, kind) in kinds.iter().enumerate() {
            if !removed[i] {
                fresh.add_constraint(build_required(kind, &fresh_vars, &targets)).unwrap();
            }
        }

        for (i, &id) in ids.iter().enumerate() {
            prop_assert_eq!(solver.has_constraint(id), !removed[i]);
            if let Some(constraint) = solver.constraint(id) {
                prop_assert!(holds(&solver, constraint), "{:?} violated", kinds[i]);
            }
        }
        for i in 0..VARS {
            prop_assert!((solver.value(vars[i]) - fresh.value(fresh_vars[i])).abs() < 1e-6);
        }
        prop_assert!(solver.check_invariants().is_ok());
    }

    #[test]
    fn test_invariants_hold_under_random_operations(ops in prop::collection::vec(op(), 1..40)) {
        init_tracing();

        let (mut solver, vars) = checked_solver();
        for &v in &vars {
            solver.add_constraint(Constraint::greater_eq(v, -500.0, Strength::REQUIRED)).unwrap();
            solver.add_constraint(Constraint::less_eq(v, 500.0, Strength::REQUIRED)).unwrap();
        }

        let mut added: Vec<ConstraintId> = Vec::new();
        for op in ops {
            match op {
                Op::Prefer { var, value, strength } => {
                    let c = Constraint::equal(vars[var], value, Strength::new(strength));
                    added.push(solver.add_constraint(c).unwrap());
                }
                Op::AtLeast { var, other, gap, strength } => {
                    let strength = Strength::new(strength);
                    let c = Constraint::greater_eq(vars[var], vars[other] + gap, strength);
                    added.push(solver.add_constraint(c).unwrap());
                }
                Op::Remove { index } => {
                    if !added.is_empty() {
                        let id = added.remove(index % added.len());
                        solver.remove_constraint(id).unwrap();
                    }
                }
                Op::Edit { var, value } => {
                    if !solver.has_constraint_variable(vars[var]) {
                        solver.add_constraint_variable(vars[var]).unwrap();
                    }
                    solver.set_constraint_variable(vars[var], value).unwrap();
                }
                Op::StopEdit { var } => {
                    if solver.has_constraint_variable(vars[var]) {
                        solver.remove_constraint_variable(vars[var]).unwrap();
                    }
                }
            }

            prop_assert!(solver.check_invariants().is_ok());
            for &v in &vars {
                let value = solver.value(v);
                prop_assert!((-500.0 - 1e-6..=500.0 + 1e-6).contains(&value));
                prop_assert_eq!(solver.variable(v).unwrap().value(), value);
            }
        }
    }

    #[test]
    fn test_add_then_remove_restores_values(
        value in -100.0..100.0f64,
        preference in -100.0..100.0f64,
    ) {
        let (mut solver, vars) = checked_solver();
        let sum = Constraint::equal(vars[0] + vars[1], 50.0, Strength::REQUIRED);
        solver.add_constraint(sum).unwrap();
        solver.add_constraint(Constraint::equal(vars[0], preference, Strength::WEAK)).unwrap();
        let before = solver.value(vars[1]);

        let pin = Constraint::equal(vars[0], value, Strength::STRONG);
        let id = solver.add_constraint(pin).unwrap();
        prop_assert!((solver.value(vars[0]) - value).abs() < 1e-6);

        solver.remove_constraint(id).unwrap();
        prop_assert!((solver.value(vars[1]) - before).abs() < 1e-6);
    }
}
