//! Invariant checks over many generated problems.

use mathmystery_common::equal_groups::grid_side;
use mathmystery_common::{
    generate, generate_with, steps, FactFamily, FactorSet, GroupLayout, Mode, Operation, Problem,
    ProblemStream, SeededRandom,
};

const DRAWS: usize = 2000;

fn all_factors() -> FactorSet {
    FactorSet::parse("0,1,2,3,4,5,6,7,8,9,10,11,12")
}

#[test]
fn test_multiply_answer_and_membership() {
    let factors = FactorSet::parse("0, 3, 7, 12");
    for _ in 0..DRAWS {
        let p = generate(&factors, Mode::Multiply);
        assert_eq!(p.op(), Operation::Multiply);
        assert_eq!(p.answer(), p.a() * p.b());
        assert!(factors.contains(p.a()));
        assert!(factors.contains(p.b()));
    }
}

#[test]
fn test_divide_invariants() {
    let factors = all_factors();
    for p in ProblemStream::new(factors.clone(), Mode::Divide, SeededRandom::new(3)).take(DRAWS) {
        let Problem::Divide(d) = p else {
            panic!("divide mode produced {:?}", p);
        };
        assert_eq!(d.dividend(), d.a() * d.b());
        assert_ne!(d.divisor(), 0);
        let from_operand = d.divisor() == d.a() || d.divisor() == d.b();
        let substituted = d.divisor() == 1 && (d.a() == 0 || d.b() == 0);
        assert!(from_operand || substituted, "divisor {} from {:?}", d.divisor(), d);
        assert_eq!(p.answer(), d.dividend() / d.divisor());
        assert!(factors.contains(d.a()) && factors.contains(d.b()));
    }
}

#[test]
fn test_multiply_steps_shape() {
    for p in ProblemStream::new(all_factors(), Mode::Multiply, SeededRandom::new(5)).take(DRAWS) {
        let s = steps(&p);
        assert_eq!(s.len(), p.b() as usize);
        if p.b() > 0 {
            assert_eq!(*s.last().unwrap(), p.a() * p.b());
        }
        if p.a() > 0 {
            assert!(s.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_divide_steps_shape() {
    for p in ProblemStream::new(all_factors(), Mode::Divide, SeededRandom::new(8)).take(DRAWS) {
        let Problem::Divide(d) = p else { unreachable!() };
        let s = steps(&p);
        assert_eq!(s.len(), (d.dividend() / d.divisor()).max(1) as usize);
        assert!(s.iter().all(|x| *x > 0 && x % d.divisor() == 0));
        assert!(s.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_layout_grid_side() {
    for p in ProblemStream::new(all_factors(), Mode::Mixed, SeededRandom::new(13)).take(DRAWS) {
        let layout = GroupLayout::derive(&p);
        assert!(layout.grid_side >= 1);
        assert_eq!(layout.grid_side, grid_side(layout.items_per_group));
        let side = layout.grid_side;
        assert!(side * side >= layout.items_per_group);
        assert!(side == 1 || (side - 1) * (side - 1) < layout.items_per_group);

        let grid = layout.arrangement();
        assert!(grid.columns <= 5);
        assert_eq!(grid.rows * grid.columns, layout.group_count + grid.placeholders);
    }
}

#[test]
fn test_fact_families_are_true() {
    let mut families = 0;
    for p in ProblemStream::new(all_factors(), Mode::Mixed, SeededRandom::new(21)).take(DRAWS) {
        match FactFamily::derive(&p) {
            Ok(family) => {
                families += 1;
                assert_eq!(family.facts().len(), 4);
                assert!(family.facts().iter().all(|f| f.holds()), "{:?}", family);
            }
            Err(_) => assert!(p.a() == 0 || p.b() == 0, "unexpected rejection of {:?}", p),
        }
    }
    assert!(families > DRAWS / 2);
}

#[test]
fn test_mixed_mode_roughly_even() {
    let factors = FactorSet::default();
    let mut rng = SeededRandom::new(99);
    let multiplies = (0..DRAWS)
        .filter(|_| generate_with(&factors, Mode::Mixed, &mut rng).op() == Operation::Multiply)
        .count();
    assert!(multiplies > DRAWS * 2 / 5 && multiplies < DRAWS * 3 / 5);
}
