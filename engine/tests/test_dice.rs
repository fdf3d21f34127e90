//! Tests for the dice primitives and the Dice value object

use dice_rng_core_rs::{Dice, RngError, RngManager, MAX_ROLL_EACH};
use proptest::prelude::*;

#[test]
fn test_reference_rolls_seed_42() {
    let mut rng = RngManager::new(42);
    let totals: Vec<i32> = (0..5).map(|_| rng.roll_total(3, 6).unwrap()).collect();
    assert_eq!(totals, vec![13, 5, 5, 11, 5]);
}

#[test]
fn test_reference_roll_each_seed_42() {
    let mut rng = RngManager::new(42);
    assert_eq!(rng.roll_each(4, 6).unwrap(), vec![5, 1, 1, 4]);
}

#[test]
fn test_roll_total_is_one_draw() {
    let mut a = RngManager::new(100);
    let mut b = RngManager::new(100);
    for _ in 0..500 {
        assert_eq!(a.roll_total(2, 10).unwrap(), b.next_int_range(2, 21).unwrap());
    }
}

#[test]
fn test_roll_each_is_count_draws() {
    let mut a = RngManager::new(100);
    let mut b = RngManager::new(100);

    let rolls = a.roll_each(5, 8).unwrap();
    let expected: Vec<i32> = (0..5).map(|_| b.next_int_range(1, 9).unwrap()).collect();
    assert_eq!(rolls, expected);
    assert_eq!(a, b);
}

#[test]
fn test_dice_forwards_to_generator() {
    let mut a = RngManager::new(7);
    let mut b = RngManager::new(7);
    let dice = Dice::new(4, 6);

    assert_eq!(dice.roll(&mut a).unwrap(), b.roll_total(4, 6).unwrap());
    assert_eq!(dice.roll_each(&mut a).unwrap(), b.roll_each(4, 6).unwrap());
}

#[test]
fn test_dice_invalid_arguments() {
    let mut rng = RngManager::new(7);
    for dice in [Dice::new(0, 6), Dice::new(3, 0), Dice::new(-2, 6)] {
        assert!(
            matches!(dice.roll(&mut rng), Err(RngError::InvalidArgument(_))),
            "{} should be rejected",
            dice
        );
        assert!(dice.roll_each(&mut rng).is_err());
    }
}

#[test]
fn test_roll_each_huge_count_rejected_without_drawing() {
    let mut rng = RngManager::new(7);
    let before = rng.clone();

    let err = Dice::new(1_000_000_000, 2).roll_each(&mut rng).unwrap_err();
    assert!(matches!(err, RngError::InvalidArgument(_)), "got {:?}", err);
    assert!(rng.roll_each(MAX_ROLL_EACH + 1, 6).is_err());
    assert_eq!(rng, before, "rejected rolls must not consume samples");

    // The total form has no per-die allocation and still accepts it
    assert!(Dice::new(1_000_000_000, 2).roll(&mut rng).is_ok());
}

#[test]
fn test_d20_covers_all_faces() {
    let mut rng = RngManager::new(20);
    let mut seen = [false; 20];
    for _ in 0..5_000 {
        seen[(rng.roll_total(1, 20).unwrap() - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

proptest! {
    #[test]
    fn prop_roll_within_bounds(seed in any::<i32>(), count in 1i32..50, sides in 1i32..100) {
        let mut rng = RngManager::new(seed);
        let dice = Dice::new(count, sides);
        for _ in 0..20 {
            let total = dice.roll(&mut rng).unwrap();
            prop_assert!(total >= count && total <= count * sides,
                "{} rolled {} outside [{}, {}]", dice, total, count, count * sides);
        }
    }

    #[test]
    fn prop_roll_each_faces_within_bounds(seed in any::<i32>(), count in 1i32..20, sides in 1i32..30) {
        let mut rng = RngManager::new(seed);
        let rolls = rng.roll_each(count, sides).unwrap();
        prop_assert_eq!(rolls.len(), count as usize);
        prop_assert!(rolls.iter().all(|r| (1..=sides).contains(r)));
    }
}
