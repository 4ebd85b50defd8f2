use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{Coordinate, Fleet, FLEET_SIZE, TOTAL_SHIP_SQUARES};

fn orthogonally_adjacent(a: Coordinate, b: Coordinate) -> bool {
    (a.row() == b.row() && a.col().abs_diff(b.col()) == 1)
        || (a.col() == b.col() && a.row().abs_diff(b.row()) == 1)
}

fn diagonally_adjacent(a: Coordinate, b: Coordinate) -> bool {
    a.row().abs_diff(b.row()) == 1 && a.col().abs_diff(b.col()) == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_fleets_are_legal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        prop_assert_eq!(fleet.ships().len(), FLEET_SIZE);

        let squares: Vec<Coordinate> = fleet
            .ships()
            .iter()
            .flat_map(|ship| ship.squares())
            .collect();
        prop_assert_eq!(squares.len(), TOTAL_SHIP_SQUARES);
        for (i, a) in squares.iter().enumerate() {
            for b in &squares[i + 1..] {
                prop_assert_ne!(a, b, "two ships share {}", a);
            }
        }

        for (i, first) in fleet.ships().iter().enumerate() {
            for second in &fleet.ships()[i + 1..] {
                for a in first.squares() {
                    for b in second.squares() {
                        prop_assert!(
                            !orthogonally_adjacent(a, b),
                            "{} ({}) touches {} ({})",
                            first.ship_type(), a, second.ship_type(), b
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_diagonal_contact_appears_across_seeds() {
    let mut seen = false;
    'seeds: for seed in 0..1000u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        for (i, first) in fleet.ships().iter().enumerate() {
            for second in &fleet.ships()[i + 1..] {
                for a in first.squares() {
                    for b in second.squares() {
                        if diagonally_adjacent(a, b) {
                            seen = true;
                            break 'seeds;
                        }
                    }
                }
            }
        }
    }
    assert!(seen, "no diagonal contact in 1000 generated fleets");
}
