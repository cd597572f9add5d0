//! End-to-end replay of a seeded multi-bracket draw.
//!
//! The expected winners were derived independently from the HMAC-SHA256
//! counter stream keyed with `a1` x 32; any change to byte consumption,
//! rejection sampling or the cumulative walk shows up here.

use tide_random::SeededRandom;
use tide_selection::select_all;
use tide_types::{Bracket, Entry};

fn leaderboard() -> Vec<Entry> {
    (1..=12u32)
        .map(|rank| Entry::new(format!("0x{rank:02x}"), u64::from(rank) * 1000 + 7, rank))
        .collect()
}

fn brackets() -> Vec<Bracket> {
    vec![
        Bracket::bounded("Ranks 1-4", 1, 4, 2),
        Bracket::bounded("Ranks 5-8", 5, 8, 2),
        Bracket::open_ended("Ranks 9+", 9, 3),
    ]
}

fn draw(brackets: &[Bracket]) -> Vec<(String, String, u32, f64)> {
    let mut source = SeededRandom::from_hex(&"a1".repeat(32)).unwrap();
    select_all(&leaderboard(), brackets, &mut source)
        .unwrap()
        .into_iter()
        .map(|w| (w.bracket, w.address, w.rank, w.probability_percent))
        .collect()
}

fn assert_draw(actual: &[(String, String, u32, f64)], expected: &[(&str, &str, u32, f64)]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a.0, e.0);
        assert_eq!(a.1, e.1);
        assert_eq!(a.2, e.2);
        assert!((a.3 - e.3).abs() < 1e-9, "{} probability {} != {}", a.1, a.3, e.3);
    }
}

#[test]
fn seeded_draw_matches_reference() {
    assert_draw(
        &draw(&brackets()),
        &[
            ("Ranks 1-4", "0x04", 4, 39.958117),
            ("Ranks 1-4", "0x02", 2, 33.333333),
            ("Ranks 5-8", "0x06", 6, 23.078991),
            ("Ranks 5-8", "0x08", 8, 39.993007),
            ("Ranks 9+", "0x0b", 11, 26.189683),
            ("Ranks 9+", "0x09", 9, 29.035169),
            ("Ranks 9+", "0x0c", 12, 54.542563),
        ],
    );
}

#[test]
fn bracket_order_is_part_of_the_outcome() {
    let reversed: Vec<Bracket> = brackets().into_iter().rev().collect();
    assert_draw(
        &draw(&reversed),
        &[
            ("Ranks 9+", "0x0b", 11, 26.189683),
            ("Ranks 9+", "0x0a", 10, 32.258792),
            ("Ranks 9+", "0x0c", 12, 57.138098),
            ("Ranks 5-8", "0x08", 8, 30.763024),
            ("Ranks 5-8", "0x06", 6, 33.333333),
            ("Ranks 1-4", "0x02", 2, 20.01396),
            ("Ranks 1-4", "0x04", 4, 49.956364),
        ],
    );
}

#[test]
fn replaying_the_same_seed_is_identical() {
    assert_eq!(draw(&brackets()), draw(&brackets()));
}
