use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use yatzy_core::{Category, DerivedScores, ScoreStore, ScoringRules, derive, is_complete};

const SEEDS: [u64; 4] = [1, 42, 0xC0FF_EE00, 0xDEAD_BEEF];

fn random_final_card(rng: &mut ChaCha20Rng) -> Vec<(Category, String)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let raw = if rng.gen_bool(0.15) {
                "-".to_string()
            } else {
                rng.gen_range(0..=category.max_score()).to_string()
            };
            (category, raw)
        })
        .collect()
}

fn play(edits: &[(Category, String)]) -> DerivedScores {
    let mut store = ScoreStore::initialize(["Solo"]).unwrap();
    let solo = store.player_id("Solo").unwrap();
    for (category, raw) in edits {
        store.set_cell(solo, *category, raw).unwrap();
    }
    store.derived(solo).unwrap()
}

#[test]
fn edit_order_does_not_change_totals() {
    for seed in SEEDS {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let final_card = random_final_card(&mut rng);
        let reference = play(&final_card);
        assert!(!reference.is_hidden());

        for _ in 0..16 {
            let mut shuffled = final_card.clone();
            shuffled.shuffle(&mut rng);
            assert_eq!(play(&shuffled), reference, "seed {seed}");
        }
    }
}

#[test]
fn detours_through_other_values_converge() {
    for seed in SEEDS {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let final_card = random_final_card(&mut rng);
        let reference = play(&final_card);

        let mut edits: Vec<(Category, String)> = Vec::new();
        for (category, raw) in &final_card {
            edits.push((*category, rng.gen_range(0..=category.max_score()).to_string()));
            edits.push((*category, String::new()));
            edits.push((*category, raw.clone()));
        }
        let mut tail = edits.split_off(edits.len() / 2);
        tail.shuffle(&mut rng);
        edits.extend(tail);

        let mut store = ScoreStore::initialize(["Solo"]).unwrap();
        let solo = store.player_id("Solo").unwrap();
        for (category, raw) in &edits {
            store.set_cell(solo, *category, raw).unwrap();
        }
        for (category, raw) in &final_card {
            store.set_cell(solo, *category, raw).unwrap();
        }
        assert_eq!(store.derived(solo).unwrap(), reference, "seed {seed}");
    }
}

#[test]
fn formulas_hold_for_random_complete_cards() {
    let rules = ScoringRules::default();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..200 {
        let final_card = random_final_card(&mut rng);
        let mut store = ScoreStore::initialize(["Solo"]).unwrap();
        let solo = store.player_id("Solo").unwrap();
        for (category, raw) in &final_card {
            store.set_cell(solo, *category, raw).unwrap();
        }
        let card = *store.player(solo).unwrap().card();
        assert!(is_complete(&card));

        let upper: u32 = Category::UPPER
            .iter()
            .filter_map(|c| card.get(*c))
            .map(u32::from)
            .sum();
        let all: u32 = Category::ALL
            .iter()
            .filter_map(|c| card.get(*c))
            .map(u32::from)
            .sum();
        let bonus = if upper >= 63 { 50 } else { 0 };

        let derived = derive(&card, &rules);
        assert_eq!(derived.upper_total.value(), Some(upper));
        assert_eq!(derived.bonus.value(), Some(bonus));
        assert_eq!(derived.game_total.value(), Some(all + bonus));
        assert_eq!(derive(&card, &rules), derived);
    }
}
