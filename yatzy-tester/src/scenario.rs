//! Scripted scoresheet scenarios.
//!
//! Each scenario drives a fresh [`ScoreStore`] with input drawn from a seeded
//! RNG and checks the derived totals against an independent recomputation.

use anyhow::{Context, Result, ensure};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use yatzy_core::{Category, DerivedScores, ScoreStore, ScoringRules, Snapshot};

pub type ScenarioFn = fn(&mut ChaCha20Rng) -> Result<()>;

#[derive(Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    run: ScenarioFn,
}

impl Scenario {
    const fn new(key: &'static str, name: &'static str, run: ScenarioFn) -> Self {
        Self { key, name, run }
    }

    /// Run one iteration with an RNG seeded from `seed`.
    pub fn run(&self, seed: u64) -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        (self.run)(&mut rng)
    }
}

const CATALOG: &[Scenario] = &[
    Scenario::new("smoke", "Two-Player Smoke Test", smoke),
    Scenario::new("bonus-boundary", "Upper Bonus Threshold", bonus_boundary),
    Scenario::new(
        "order-independence",
        "Edit Order Independence",
        order_independence,
    ),
    Scenario::new("reset-isolation", "Player Reset Isolation", reset_isolation),
    Scenario::new("snapshot-reload", "Snapshot Round Trip", snapshot_reload),
    Scenario::new("input-policy", "Cell Input Policy", input_policy),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.name)).collect()
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    CATALOG.iter().find(|s| s.key == key).cloned()
}

pub fn all_keys() -> Vec<String> {
    CATALOG.iter().map(|s| s.key.to_string()).collect()
}

/// A plausible final card: upper cells as face multiples, lower cells within
/// their maximum, some of everything struck.
fn random_card(rng: &mut ChaCha20Rng) -> Vec<(Category, String)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let raw = if rng.gen_bool(0.1) {
                "-".to_string()
            } else if let Some(face) = category.face() {
                (u16::from(face) * rng.gen_range(0..=5)).to_string()
            } else {
                rng.gen_range(0..=category.max_score()).to_string()
            };
            (category, raw)
        })
        .collect()
}

fn points(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

fn expected_totals(card: &[(Category, String)], rules: &ScoringRules) -> (u32, u32, u32) {
    let upper: u32 = card
        .iter()
        .filter(|(c, _)| c.is_upper())
        .map(|(_, raw)| points(raw))
        .sum();
    let all: u32 = card.iter().map(|(_, raw)| points(raw)).sum();
    let bonus = if upper >= u32::from(rules.bonus_threshold) {
        u32::from(rules.bonus_points)
    } else {
        0
    };
    (upper, bonus, all + bonus)
}

fn fill(store: &mut ScoreStore, name: &str, edits: &[(Category, String)]) -> Result<DerivedScores> {
    let player = store.player_id(name)?;
    for (category, raw) in edits {
        store
            .set_cell(player, *category, raw)
            .with_context(|| format!("{name}: {category} <- {raw:?}"))?;
    }
    Ok(store.derived(player)?)
}

fn check_totals(derived: &DerivedScores, card: &[(Category, String)]) -> Result<()> {
    let (upper, bonus, total) = expected_totals(card, &ScoringRules::default_config());
    ensure!(
        derived.upper_total.value() == Some(upper),
        "upper total {:?}, expected {upper}",
        derived.upper_total
    );
    ensure!(
        derived.bonus.value() == Some(bonus),
        "bonus {:?}, expected {bonus}",
        derived.bonus
    );
    ensure!(
        derived.game_total.value() == Some(total),
        "game total {:?}, expected {total}",
        derived.game_total
    );
    Ok(())
}

fn smoke(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut store = ScoreStore::initialize(["Alice", "Bob"])?;
    let card = random_card(rng);
    let (last, head) = card
        .split_last()
        .context("card has no categories")?;

    let partial = fill(&mut store, "Alice", head)?;
    ensure!(partial.is_hidden(), "totals shown before the card is complete");

    let complete = fill(&mut store, "Alice", std::slice::from_ref(last))?;
    check_totals(&complete, &card)?;

    let bob = store.player_id("Bob")?;
    ensure!(store.derived(bob)?.is_hidden(), "untouched player shows totals");
    ensure!(!store.is_finished(), "game finished with an empty card");
    Ok(())
}

fn bonus_boundary(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut store = ScoreStore::initialize(["Edge"])?;
    let mut card: Vec<(Category, String)> = Category::ALL
        .into_iter()
        .map(|category| (category, "-".to_string()))
        .collect();

    // Par everywhere except one face, which lands one die short or on par.
    let short = *Category::UPPER.choose(rng).context("no upper categories")?;
    for (category, raw) in &mut card {
        if let Some(face) = category.face() {
            let dice = if *category == short { 2 } else { 3 };
            *raw = (u16::from(face) * dice).to_string();
        }
    }
    let below = fill(&mut store, "Edge", &card)?;
    check_totals(&below, &card)?;
    ensure!(below.bonus.value() == Some(0), "bonus awarded below par");

    let par = short.face().map_or(0, |face| u16::from(face) * 3);
    let patch = [(short, par.to_string())];
    let at_par = fill(&mut store, "Edge", &patch)?;
    ensure!(
        at_par.upper_total.value() == Some(63),
        "par card totals {:?}",
        at_par.upper_total
    );
    ensure!(at_par.bonus.value() == Some(50), "bonus missing at par");
    Ok(())
}

fn order_independence(rng: &mut ChaCha20Rng) -> Result<()> {
    let card = random_card(rng);
    let mut reference = ScoreStore::initialize(["Solo"])?;
    let expected = fill(&mut reference, "Solo", &card)?;
    check_totals(&expected, &card)?;

    let mut shuffled = card.clone();
    shuffled.shuffle(rng);
    let mut detour: Vec<(Category, String)> = shuffled
        .iter()
        .map(|(category, _)| (*category, String::new()))
        .collect();
    detour.extend(shuffled);

    let mut replay = ScoreStore::initialize(["Solo"])?;
    let actual = fill(&mut replay, "Solo", &detour)?;
    ensure!(actual == expected, "{actual:?} != {expected:?}");
    Ok(())
}

fn reset_isolation(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut store = ScoreStore::initialize(["Alice", "Bob"])?;
    let alice_card = random_card(rng);
    let bob_card = random_card(rng);
    fill(&mut store, "Alice", &alice_card)?;
    let bob_before = fill(&mut store, "Bob", &bob_card)?;
    ensure!(store.is_finished(), "both cards complete but game not finished");

    let alice = store.player_id("Alice")?;
    let bob = store.player_id("Bob")?;
    store.reset_player(alice)?;

    let alice_record = store.player(alice)?;
    ensure!(alice_record.card().is_empty(), "reset left values behind");
    ensure!(alice_record.derived().is_hidden(), "reset card shows totals");
    ensure!(store.derived(bob)? == bob_before, "reset touched another player");
    ensure!(!store.is_finished(), "game finished after a reset");
    Ok(())
}

fn snapshot_reload(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut store = ScoreStore::initialize(["Alice", "Bob", "Cleo"])?;
    for name in ["Alice", "Bob", "Cleo"] {
        let mut card = random_card(rng);
        let keep = rng.gen_range(0..=card.len());
        card.truncate(keep);
        fill(&mut store, name, &card)?;
    }

    let json = store.snapshot().to_json()?;
    let snapshot = Snapshot::from_json(&json)?;
    let mut restored = ScoreStore::initialize(["Placeholder"])?;
    restored.load_state(&snapshot)?;
    ensure!(restored == store, "restored sheet differs from the original");
    Ok(())
}

fn input_policy(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut store = ScoreStore::initialize(["Alice"])?;
    let alice = store.player_id("Alice")?;
    let category = *Category::ALL.choose(rng).context("no categories")?;
    let max = category.max_score();

    let accepted = rng.gen_range(1..=max);
    store.set_cell(alice, category, &format!("  {accepted} "))?;
    ensure!(store.get_cell(alice, category)? == Some(accepted), "trimmed input lost");

    let before = store.clone();
    let over = max + rng.gen_range(1..=50);
    let rejected = [
        format!("{accepted}x"),
        format!("-{accepted}"),
        over.to_string(),
        "1.5".to_string(),
        "--".to_string(),
    ];
    for raw in &rejected {
        let result = store.set_cell(alice, category, raw);
        ensure!(
            matches!(&result, Err(err) if err.is_rejected_input()),
            "{raw:?} was not rejected: {result:?}"
        );
        ensure!(store == before, "{raw:?} changed the sheet");
    }

    store.set_cell(alice, category, "-")?;
    ensure!(store.get_cell(alice, category)? == Some(0), "strike mark is not zero");
    store.set_cell(alice, category, "   ")?;
    ensure!(store.get_cell(alice, category)?.is_none(), "blank did not clear");
    Ok(())
}
