//! Behavioural tests for the seeded faker facade.
//!
//! These scenarios cover reseeding determinism and layered locale
//! resolution against the bundled fixture locales.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::path::PathBuf;

use cap_std::{ambient_authority, fs::Dir};
use faker_core::{Faker, LocalePath, LocaleStack, LocaleValue, ResolveError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the locale stack and the observed draws.
#[derive(Default, ScenarioState)]
struct World {
    stack: Slot<LocaleStack>,
    first_draws: Slot<Vec<f64>>,
    second_draws: Slot<Vec<f64>>,
    reseed_value: Slot<u32>,
    resolved: Slot<Result<LocaleValue, ResolveError>>,
}

impl World {
    fn faker(&self) -> Faker {
        Faker::new(self.stack.get().expect("locale stack should be set"))
    }

    fn resolved(&self) -> Result<LocaleValue, ResolveError> {
        self.resolved.get().expect("a definition should be resolved")
    }
}

fn fixture_dir() -> Dir {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("locales");
    Dir::open_ambient_dir(path, ambient_authority()).expect("fixture directory")
}

fn draws(faker: &mut Faker, count: usize) -> Vec<f64> {
    (0..count).map(|_| faker.randomizer().next()).collect()
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a faker over the locales \"{codes}\"")]
fn a_faker_over_the_locales(world: &World, codes: String) {
    let chain: Vec<&str> = codes.split(',').map(str::trim).collect();
    let stack = LocaleStack::from_dir(&fixture_dir(), &chain).expect("fixtures load");
    world.stack.set(stack);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the faker is seeded with {seed:u32} and draws {count:usize} values twice")]
fn the_faker_is_seeded_and_draws_twice(world: &World, seed: u32, count: usize) {
    let mut faker = world.faker();

    faker.seed(seed).expect("seed");
    world.first_draws.set(draws(&mut faker, count));
    faker.seed(seed).expect("seed");
    world.second_draws.set(draws(&mut faker, count));
}

#[when("the faker is seeded with {seed:u32}, draws once, and is reseeded with {again:u32}")]
fn the_faker_is_reseeded_mid_stream(world: &World, seed: u32, again: u32) {
    let mut faker = world.faker();

    faker.seed(seed).expect("seed");
    world.first_draws.set(draws(&mut faker, 1));
    faker.seed(again).expect("reseed");
    world.second_draws.set(draws(&mut faker, 1));
    world.reseed_value.set(again);
}

#[when("the definition \"{path}\" is resolved")]
fn the_definition_is_resolved(world: &World, path: String) {
    let faker = world.faker();
    let locale_path = LocalePath::parse(&path).expect("valid path");
    world.resolved.set(faker.resolve(&locale_path).cloned());
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both draw sequences are identical")]
fn both_draw_sequences_are_identical(world: &World) {
    let first = world.first_draws.get().expect("first draws");
    let second = world.second_draws.get().expect("second draws");
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[then("the next draw matches a fresh faker seeded with {seed:u32}")]
fn the_next_draw_matches_a_fresh_faker(world: &World, seed: u32) {
    assert_eq!(world.reseed_value.get(), Some(seed));

    let mut fresh = world.faker();
    fresh.seed(seed).expect("seed");
    let expected = draws(&mut fresh, 1);

    assert_eq!(world.second_draws.get().expect("reseeded draw"), expected);
}

#[then("the resolved value is a list starting with \"{first}\" and ending with \"{last}\"")]
fn the_resolved_value_is_a_list(world: &World, first: String, last: String) {
    let value = world.resolved().expect("resolved");
    let items = value.as_list().expect("a list");
    assert_eq!(items.first(), Some(&first));
    assert_eq!(items.last(), Some(&last));
}

#[then("the resolved value is the text \"{text}\"")]
fn the_resolved_value_is_the_text(world: &World, text: String) {
    let value = world.resolved().expect("resolved");
    assert_eq!(value.as_text(), Some(text.as_str()));
}

#[then("resolution fails because the data are missing")]
fn resolution_fails_because_missing(world: &World) {
    let result = world.resolved();
    assert!(
        matches!(result, Err(ResolveError::MissingData { .. })),
        "expected missing data, got {result:?}"
    );
}

#[then("resolution fails because the data are not applicable to \"{locale}\"")]
fn resolution_fails_because_not_applicable(world: &World, locale: String) {
    match world.resolved() {
        Err(ResolveError::NotApplicable { locale: found, .. }) => assert_eq!(found, locale),
        other => panic!("expected not applicable, got {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/faker_seeding.feature",
    name = "Reseeding repeats the same draws"
)]
fn reseeding_repeats_the_same_draws(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker_seeding.feature",
    name = "Reseeding mid-stream restarts the stream"
)]
fn reseeding_mid_stream_restarts_the_stream(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker_seeding.feature",
    name = "The most specific layer wins"
)]
fn the_most_specific_layer_wins(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker_seeding.feature",
    name = "Missing fields fall back to the base layer"
)]
fn missing_fields_fall_back_to_the_base_layer(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker_seeding.feature",
    name = "Data missing from every layer is an error"
)]
fn data_missing_from_every_layer_is_an_error(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker_seeding.feature",
    name = "Not applicable data block fallback"
)]
fn not_applicable_data_block_fallback(world: World) {
    let _ = world;
}
