//! Integration tests for the MT19937 engine and its unit-interval adapters.
//!
//! These pin the engine to the reference output streams so generated data
//! stays reproducible across releases.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "reference bounds are computed in floating point"
)]

use faker_core::{
    MersenneTwister19937, Mersenne32Randomizer, Mersenne53Randomizer, Randomizer, SeedValue,
    f32_from_u32, f53_from_u32_pair, random_seed,
};
use rstest::rstest;

/// Reference output 10,000 for the default seed 5489.
const DEFAULT_SEED_10000TH: u32 = 4_123_659_995;

#[test]
fn default_seed_matches_reference_stream() {
    let mut engine = MersenneTwister19937::with_seed(5489);
    let head: Vec<u32> = (0..5).map(|_| engine.next_u32()).collect();
    assert_eq!(
        head,
        [3_499_211_612, 581_869_302, 3_890_346_734, 3_586_334_585, 545_404_204]
    );

    let tenth_thousand = (5..10_000)
        .map(|_| engine.next_u32())
        .last()
        .expect("draws were made");
    assert_eq!(tenth_thousand, DEFAULT_SEED_10000TH);
}

#[test]
fn vector_seed_matches_reference_stream() {
    let mut engine =
        MersenneTwister19937::with_seed_vector(&[0x123, 0x234, 0x345, 0x456]).expect("seed");
    let head: Vec<u32> = (0..5).map(|_| engine.next_u32()).collect();
    assert_eq!(
        head,
        [1_067_595_299, 955_945_823, 477_289_528, 4_107_218_783, 4_228_976_476]
    );
}

#[rstest]
#[case(0)]
#[case(42)]
#[case(u32::MAX)]
fn ten_thousand_draws_are_identical_for_one_seed(#[case] seed: u32) {
    let mut first = MersenneTwister19937::with_seed(seed);
    let mut second = MersenneTwister19937::with_seed(seed);
    for _ in 0..10_000 {
        assert_eq!(first.next_u32(), second.next_u32());
    }
}

#[test]
fn seed_producing_zero_maps_to_zero() {
    let mut engine = MersenneTwister19937::with_seed(257_678_572);
    let sixth = (0..6)
        .map(|_| engine.next_u32())
        .last()
        .expect("draws were made");
    assert_eq!(sixth, 0);
    assert_eq!(f32_from_u32(sixth), 0.0);
}

#[test]
fn seed_producing_max_stays_below_one() {
    let mut engine = MersenneTwister19937::with_seed(2_855_577_693);
    let first = engine.next_u32();
    assert_eq!(first, u32::MAX);
    assert_eq!(f32_from_u32(first), f64::from(u32::MAX) / 4_294_967_296.0);
    assert!(f32_from_u32(first) < 1.0);
}

#[test]
fn maximal_53_bit_draw_stays_below_one() {
    let largest = f53_from_u32_pair(u32::MAX, u32::MAX);
    assert_eq!(largest, 1.0 - f64::EPSILON / 2.0);
    assert!(largest < 1.0);
}

/// Which unit-interval adapter a case exercises.
#[derive(Debug, Clone, Copy)]
enum Adapter {
    ThirtyTwoBit,
    FiftyThreeBit,
}

impl Adapter {
    fn build(self) -> Box<dyn Randomizer> {
        match self {
            Self::ThirtyTwoBit => Box::new(Mersenne32Randomizer::new()),
            Self::FiftyThreeBit => Box::new(Mersenne53Randomizer::new()),
        }
    }
}

/// How a case derives a fresh seed from entropy.
#[derive(Debug, Clone, Copy)]
enum SeedShape {
    Scalar,
    Pair,
    Padded,
}

impl SeedShape {
    fn draw(self) -> SeedValue {
        match self {
            Self::Scalar => SeedValue::Scalar(random_seed()),
            Self::Pair => SeedValue::Vector(vec![random_seed(), random_seed()]),
            Self::Padded => SeedValue::Vector(vec![random_seed(), 1, 2]),
        }
    }
}

#[rstest]
#[case::scalar_42(SeedValue::Scalar(42), 0.374_540_114_309_638_74, 0.374_540_118_847_362_5)]
#[case::scalar_1337(SeedValue::Scalar(1337), 0.262_024_676_194_414_5, 0.262_024_675_015_581_7)]
#[case::scalar_1211(SeedValue::Scalar(1211), 0.928_520_153_742_283_6, 0.928_520_153_902_584_2)]
#[case::vector_42(
    SeedValue::Vector(vec![42, 1, 2]),
    0.856_203_743_489_459_2,
    0.856_203_747_794_729_6
)]
#[case::vector_1337(
    SeedValue::Vector(vec![1337, 1, 2]),
    0.179_904_872_085_899_11,
    0.179_904_872_240_608_36
)]
#[case::vector_1211(
    SeedValue::Vector(vec![1211, 1, 2]),
    0.891_643_328_359_350_6,
    0.891_643_327_980_196_9
)]
fn adapters_return_reference_values_for_seeded_runs(
    #[case] seed: SeedValue,
    #[case] thirty_two_bit: f64,
    #[case] fifty_three_bit: f64,
) {
    let mut narrow = Adapter::ThirtyTwoBit.build();
    let mut wide = Adapter::FiftyThreeBit.build();
    narrow.seed(&seed).expect("seed");
    wide.seed(&seed).expect("seed");

    assert_eq!(narrow.next(), thirty_two_bit);
    assert_eq!(wide.next(), fifty_three_bit);
}

#[rstest]
fn adapters_stay_in_unit_interval_across_seeds(
    #[values(Adapter::ThirtyTwoBit, Adapter::FiftyThreeBit)] adapter: Adapter,
    #[values(SeedShape::Scalar, SeedShape::Pair, SeedShape::Padded)] shape: SeedShape,
) {
    let mut randomizer = adapter.build();
    for _ in 0..64 {
        let seed = shape.draw();
        randomizer.seed(&seed).expect("seed");
        for _ in 0..500 {
            let value = randomizer.next();
            assert!(
                (0.0..1.0).contains(&value),
                "{value} outside [0, 1) for seed {seed}"
            );
        }
    }
}

#[rstest]
fn adapters_spread_draws_across_the_interval() {
    let mut randomizer = Mersenne53Randomizer::with_seed(5489);
    let mut buckets = [0_u32; 10];
    for _ in 0..10_000 {
        let value = randomizer.next();
        let bucket = (0..10_u32)
            .rev()
            .find(|edge| value >= f64::from(*edge) / 10.0)
            .expect("value is non-negative");
        if let Some(count) = buckets.get_mut(usize::try_from(bucket).expect("small index")) {
            *count += 1;
        }
    }
    assert!(
        buckets.iter().all(|count| (800..1_200).contains(count)),
        "uneven buckets: {buckets:?}"
    );
}

#[test]
fn thirty_two_bit_adapter_follows_engine_outputs() {
    let mut engine = MersenneTwister19937::with_seed(1337);
    let mut randomizer = Mersenne32Randomizer::with_seed(1337);
    for _ in 0..100 {
        assert_eq!(randomizer.next(), f32_from_u32(engine.next_u32()));
    }
}

#[test]
fn fifty_three_bit_adapter_consumes_two_outputs_per_draw() {
    let mut engine = MersenneTwister19937::with_seed(1337);
    let mut randomizer = Mersenne53Randomizer::with_seed(1337);
    for _ in 0..100 {
        let high = engine.next_u32();
        let low = engine.next_u32();
        assert_eq!(randomizer.next(), f53_from_u32_pair(high, low));
    }
}
