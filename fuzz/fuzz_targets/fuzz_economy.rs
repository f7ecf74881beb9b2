#![no_main]

//! Economy fuzzer.
//!
//! Applies arbitrary sequences of economy operations and checks that the
//! stock stays consistent with the rules after each one:
//! - additions saturate instead of wrapping
//! - subtractions floor at zero
//! - a build spends exactly its cost or nothing

use std::sync::Arc;

use arbitrary::Arbitrary;
use citadel::{BuildCost, BuildCosts, GameResources, ResourceStock};
use libfuzzer_sys::fuzz_target;

/// Object ids the fuzzer builds, including one with no registered cost.
const IDS: [&str; 6] = [
    "object_house",
    "object_castle",
    "object_wall_wood",
    "object_cathedral",
    "object_market",
    "object_not_registered",
];

/// A fuzzer-generated economy operation.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzOp {
    /// Add resources.
    Add { stone: u32, wood: u32, iron: u32, gold: u32 },
    /// Subtract resources.
    Subtract { stone: u32, wood: u32, iron: u32, gold: u32 },
    /// Subtract a build cost unconditionally.
    SubtractCost { stone: u32, wood: u32, iron: u32 },
    /// Build an object by index into `IDS`.
    Build(u8),
    /// Empty the stock.
    Reset,
}

/// Structured input for economy fuzzing.
#[derive(Arbitrary, Debug)]
struct EconomyInput {
    /// Starting stock.
    start: [u32; 4],
    /// Operations to apply (capped to keep runs short).
    ops: Vec<FuzzOp>,
}

fuzz_target!(|input: EconomyInput| {
    let [stone, wood, iron, gold] = input.start;
    let resources = GameResources::new(
        Arc::new(BuildCosts::with_defaults()),
        ResourceStock::new(stone, wood, iron, gold),
    );

    for op in input.ops.into_iter().take(256) {
        let before = resources.snapshot();
        match op {
            FuzzOp::Add { stone, wood, iron, gold } => {
                let amount = ResourceStock::new(stone, wood, iron, gold);
                resources.add(amount);
                assert_eq!(resources.snapshot(), before.saturating_add(amount));
            }
            FuzzOp::Subtract { stone, wood, iron, gold } => {
                let amount = ResourceStock::new(stone, wood, iron, gold);
                resources.subtract_resources(amount);
                assert_eq!(resources.snapshot(), before.saturating_sub(amount));
            }
            FuzzOp::SubtractCost { stone, wood, iron } => {
                let cost = BuildCost::new(stone, wood, iron);
                resources.subtract(&cost);
                let after = resources.snapshot();
                assert!(after.stone <= before.stone);
                assert!(after.wood <= before.wood);
                assert!(after.iron <= before.iron);
                assert_eq!(after.gold, before.gold);
            }
            FuzzOp::Build(index) => {
                let id = IDS[usize::from(index) % IDS.len()];
                let cost = resources.costs().cost(id);
                let built = resources.subtract_for_building(id);
                assert_eq!(built, before.covers(&cost));
                let expected = if built {
                    before.saturating_sub_cost(&cost)
                } else {
                    before
                };
                assert_eq!(resources.snapshot(), expected);
            }
            FuzzOp::Reset => {
                resources.reset();
                assert!(resources.snapshot().is_empty());
            }
        }
    }
});
