//! The six-sided die.

use crate::core::GameRng;

/// Faces on the die.
pub const DICE_SIDES: u32 = 6;

/// Roll the die: uniform over `1..=6`.
///
/// ```
/// use rust_ladders::core::GameRng;
/// use rust_ladders::rules::roll_dice;
///
/// let mut rng = GameRng::new(3);
/// let roll = roll_dice(&mut rng);
/// assert!((1..=6).contains(&roll));
/// ```
pub fn roll_dice(rng: &mut GameRng) -> u32 {
    rng.gen_inclusive(1, DICE_SIDES)
}

/// Check if `roll` is a face of the die.
#[must_use]
pub const fn is_valid_roll(roll: u32) -> bool {
    roll >= 1 && roll <= DICE_SIDES
}
