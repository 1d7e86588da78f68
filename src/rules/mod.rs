//! Game rules: the die, movement, and the win condition.
//!
//! Everything here is a free function over plain values. The `game`
//! module strings them together into turns.

pub mod dice;
pub mod movement;

pub use dice::{is_valid_roll, roll_dice, DICE_SIDES};
pub use movement::{advance, check_position, clamp_move, is_win, is_win_default, resolve_special};
