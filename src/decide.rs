use tracing::trace;

use crate::dice::{DiceSet, DieRoller, NUM_DICE};
use crate::scoring::roll_and_score;
use crate::strategy::Strategy;

/// Play out the rest of a turn and return the banked score, or 0 on a bust.
///
/// A full set of five dice is always rolled. With fewer dice left the
/// strategy decides first: bank once `accumulated` reaches the target with
/// few enough dice left, or bank anyway when down to `min_dice`. When every
/// die has scored the set is refilled and the turn goes on. The set is fresh
/// again when this returns.
pub fn decide<R: DieRoller + ?Sized>(
    dice: &mut DiceSet,
    accumulated: u32,
    strategy: &Strategy,
    roller: &mut R,
) -> u32 {
    let mut score = accumulated;
    loop {
        if dice.is_exhausted() {
            trace!(score, "hot dice");
            dice.reset();
        }

        let available = dice.available_count();
        if available < NUM_DICE {
            if score >= strategy.target_score() && available <= strategy.des_dice() {
                break;
            }
            if available <= strategy.min_dice() {
                break;
            }
        }

        let earned = roll_and_score(dice, roller);
        if earned == 0 {
            trace!(lost = score, "bust");
            dice.reset();
            return 0;
        }
        score += earned;
    }

    dice.reset();
    score
}

/// One turn from a fresh set of dice.
pub fn play_turn<R: DieRoller + ?Sized>(strategy: &Strategy, roller: &mut R) -> u32 {
    decide(&mut DiceSet::new(), 0, strategy, roller)
}
