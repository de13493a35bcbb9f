use crate::dice::{DiceSet, DieRoller, FACES, NUM_DICE};

pub const STRAIGHT_POINTS: u32 = 1500;
pub const ONE_POINTS: u32 = 100;
pub const FIVE_POINTS: u32 = 50;

const LOW_STRAIGHT: [u8; NUM_DICE] = [1, 2, 3, 4, 5];
const HIGH_STRAIGHT: [u8; NUM_DICE] = [2, 3, 4, 5, 6];

/// What a single roll scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    // 1 2 3 4 5 or 2 3 4 5 6
    Straight,

    // Three dice showing `face`
    Triple { face: u8 },

    // Loose ones and fives, picked one at a time
    Singles { ones: u8, fives: u8 },

    Bust,
}

impl Combination {
    pub fn points(&self) -> u32 {
        match *self {
            Combination::Straight => STRAIGHT_POINTS,
            Combination::Triple { face: 1 } => 1000,
            Combination::Triple { face } => face as u32 * 100,
            Combination::Singles { ones, fives } => {
                ones as u32 * ONE_POINTS + fives as u32 * FIVE_POINTS
            }
            Combination::Bust => 0,
        }
    }
}

/// Evaluate the available dice as they currently lie and consume the ones
/// that scored.
///
/// Rules are tried in order: straight (five dice only), the highest face
/// showing at least three times, then single ones and fives. With more than
/// three dice in play only one single is taken; with three or fewer, up to
/// one per die, ones before fives, stopping at the first pick that finds
/// neither.
pub fn score_roll(dice: &mut DiceSet) -> Combination {
    let rolled = dice.available_count();
    let counts = dice.available_counts();

    if rolled == NUM_DICE && is_straight(&counts) {
        dice.consume_all();
        return Combination::Straight;
    }

    for face in (1..=FACES).rev() {
        if counts[face as usize] >= 3 {
            for _ in 0..3 {
                if let Some(index) = dice.find_available(face) {
                    dice.consume(index);
                }
            }
            return Combination::Triple { face };
        }
    }

    let to_use = if rolled > 3 { 1 } else { rolled };
    let (mut ones, mut fives) = (0, 0);
    for _ in 0..to_use {
        if let Some(index) = dice.find_available(1) {
            dice.consume(index);
            ones += 1;
        } else if let Some(index) = dice.find_available(5) {
            dice.consume(index);
            fives += 1;
        } else {
            break;
        }
    }

    if ones == 0 && fives == 0 {
        Combination::Bust
    } else {
        Combination::Singles { ones, fives }
    }
}

fn is_straight(counts: &[usize]) -> bool {
    [LOW_STRAIGHT, HIGH_STRAIGHT]
        .iter()
        .any(|run| run.iter().all(|&face| counts[face as usize] == 1))
}

/// Roll every available die and score the result. Zero means bust.
pub fn roll_and_score<R: DieRoller + ?Sized>(dice: &mut DiceSet, roller: &mut R) -> u32 {
    dice.roll_available(roller);
    score_roll(dice).points()
}
