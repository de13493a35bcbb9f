use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dice::NUM_DICE;
use crate::error::{Error, Result};

/// Stopping thresholds for one turn.
///
/// Mid-turn, the player banks once the turn score reaches `target_score`
/// with at most `des_dice` dice left to roll, and banks regardless of score
/// once at most `min_dice` dice are left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Strategy {
    target_score: u32,
    min_dice: u8,
    des_dice: u8,
}

impl Strategy {
    pub fn new(target_score: u32, min_dice: u8, des_dice: u8) -> Result<Self> {
        let max = NUM_DICE as u8;
        if target_score == 0 {
            return Err(Error::InvalidTargetScore);
        }
        if min_dice > max {
            return Err(Error::MinDiceOutOfRange { got: min_dice, max });
        }
        if des_dice > max {
            return Err(Error::DesDiceOutOfRange { got: des_dice, max });
        }
        Ok(Strategy {
            target_score,
            min_dice,
            des_dice,
        })
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn min_dice(&self) -> usize {
        self.min_dice as usize
    }

    pub fn des_dice(&self) -> usize {
        self.des_dice as usize
    }

    /// The strategies compared when none are given.
    pub fn defaults() -> Vec<Strategy> {
        [(500, 3, 3), (500, 2, 2), (700, 2, 3), (900, 2, 3), (500, 2, 3)]
            .into_iter()
            .map(|(target_score, min_dice, des_dice)| Strategy {
                target_score,
                min_dice,
                des_dice,
            })
            .collect()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TS:{},DD:{},MD:{}",
            self.target_score, self.des_dice, self.min_dice
        )
    }
}

// TARGET:MIN_DICE:DES_DICE, e.g. `500:2:3`
impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedStrategy(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();
        let [target, min, des] = parts.as_slice() else {
            return Err(malformed());
        };
        Strategy::new(
            target.parse().map_err(|_| malformed())?,
            min.parse().map_err(|_| malformed())?,
            des.parse().map_err(|_| malformed())?,
        )
    }
}
