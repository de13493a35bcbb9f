use rand::Rng;

/// Number of dice in play at the start of a turn.
pub const NUM_DICE: usize = 5;

/// Faces per die.
pub const FACES: u8 = 6;

const ALL_CONSUMED: u8 = (1 << NUM_DICE) - 1;

/// Source of die faces in `1..=FACES`.
pub trait DieRoller {
    fn roll_die(&mut self) -> u8;
}

impl<R: Rng> DieRoller for R {
    fn roll_die(&mut self) -> u8 {
        self.random_range(1..=FACES)
    }
}

// A single die as seen from outside the set. A value of 0 means the die has
// not been rolled yet this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    pub value: u8,
    pub consumed: bool,
}

/// The five dice of a turn.
///
/// Consumed dice keep the face they scored with and are never re-rolled.
/// Every other die is re-rolled on each pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceSet {
    values: [u8; NUM_DICE],
    consumed: u8,
}

impl DiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_values(values: [u8; NUM_DICE], consumed: u8) -> Self {
        DiceSet { values, consumed }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn die(&self, index: usize) -> Die {
        Die {
            value: self.values[index],
            consumed: self.is_consumed(index),
        }
    }

    pub fn dice(&self) -> impl Iterator<Item = Die> + '_ {
        (0..NUM_DICE).map(|i| self.die(i))
    }

    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed & (1 << index) != 0
    }

    pub fn available_count(&self) -> usize {
        NUM_DICE - self.consumed.count_ones() as usize
    }

    /// True once every die has scored: the hot dice case.
    pub fn is_exhausted(&self) -> bool {
        self.consumed == ALL_CONSUMED
    }

    pub(crate) fn consume(&mut self, index: usize) {
        debug_assert!(!self.is_consumed(index));
        self.consumed |= 1 << index;
    }

    pub(crate) fn consume_all(&mut self) {
        self.consumed = ALL_CONSUMED;
    }

    // First available die showing `value`
    pub(crate) fn find_available(&self, value: u8) -> Option<usize> {
        (0..NUM_DICE).find(|&i| !self.is_consumed(i) && self.values[i] == value)
    }

    /// Face counts of the available dice, indexed by face value.
    pub(crate) fn available_counts(&self) -> [usize; FACES as usize + 1] {
        let mut counts = [0; FACES as usize + 1];
        for i in (0..NUM_DICE).filter(|&i| !self.is_consumed(i)) {
            counts[self.values[i] as usize] += 1;
        }
        counts
    }

    /// Re-roll every available die and return how many were rolled.
    pub fn roll_available<R: DieRoller + ?Sized>(&mut self, roller: &mut R) -> usize {
        let mut rolled = 0;
        for i in 0..NUM_DICE {
            if !self.is_consumed(i) {
                self.values[i] = roller.roll_die();
                rolled += 1;
            }
        }
        rolled
    }
}

/// Replays a fixed list of faces and panics once they run out.
#[cfg(test)]
pub(crate) struct ScriptedRolls {
    faces: Vec<u8>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub(crate) fn new(faces: &[u8]) -> Self {
        ScriptedRolls {
            faces: faces.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl DieRoller for ScriptedRolls {
    fn roll_die(&mut self) -> u8 {
        let Some(&face) = self.faces.get(self.next) else {
            panic!("scripted rolls ran out after {} faces", self.faces.len());
        };
        self.next += 1;
        face
    }
}
