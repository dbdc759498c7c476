//! deterministic [CellPicker] for replays and tests
use crate::types::CellPicker;

/// Replays a fixed list of choices, cycling once it runs out. Each choice is
/// reduced modulo the count it is asked to pick from, so any list is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePicker {
    choices: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    /// picks `choices` in order. an empty list always picks 0
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        SequencePicker {
            choices: choices.into_iter().collect(),
            next: 0,
        }
    }

    /// always picks the first candidate
    pub fn first() -> Self {
        Self::new(Vec::new())
    }
}

impl CellPicker for SequencePicker {
    fn pick(&mut self, count: usize) -> usize {
        debug_assert!(count > 0);
        if self.choices.is_empty() {
            return 0;
        }
        let choice = self.choices[self.next % self.choices.len()];
        self.next += 1;
        choice % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles_and_wraps() {
        let mut picker = SequencePicker::new(vec![3, 1]);
        assert_eq!(picker.pick(10), 3);
        assert_eq!(picker.pick(10), 1);
        assert_eq!(picker.pick(2), 1);
        assert_eq!(picker.pick(4), 1);
    }

    #[test]
    fn test_empty_sequence_picks_first() {
        let mut picker = SequencePicker::first();
        assert_eq!(picker.pick(5), 0);
        assert_eq!(picker.pick(1), 0);
    }
}
