/// Intermediate record produced while compacting one line. Sources are indices
/// into the original line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// already as compacted as it can be
    Stationary { source: usize, value: u32 },
    /// slides towards the edge without merging
    Shifted { source: usize, value: u32 },
    /// the tile in front stays put and the tile at `source` slides into it
    MergedFromOne { source: usize, value: u32 },
    /// both tiles move to meet at the destination
    MergedFromTwo {
        first_source: usize,
        second_source: usize,
        value: u32,
    },
}

impl Token {
    pub(crate) fn value(&self) -> u32 {
        match *self {
            Token::Stationary { value, .. }
            | Token::Shifted { value, .. }
            | Token::MergedFromOne { value, .. }
            | Token::MergedFromTwo { value, .. } => value,
        }
    }

    pub(crate) fn source(&self) -> usize {
        match *self {
            Token::Stationary { source, .. }
            | Token::Shifted { source, .. }
            | Token::MergedFromOne { source, .. } => source,
            Token::MergedFromTwo { first_source, .. } => first_source,
        }
    }

    /// a non merged token placed at output `position`
    pub(crate) fn placed(source: usize, value: u32, position: usize) -> Self {
        if source == position {
            Token::Stationary { source, value }
        } else {
            Token::Shifted { source, value }
        }
    }
}
