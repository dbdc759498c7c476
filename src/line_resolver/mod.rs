//! turns one line of cells into the moves that compact it
//!
//! A line is a row or column already read in the direction of travel, so index 0
//! is the slot tiles pile into. Resolution runs in three passes, each with its own
//! edge case policy:
//!
//! 1. condense: drop the gaps, noting which tiles are already in place
//! 2. collapse: merge equal neighbours, each tile at most once
//! 3. convert: number the survivors and describe how each one got there
//!
//! The result only depends on the values in the line and their order.

mod token;

use serde::{Deserialize, Serialize};

use crate::grid::Cell;
use token::Token;

/// How one tile (or two merging tiles) travels within a line. Indices are
/// positions in the line, not grid coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// a single tile moves from `source` to `destination`. When `merged` is set it
    /// lands on the tile already sitting at `destination` and `value` is the
    /// combined value.
    Slide {
        #[allow(missing_docs)]
        source: usize,
        #[allow(missing_docs)]
        destination: usize,
        #[allow(missing_docs)]
        value: u32,
        #[allow(missing_docs)]
        merged: bool,
    },
    /// two tiles both move and combine into `value` at `destination`
    Converge {
        #[allow(missing_docs)]
        first_source: usize,
        #[allow(missing_docs)]
        second_source: usize,
        #[allow(missing_docs)]
        destination: usize,
        #[allow(missing_docs)]
        value: u32,
    },
}

impl Instruction {
    #[allow(missing_docs)]
    pub fn destination(&self) -> usize {
        match *self {
            Instruction::Slide { destination, .. } | Instruction::Converge { destination, .. } => {
                destination
            }
        }
    }

    /// the value of the tile at the destination once the instruction is applied
    pub fn value(&self) -> u32 {
        match *self {
            Instruction::Slide { value, .. } | Instruction::Converge { value, .. } => value,
        }
    }

    /// true if two tiles combined
    pub fn is_merge(&self) -> bool {
        match *self {
            Instruction::Slide { merged, .. } => merged,
            Instruction::Converge { .. } => true,
        }
    }

    /// true for a tile that stays where it is. these carry no visible change
    pub fn is_stationary(&self) -> bool {
        matches!(
            *self,
            Instruction::Slide {
                source,
                destination,
                merged: false,
                ..
            } if source == destination
        )
    }
}

/// The instructions for one line, ordered by destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineResolution {
    instructions: Vec<Instruction>,
}

impl LineResolution {
    /// every instruction, destinations are exactly `0..len()`
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// instructions that actually move or merge something
    pub fn changes(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.instructions.iter().filter(|i| !i.is_stationary())
    }

    /// true if applying this resolution would leave the line untouched
    pub fn is_noop(&self) -> bool {
        self.instructions.iter().all(Instruction::is_stationary)
    }

    /// number of tiles left in the line
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// the compacted line, as it reads after the move
    pub fn resulting_line(&self, length: usize) -> Vec<Cell> {
        let mut line = vec![Cell::Empty; length];
        for instruction in &self.instructions {
            line[instruction.destination()] = Cell::Occupied(instruction.value());
        }
        line
    }
}

impl IntoIterator for LineResolution {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

/// Resolves one line, read in travel order, into the instructions that compact it.
///
/// A line that is already compacted with no equal neighbours resolves to
/// stationary slides only, see [LineResolution::is_noop].
///
/// ```
/// use slide_merge_rules::{resolve_line, Cell, Instruction};
///
/// let line = [Cell::Occupied(2), Cell::Empty, Cell::Occupied(2), Cell::Occupied(2)];
/// let resolution = resolve_line(&line);
/// assert_eq!(
///     resolution.instructions(),
///     &[
///         Instruction::Slide { source: 2, destination: 0, value: 4, merged: true },
///         Instruction::Slide { source: 3, destination: 1, value: 2, merged: false },
///     ]
/// );
/// ```
pub fn resolve_line(line: &[Cell]) -> LineResolution {
    LineResolution {
        instructions: convert(&collapse(&condense(line))),
    }
}

fn condense(line: &[Cell]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(line.len());
    for (source, cell) in line.iter().enumerate() {
        if let Cell::Occupied(value) = *cell {
            tokens.push(Token::placed(source, value, tokens.len()));
        }
    }
    tokens
}

fn collapse(tokens: &[Token]) -> Vec<Token> {
    let mut collapsed = Vec::with_capacity(tokens.len());
    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];
        let position = collapsed.len();
        match tokens.get(idx + 1) {
            Some(next) if next.value() == token.value() => {
                let value = token.value() + next.value();
                let merged = match token {
                    // the front tile has not moved, only the second one slides in
                    Token::Stationary { source, .. } if source == position => {
                        Token::MergedFromOne {
                            source: next.source(),
                            value,
                        }
                    }
                    _ => Token::MergedFromTwo {
                        first_source: token.source(),
                        second_source: next.source(),
                        value,
                    },
                };
                collapsed.push(merged);
                // the second half of a pair is never reconsidered
                idx += 2;
            }
            _ => {
                collapsed.push(Token::placed(token.source(), token.value(), position));
                idx += 1;
            }
        }
    }
    collapsed
}

fn convert(tokens: &[Token]) -> Vec<Instruction> {
    tokens
        .iter()
        .enumerate()
        .map(|(destination, token)| match *token {
            Token::Stationary { source, value } | Token::Shifted { source, value } => {
                Instruction::Slide {
                    source,
                    destination,
                    value,
                    merged: false,
                }
            }
            Token::MergedFromOne { source, value } => Instruction::Slide {
                source,
                destination,
                value,
                merged: true,
            },
            Token::MergedFromTwo {
                first_source,
                second_source,
                value,
            } => Instruction::Converge {
                first_source,
                second_source,
                destination,
                value,
            },
        })
        .collect()
}
