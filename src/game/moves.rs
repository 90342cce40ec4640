use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;

/// Direction changes requested by the player that have not yet been applied.
///
/// Each entry has been checked against the one before it (or against the
/// snake's direction at the time, for the first entry), so the queue never
/// holds a reversal or a repeat of its predecessor.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MoveQueue(VecDeque<Direction>);

impl MoveQueue {
    pub(crate) fn new() -> MoveQueue {
        MoveQueue(VecDeque::with_capacity(consts::MAX_QUEUED_MOVES))
    }

    /// Queue a turn towards `candidate`.  `current` is the direction the
    /// snake is facing right now; it is only consulted if the queue is empty.
    ///
    /// Returns `false` if the turn was dropped for being a reversal or
    /// repeat of the previous direction, or because the queue is full.
    pub(crate) fn push(&mut self, candidate: Direction, current: Direction) -> bool {
        let reference = self.0.back().copied().unwrap_or(current);
        if candidate == reference || candidate == reference.reverse() {
            return false;
        }
        if self.0.len() >= consts::MAX_QUEUED_MOVES {
            return false;
        }
        self.0.push_back(candidate);
        true
    }

    /// Take the oldest queued turn, if any
    pub(crate) fn pop(&mut self) -> Option<Direction> {
        self.0.pop_front()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::West, Direction::East)]
    fn reversal_rejected(#[case] current: Direction, #[case] candidate: Direction) {
        let mut moves = MoveQueue::new();
        assert!(!moves.push(candidate, current));
        assert!(moves.is_empty());
    }

    #[test]
    fn repeat_rejected() {
        let mut moves = MoveQueue::new();
        assert!(!moves.push(Direction::East, Direction::East));
        assert!(moves.push(Direction::North, Direction::East));
        assert!(!moves.push(Direction::North, Direction::East));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn reference_is_last_queued() {
        let mut moves = MoveQueue::new();
        assert!(moves.push(Direction::North, Direction::East));
        // West reverses the current direction, not the last queued one
        assert!(moves.push(Direction::West, Direction::East));
        assert!(moves.push(Direction::South, Direction::East));
        assert_eq!(moves.pop(), Some(Direction::North));
        assert_eq!(moves.pop(), Some(Direction::West));
        assert_eq!(moves.pop(), Some(Direction::South));
        assert_eq!(moves.pop(), None);
    }

    #[test]
    fn reversal_of_last_queued_rejected() {
        let mut moves = MoveQueue::new();
        assert!(moves.push(Direction::North, Direction::East));
        assert!(!moves.push(Direction::South, Direction::East));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn overflow_dropped() {
        let mut moves = MoveQueue::new();
        assert!(moves.push(Direction::North, Direction::East));
        assert!(moves.push(Direction::West, Direction::East));
        assert!(moves.push(Direction::South, Direction::East));
        assert!(!moves.push(Direction::East, Direction::East));
        assert_eq!(moves.len(), consts::MAX_QUEUED_MOVES);
        moves.clear();
        assert!(moves.is_empty());
    }
}
