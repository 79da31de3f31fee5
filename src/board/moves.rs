//! Legal move generation over the fixed knight offset table.

use super::{Board, Position};

/// The eight knight move offsets, in the fixed evaluation order used
/// throughout the search. The order only matters for determinism of the
/// progress output and of tests, not for correctness.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, -2),  // up, then right
    (2, -1),  // right, then up
    (2, 1),   // right, then down
    (1, 2),   // down, then right
    (-1, 2),  // down, then left
    (-2, 1),  // left, then down
    (-2, -1), // left, then up
    (-1, -2), // up, then left
];

/// Enumerate the legal knight moves from the board's current position.
///
/// A move is legal iff the destination lies inside the grid and is
/// unvisited. Pure: the board is not modified. At most eight moves are
/// returned, in offset-table order.
pub fn find_moves(board: &Board) -> Vec<Position> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(dx, dy)| board.current().offset(dx, dy))
        .filter(|&to| board.in_bounds(to) && !board.is_visited(to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_moves_are_in_bounds_and_unvisited() {
        let mut board = Board::new(5, 5);
        board.step(Position::new(1, 2));
        board.step(Position::new(3, 3));

        for to in find_moves(&board) {
            assert!(board.in_bounds(to), "{to} out of bounds");
            assert!(!board.is_visited(to), "{to} already visited");
        }
    }

    #[test]
    fn test_at_most_eight_distinct_moves() {
        // A central square on a large empty board has the full fan.
        let mut board = Board::new(9, 9);
        board.step(Position::new(4, 4));

        let moves = find_moves(&board);
        assert_eq!(moves.len(), 8);

        let distinct: HashSet<_> = moves.iter().copied().collect();
        assert_eq!(distinct.len(), moves.len(), "duplicate move returned");
    }

    #[test]
    fn test_four_by_four_opening_moves() {
        // From the corner of a fresh 4x4 board exactly two moves exist,
        // in offset-table order.
        let board = Board::new(4, 4);
        let moves = find_moves(&board);
        assert_eq!(moves, vec![Position::new(2, 1), Position::new(1, 2)]);
    }

    #[test]
    fn test_center_of_three_by_three_is_dead() {
        // Every knight move from the center of a 3x3 board leaves the grid.
        let mut board = Board::new(3, 3);
        board.step(Position::new(1, 1));
        assert!(find_moves(&board).is_empty());
    }

    #[test]
    fn test_visited_targets_are_excluded() {
        let mut board = Board::new(4, 4);
        board.step(Position::new(2, 1));
        board.step(Position::new(0, 2));

        // From (0, 2): (1, 0) and (2, 3) are open, (2, 1) is visited.
        let moves = find_moves(&board);
        assert!(moves.contains(&Position::new(1, 0)));
        assert!(!moves.contains(&Position::new(2, 1)));
    }
}
