//! Match detection, clearing, gravity collapse, and the chain-reaction
//! fixpoint that runs after every swap.

use std::collections::HashSet;

use crate::error::SwapError;

use super::{Board, Cell, HEIGHT, WIDTH};

/// Find every cell that belongs to a run of three or more identical
/// non-empty colors in a single row or column.
///
/// Runs are detected as sliding windows of exactly three, so a longer run
/// contributes every overlapping triple and is captured in full.
pub fn find_matches(board: &Board) -> HashSet<(usize, usize)> {
    let mut matched = HashSet::new();
    let cells = board.rows();

    // Horizontal runs.
    for row in 0..HEIGHT {
        for col in 0..WIDTH - 2 {
            let cell = cells[row][col];
            if !cell.is_empty() && cell == cells[row][col + 1] && cell == cells[row][col + 2] {
                matched.extend([(row, col), (row, col + 1), (row, col + 2)]);
            }
        }
    }

    // Vertical runs.
    for col in 0..WIDTH {
        for row in 0..HEIGHT - 2 {
            let cell = cells[row][col];
            if !cell.is_empty() && cell == cells[row + 1][col] && cell == cells[row + 2][col] {
                matched.extend([(row, col), (row + 1, col), (row + 2, col)]);
            }
        }
    }

    matched
}

/// Empty every matched cell.
pub fn clear_matches(board: &mut Board, matched: &HashSet<(usize, usize)>) {
    let cells = board.cells_mut();
    for &(row, col) in matched {
        cells[row][col] = Cell::Empty;
    }
}

/// One gravity pass: scanning each column from the bottom up, every gap
/// pulls down the nearest block above it.
///
/// Conserves the multiset of blocks in each column and is idempotent once
/// the column is compacted.
pub fn collapse(board: &mut Board) {
    let cells = board.cells_mut();
    for col in 0..WIDTH {
        for row in (1..HEIGHT).rev() {
            if !cells[row][col].is_empty() {
                continue;
            }
            for above in (0..row).rev() {
                if !cells[above][col].is_empty() {
                    cells[row][col] = cells[above][col];
                    cells[above][col] = Cell::Empty;
                    break;
                }
            }
        }
    }
}

/// Run the chain-reaction fixpoint: collapse, detect, clear, and repeat
/// until no matches remain, then compact one final time.
///
/// Returns the number of clearing cycles (the chain length). Terminates
/// because every cycle strictly reduces the number of non-empty cells.
/// Afterwards the board holds no matches and every column is compacted.
pub fn resolve(board: &mut Board) -> u32 {
    let mut chains = 0;
    loop {
        collapse(board);
        let matched = find_matches(board);
        if matched.is_empty() {
            collapse(board);
            return chains;
        }
        clear_matches(board, &matched);
        collapse(board);
        chains += 1;
    }
}

/// Exchange `(row, col)` with its right neighbor and resolve the result.
///
/// This is the single state transition exposed to sessions and the solver.
/// Returns the chain length of the resolution.
pub fn apply_swap(board: &mut Board, row: usize, col: usize) -> Result<u32, SwapError> {
    if col + 1 >= WIDTH {
        return Err(SwapError::InvalidSwap { col });
    }
    board.swap_right(row, col)?;
    Ok(resolve(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Cell::{Blue as B, Empty as E, Green as G, Purple as P, Red as R};

    fn board_with_bottom_row(row: [Cell; WIDTH]) -> Board {
        let mut cells = [[E; WIDTH]; HEIGHT];
        cells[HEIGHT - 1] = row;
        Board::from_rows(cells)
    }

    #[test]
    fn horizontal_triple_is_detected() {
        let board = board_with_bottom_row([R, R, R, E, E, E]);
        let matched = find_matches(&board);
        assert_eq!(
            matched,
            HashSet::from([(5, 0), (5, 1), (5, 2)])
        );
    }

    #[test]
    fn vertical_triple_is_detected() {
        let mut board = Board::empty();
        for row in 3..HEIGHT {
            board.set(row, 2, B).unwrap();
        }
        let matched = find_matches(&board);
        assert_eq!(
            matched,
            HashSet::from([(3, 2), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn run_of_four_is_fully_captured() {
        let board = board_with_bottom_row([E, G, G, G, G, E]);
        let matched = find_matches(&board);
        assert_eq!(
            matched,
            HashSet::from([(5, 1), (5, 2), (5, 3), (5, 4)])
        );
    }

    #[test]
    fn empty_runs_never_match() {
        let board = Board::empty();
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn pairs_do_not_match() {
        let board = board_with_bottom_row([R, R, E, R, R, E]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn crossing_runs_union_their_cells() {
        // Vertical run in column 2 crossing a horizontal run in row 5.
        let mut board = board_with_bottom_row([R, R, R, E, E, E]);
        board.set(3, 2, R).unwrap();
        board.set(4, 2, R).unwrap();
        let matched = find_matches(&board);
        assert_eq!(
            matched,
            HashSet::from([(5, 0), (5, 1), (5, 2), (3, 2), (4, 2)])
        );
    }

    #[test]
    fn clear_empties_only_matched_cells() {
        let mut board = board_with_bottom_row([R, R, R, G, E, E]);
        let matched = find_matches(&board);
        clear_matches(&mut board, &matched);
        assert_eq!(board, board_with_bottom_row([E, E, E, G, E, E]));
    }

    #[test]
    fn collapse_pulls_nearest_block_into_gap() {
        let mut board = Board::empty();
        board.set(1, 0, R).unwrap();
        board.set(3, 0, G).unwrap();
        collapse(&mut board);
        // Blocks settle at the bottom with their order preserved.
        assert_eq!(board.get(5, 0).unwrap(), G);
        assert_eq!(board.get(4, 0).unwrap(), R);
        for row in 0..4 {
            assert_eq!(board.get(row, 0).unwrap(), E);
        }
    }

    #[test]
    fn collapse_conserves_column_contents() {
        let mut board = Board::starting_layout();
        board.set(5, 1, E).unwrap();
        board.set(2, 3, E).unwrap();

        let column_counts = |board: &Board| -> Vec<Vec<usize>> {
            (0..WIDTH)
                .map(|col| {
                    [R, G, B, P]
                        .iter()
                        .map(|&color| {
                            (0..HEIGHT)
                                .filter(|&row| board.get(row, col).unwrap() == color)
                                .count()
                        })
                        .collect()
                })
                .collect()
        };

        let before = column_counts(&board);
        collapse(&mut board);
        assert_eq!(column_counts(&board), before);
    }

    #[test]
    fn collapse_is_idempotent_once_compacted() {
        let mut board = Board::starting_layout();
        board.set(4, 2, E).unwrap();
        collapse(&mut board);
        let compacted = board;
        collapse(&mut board);
        assert_eq!(board, compacted);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut board = board_with_bottom_row([R, R, R, G, G, E]);
        assert_eq!(resolve(&mut board), 1);
        let settled = board;
        let chains = resolve(&mut board);
        assert_eq!(chains, 0);
        assert_eq!(board, settled);
    }

    #[test]
    fn resolve_leaves_no_matches() {
        let mut board = Board::starting_layout();
        board.swap_right(5, 3).unwrap();
        resolve(&mut board);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn resolve_clears_a_simple_triple() {
        let mut board = board_with_bottom_row([R, R, R, E, E, E]);
        let chains = resolve(&mut board);
        assert_eq!(chains, 1);
        assert!(board.is_cleared());
    }

    #[test]
    fn resolve_settles_floating_blocks_without_clearing() {
        let mut board = Board::empty();
        board.set(0, 4, B).unwrap();
        let chains = resolve(&mut board);
        assert_eq!(chains, 0);
        assert_eq!(board.get(5, 4).unwrap(), B);
        assert_eq!(board.get(0, 4).unwrap(), E);
    }

    #[test]
    fn resolve_terminates_on_full_monochrome_board() {
        let mut board = Board::from_rows([[R; WIDTH]; HEIGHT]);
        let chains = resolve(&mut board);
        assert_eq!(chains, 1);
        assert!(board.is_cleared());
    }

    #[test]
    fn apply_swap_rejects_last_column() {
        let mut board = Board::starting_layout();
        assert_eq!(
            apply_swap(&mut board, 5, WIDTH - 1),
            Err(SwapError::InvalidSwap { col: WIDTH - 1 })
        );
        assert_eq!(board, Board::starting_layout());
    }

    #[test]
    fn apply_swap_rejects_out_of_range_row() {
        let mut board = Board::starting_layout();
        assert!(matches!(
            apply_swap(&mut board, HEIGHT, 0),
            Err(SwapError::Board(_))
        ));
    }

    // Swapping (5, 3) and (5, 4) on the starting layout sets off a two-step
    // chain: the purple triples clear first, the falling greens then line up
    // and clear as well.
    #[test]
    fn starting_layout_swap_triggers_chain_reaction() {
        let mut board = Board::starting_layout();
        let chains = apply_swap(&mut board, 5, 3).unwrap();
        assert_eq!(chains, 2);

        let expected = Board::from_rows([
            [E, E, E, E, E, E],
            [E, E, E, E, E, E],
            [E, E, E, E, E, E],
            [E, E, E, E, E, E],
            [E, G, E, E, E, E],
            [E, P, G, E, E, E],
        ]);
        assert_eq!(board, expected);
    }
}
