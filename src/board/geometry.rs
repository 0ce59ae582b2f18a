//! Precomputed diagonal geometry for the 32 playable squares.

use once_cell::sync::Lazy;

use super::{Direction, Square, NUM_SQUARES};

/// `NEIGHBORS[sq][dir]` is the square one diagonal step away, if any.
pub(crate) static NEIGHBORS: Lazy<[[Option<Square>; 4]; NUM_SQUARES]> = Lazy::new(|| {
    let mut table = [[None; 4]; NUM_SQUARES];
    for (index, row) in table.iter_mut().enumerate() {
        let sq = Square::from_index(index);
        for dir in Direction::ALL {
            row[dir.index()] = Square::from_coords(
                sq.row() as i8 + dir.row_delta(),
                sq.col() as i8 + dir.col_delta(),
            );
        }
    }
    table
});

/// `JUMPS[sq][dir]` is `(jumped, landing)` for a jump in `dir`, if both
/// squares are on the board.
pub(crate) static JUMPS: Lazy<[[Option<(Square, Square)>; 4]; NUM_SQUARES]> = Lazy::new(|| {
    let mut table = [[None; 4]; NUM_SQUARES];
    for (index, row) in table.iter_mut().enumerate() {
        let sq = Square::from_index(index);
        for dir in Direction::ALL {
            let over = Square::from_coords(
                sq.row() as i8 + dir.row_delta(),
                sq.col() as i8 + dir.col_delta(),
            );
            let landing = Square::from_coords(
                sq.row() as i8 + 2 * dir.row_delta(),
                sq.col() as i8 + 2 * dir.col_delta(),
            );
            if let (Some(over), Some(landing)) = (over, landing) {
                row[dir.index()] = Some((over, landing));
            }
        }
    }
    table
});

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(position: i32) -> Square {
        Square::new(position).unwrap()
    }

    #[test]
    fn test_corner_has_single_neighbor() {
        // Square 4 sits on row 0, column 7
        let neighbors: Vec<u8> = sq(4).adjacent().map(Square::position).collect();
        assert_eq!(neighbors, vec![8]);

        let neighbors: Vec<u8> = sq(29).adjacent().map(Square::position).collect();
        assert_eq!(neighbors, vec![25]);
    }

    #[test]
    fn test_center_has_four_neighbors() {
        let neighbors: Vec<u8> = sq(15).adjacent().map(Square::position).collect();
        assert_eq!(neighbors, vec![10, 11, 18, 19]);

        let neighbors: Vec<u8> = sq(18).adjacent().map(Square::position).collect();
        assert_eq!(neighbors, vec![14, 15, 22, 23]);
    }

    #[test]
    fn test_jump_table_matches_offsets() {
        for from in Square::all() {
            for entry in JUMPS[from.index()].iter().flatten() {
                let (over, landing) = *entry;
                let diff = landing.position() as i32 - from.position() as i32;
                assert!(matches!(diff.abs(), 7 | 9), "{from} -> {landing}");
                assert_eq!(Square::between(from, landing), Some(over));
            }
        }
    }

    #[test]
    fn test_edge_jumps_do_not_wrap() {
        // 4 + 9 = 13 lands on the opposite edge; not a real jump
        assert!(JUMPS[sq(4).index()].iter().flatten().all(|(_, l)| l.position() != 13));
        assert_eq!(Square::between(sq(4), sq(13)), None);
    }
}
