//! Pieces module - the tetromino catalog and mask geometry
//!
//! Every piece is a 4x4 mask of cells. Filled cells carry the piece kind, so a
//! mask can be written into the board directly and keeps its color identity
//! through rotation. The catalog is immutable; pieces copy a mask out of it.

use crate::types::{Cell, PieceKind, MASK_SIZE};

/// A 4x4 piece mask, indexed `mask[row][col]`
pub type Mask = [[Cell; MASK_SIZE]; MASK_SIZE];

const __: Cell = None;
const II: Cell = Some(PieceKind::I);
const OO: Cell = Some(PieceKind::O);
const SS: Cell = Some(PieceKind::S);
const ZZ: Cell = Some(PieceKind::Z);
const TT: Cell = Some(PieceKind::T);
const JJ: Cell = Some(PieceKind::J);
const LL: Cell = Some(PieceKind::L);

const I_MASK: Mask = [
    [__, __, __, __],
    [II, II, II, II],
    [__, __, __, __],
    [__, __, __, __],
];

const O_MASK: Mask = [
    [__, __, __, __],
    [__, OO, OO, __],
    [__, OO, OO, __],
    [__, __, __, __],
];

const S_MASK: Mask = [
    [__, __, __, __],
    [__, __, SS, SS],
    [__, SS, SS, __],
    [__, __, __, __],
];

const Z_MASK: Mask = [
    [__, __, __, __],
    [__, ZZ, ZZ, __],
    [__, __, ZZ, ZZ],
    [__, __, __, __],
];

const T_MASK: Mask = [
    [__, __, __, __],
    [__, __, TT, __],
    [__, TT, TT, TT],
    [__, __, __, __],
];

const J_MASK: Mask = [
    [__, __, __, __],
    [__, __, JJ, __],
    [__, __, JJ, __],
    [__, JJ, JJ, __],
];

const L_MASK: Mask = [
    [__, __, __, __],
    [__, LL, __, __],
    [__, LL, __, __],
    [__, LL, LL, __],
];

/// Get the canonical mask for a piece kind
pub fn shape_of(kind: PieceKind) -> &'static Mask {
    match kind {
        PieceKind::I => &I_MASK,
        PieceKind::O => &O_MASK,
        PieceKind::S => &S_MASK,
        PieceKind::Z => &Z_MASK,
        PieceKind::T => &T_MASK,
        PieceKind::J => &J_MASK,
        PieceKind::L => &L_MASK,
    }
}

/// Rotate a mask 90° clockwise: `new[i][j] = old[3 - j][i]`
pub fn rotate_cw(mask: &Mask) -> Mask {
    let mut out = [[None; MASK_SIZE]; MASK_SIZE];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = mask[MASK_SIZE - 1 - j][i];
        }
    }
    out
}

/// Iterate the filled cells of a mask as `(row, col, kind)`
pub fn filled_cells(mask: &Mask) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
    mask.iter().enumerate().flat_map(|(i, row)| {
        row.iter()
            .enumerate()
            .filter_map(move |(j, cell)| cell.map(|kind| (i as i8, j as i8, kind)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells_of_its_own_kind() {
        for kind in PieceKind::ALL {
            let cells: Vec<_> = filled_cells(shape_of(kind)).collect();
            assert_eq!(cells.len(), 4, "{:?}", kind);
            assert!(cells.iter().all(|&(_, _, k)| k == kind));
        }
    }

    #[test]
    fn every_shape_leaves_top_row_empty() {
        for kind in PieceKind::ALL {
            assert!(shape_of(kind)[0].iter().all(|c| c.is_none()), "{:?}", kind);
        }
    }

    #[test]
    fn rotate_i_becomes_vertical() {
        let rotated = rotate_cw(shape_of(PieceKind::I));
        // The bar in row 1 turns into column 2.
        for row in rotated.iter() {
            assert_eq!(row[2], Some(PieceKind::I));
            assert_eq!(row.iter().filter(|c| c.is_some()).count(), 1);
        }
    }

    #[test]
    fn four_rotations_restore_mask() {
        for kind in PieceKind::ALL {
            let start = *shape_of(kind);
            let mut mask = start;
            for _ in 0..4 {
                mask = rotate_cw(&mask);
            }
            assert_eq!(mask, start, "{:?}", kind);
        }
    }
}
