// src/marching_squares/cases.rs

/// One of the four edges of a grid cell on which an isoline crossing
/// can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// Classifies a cell against the isovalue and packs the result into a
/// 4-bit case index.
///
/// Bit weights: top-left 8, top-right 4, bottom-right 2, bottom-left 1.
/// Classification uses strict greater-than: a sample exactly equal to the
/// isovalue counts as "below". This tie-break is load-bearing; do not
/// relax it to `>=`.
#[inline]
pub fn cell_case(tl: f32, tr: f32, br: f32, bl: f32, isovalue: f32) -> usize {
    let mut case = 0;
    if tl > isovalue {
        case |= 8;
    }
    if tr > isovalue {
        case |= 4;
    }
    if br > isovalue {
        case |= 2;
    }
    if bl > isovalue {
        case |= 1;
    }
    case
}

/// Lookup table mapping each of the 16 cell cases to at most two line
/// segments, each given as the pair of edges whose crossings it connects.
///
/// Cases 0 and 15 (all corners below / all above) carry no segments.
/// Cases 5 and 10 are the ambiguous saddles (diagonally opposite corners
/// share a classification); they use the fixed two-segment resolution
/// below rather than an average-value disambiguation test. This is a
/// known simplification kept for parity with the reference behavior; a
/// connectivity-aware resolution would be a behavior change, not a fix.
#[rustfmt::skip]
pub const CASE_TABLE: [[Option<(Edge, Edge)>; 2]; 16] = [
    [None,                           None],                           // 0000
    [Some((Edge::Left, Edge::Bottom)), None],                         // 0001: BL
    [Some((Edge::Bottom, Edge::Right)), None],                        // 0010: BR
    [Some((Edge::Left, Edge::Right)), None],                          // 0011: BL+BR
    [Some((Edge::Top, Edge::Right)), None],                           // 0100: TR
    [Some((Edge::Top, Edge::Left)), Some((Edge::Bottom, Edge::Right))], // 0101: TR+BL saddle
    [Some((Edge::Top, Edge::Bottom)), None],                          // 0110: TR+BR
    [Some((Edge::Top, Edge::Left)), None],                            // 0111: all but TL
    [Some((Edge::Top, Edge::Left)), None],                            // 1000: TL
    [Some((Edge::Top, Edge::Bottom)), None],                          // 1001: TL+BL
    [Some((Edge::Top, Edge::Right)), Some((Edge::Bottom, Edge::Left))], // 1010: TL+BR saddle
    [Some((Edge::Top, Edge::Right)), None],                           // 1011: all but TR
    [Some((Edge::Left, Edge::Right)), None],                          // 1100: TL+TR
    [Some((Edge::Bottom, Edge::Right)), None],                        // 1101: all but BR
    [Some((Edge::Bottom, Edge::Left)), None],                         // 1110: all but BL
    [None,                           None],                           // 1111
];
