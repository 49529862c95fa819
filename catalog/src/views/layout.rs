//! Layout annotations derived from a record's position
//!
//! Everything here is a pure function of the index (and size hint), so a
//! re-render of the same catalog places every item in the same spot.

use serde::Serialize;

use crate::models::TileSize;

/// 1/ρ as a 0.64 fixed-point fraction, ρ the plastic number (ρ³ = ρ + 1)
const R2_ALPHA_X: u64 = 0xc13f_a9a9_02a6_328f;
/// 1/ρ² as a 0.64 fixed-point fraction
const R2_ALPHA_Y: u64 = 0x91e1_0da5_c79e_7b1c;
/// 0.5 as a 0.64 fixed-point fraction
const R2_SEED: u64 = 1 << 63;

/// Normalised position in the unit square
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// 0.0 <= x < 1.0
    pub x: f64,
    /// 0.0 <= y < 1.0
    pub y: f64,
}

/// Blueprint position for the record at `index`.
///
/// Uses the R2 low-discrepancy sequence, which spreads successive points
/// evenly over `[0,1)²` without clustering. The fractional part is taken in
/// wrapping fixed-point arithmetic, so it stays exact for any index.
pub fn coordinate_for(index: usize) -> Coordinates {
    let n = index as u64;
    Coordinates {
        x: fixed_to_unit(R2_SEED.wrapping_add(n.wrapping_mul(R2_ALPHA_X))),
        y: fixed_to_unit(R2_SEED.wrapping_add(n.wrapping_mul(R2_ALPHA_Y))),
    }
}

/// Top 53 bits of a 0.64 fraction as an f64 in [0, 1)
fn fixed_to_unit(v: u64) -> f64 {
    (v >> 11) as f64 / (1u64 << 53) as f64
}

/// Grid span of an editorial tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileSpan {
    pub cols: u8,
    pub rows: u8,
}

impl TileSpan {
    pub const LARGE: TileSpan = TileSpan { cols: 2, rows: 2 };
    pub const SMALL: TileSpan = TileSpan { cols: 1, rows: 1 };
    pub const WIDE: TileSpan = TileSpan { cols: 2, rows: 1 };
    pub const TALL: TileSpan = TileSpan { cols: 1, rows: 2 };

    /// Span for the tile at `index`.
    ///
    /// Large and small hints are honoured; anything else alternates wide
    /// (even index) and tall (odd index).
    pub fn for_tile(index: usize, size: Option<TileSize>) -> Self {
        match size {
            Some(TileSize::Large) => Self::LARGE,
            Some(TileSize::Small) => Self::SMALL,
            _ if index % 2 == 0 => Self::WIDE,
            _ => Self::TALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_unit_square() {
        for i in 0..10_000 {
            let c = coordinate_for(i);
            assert!((0.0..1.0).contains(&c.x), "x out of range at {i}: {}", c.x);
            assert!((0.0..1.0).contains(&c.y), "y out of range at {i}: {}", c.y);
        }
    }

    #[test]
    fn test_coordinates_deterministic() {
        for i in [0, 1, 7, 59, 1_000_000] {
            assert_eq!(coordinate_for(i), coordinate_for(i));
        }
        assert_eq!(coordinate_for(0), Coordinates { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_coordinates_dispersed() {
        let points: Vec<Coordinates> = (0..60).map(coordinate_for).collect();

        // every quadrant gets a share of the first 60 points
        let mut quadrants = [0usize; 4];
        for p in &points {
            let q = (p.x >= 0.5) as usize + 2 * (p.y >= 0.5) as usize;
            quadrants[q] += 1;
        }
        assert!(quadrants.iter().all(|&n| n >= 10), "{quadrants:?}");

        // no two points sit on top of each other
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(d > 0.01, "points too close: {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn test_coordinates_match_float_formula() {
        for i in 1..60usize {
            let c = coordinate_for(i);
            let x = (0.5 + i as f64 * 0.754_877_666_246_692_7).fract();
            let y = (0.5 + i as f64 * 0.569_840_290_998_053_3).fract();
            assert!((c.x - x).abs() < 1e-9, "x drifted at {i}: {} vs {x}", c.x);
            assert!((c.y - y).abs() < 1e-9, "y drifted at {i}: {} vs {y}", c.y);
        }
    }

    #[test]
    fn test_large_indices_stay_dispersed() {
        let indices = [1usize << 40, (1 << 53) - 1, 1 << 53, (1 << 53) + 1, usize::MAX];
        let points: Vec<Coordinates> = indices.iter().map(|&i| coordinate_for(i)).collect();
        for (i, a) in points.iter().enumerate() {
            assert!((0.0..1.0).contains(&a.x) && (0.0..1.0).contains(&a.y), "{a:?}");
            assert_ne!(*a, Coordinates { x: 0.0, y: 0.0 });
            for b in &points[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_tile_span() {
        assert_eq!(TileSpan::for_tile(3, Some(TileSize::Large)), TileSpan::LARGE);
        assert_eq!(TileSpan::for_tile(2, Some(TileSize::Small)), TileSpan::SMALL);
        assert_eq!(TileSpan::for_tile(4, Some(TileSize::Medium)), TileSpan::WIDE);
        assert_eq!(TileSpan::for_tile(5, Some(TileSize::Medium)), TileSpan::TALL);
        assert_eq!(TileSpan::for_tile(0, None), TileSpan::WIDE);
    }
}
