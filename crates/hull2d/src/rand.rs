//! Reproducible random point clouds.
//!
//! Model
//! - `count` points with integer coordinates in `[-spread, spread]²`, either
//!   uniform in the square or rejection-sampled inside the inscribed disc.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the i-th cloud of a run can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disc,
}

/// Cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Half-width of the bounding box. Clamped to at least 1.
    pub spread: i32,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            spread: 1000,
            shape: CloudShape::Square,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. Duplicates are possible and kept.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = cfg.spread.max(1);
    let r2 = i64::from(r) * i64::from(r);
    let mut out = Vec::with_capacity(cfg.count);
    while out.len() < cfg.count {
        let p = Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r));
        let v = p.to_vec();
        if cfg.shape == CloudShape::Disc && v.dot(&v) > r2 {
            continue;
        }
        out.push(p);
    }
    out
}
