use std::ops::RangeInclusive;

use rand::Rng;

use super::state::Cell;

/// Columns of the visible field
pub const FIELD_X: RangeInclusive<i32> = -5..=4;
/// Rows of the visible field
pub const FIELD_Z: RangeInclusive<i32> = -4..=5;

/// What occupies a cell of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Obstacle,
    Gap,
    Goal,
}

/// A classified cell of the visible field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub cell: Cell,
    pub kind: TileKind,
}

/// Procedural tile field driven by a reseedable pattern offset
#[derive(Debug, Clone, PartialEq)]
pub struct TileField {
    pattern_offset: i32,
    modulus: i32,
    goal: Cell,
}

impl TileField {
    pub fn new(pattern_offset: i32, modulus: i32, goal: Cell) -> Self {
        Self {
            pattern_offset,
            modulus,
            goal,
        }
    }

    pub fn pattern_offset(&self) -> i32 {
        self.pattern_offset
    }

    pub fn modulus(&self) -> i32 {
        self.modulus
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether an obstacle stands on cell (i, j)
    pub fn has_obstacle(&self, i: i32, j: i32) -> bool {
        (2 * i + 3 * j + self.pattern_offset) % self.modulus == 0
    }

    /// Whether cell (i, j) is a hole in the floor
    pub fn is_gap(&self, i: i32, j: i32) -> bool {
        i + j == self.pattern_offset && self.pattern_offset != 0
    }

    /// Whether the floor gives way under cell (i, j).
    ///
    /// Unlike [`is_gap`](Self::is_gap) this holds for offset 0 as well, where
    /// the diagonal through the spawn cell drops without being drawn. The goal
    /// never drops.
    pub fn drops_at(&self, i: i32, j: i32) -> bool {
        i + j == self.pattern_offset && !self.is_goal(i, j)
    }

    pub fn is_goal(&self, i: i32, j: i32) -> bool {
        self.goal == Cell::new(i, j)
    }

    /// Classify a single cell
    pub fn tile_at(&self, cell: Cell) -> TileKind {
        if self.is_goal(cell.x, cell.z) {
            TileKind::Goal
        } else if self.is_gap(cell.x, cell.z) {
            TileKind::Gap
        } else if self.has_obstacle(cell.x, cell.z) {
            TileKind::Obstacle
        } else {
            TileKind::Floor
        }
    }

    /// Every visible cell, row by row from the far edge (z = -4)
    pub fn layout(&self) -> impl Iterator<Item = Tile> + '_ {
        FIELD_Z.flat_map(move |z| {
            FIELD_X.map(move |x| {
                let cell = Cell::new(x, z);
                Tile {
                    cell,
                    kind: self.tile_at(cell),
                }
            })
        })
    }

    /// Resample the pattern offset uniformly from `0..range`
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R, range: i32) -> i32 {
        self.pattern_offset = rng.gen_range(0..range);
        self.pattern_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn field(offset: i32) -> TileField {
        TileField::new(offset, 7, Cell::new(4, -4))
    }

    #[test]
    fn test_obstacle_formula() {
        let f = field(1);
        // (0 + 0 + 1) % 7 = 1
        assert!(!f.has_obstacle(0, 0));
        // (6 + 0 + 1) % 7 = 0
        assert!(f.has_obstacle(3, 0));
        // -10 - 3 + 1 = -12
        assert!(!f.has_obstacle(-5, -1));
        // negative multiples of the modulus count: -8 + 0 + 1 = -7
        assert!(f.has_obstacle(-4, 0));
    }

    #[test]
    fn test_obstacle_is_deterministic() {
        let f = field(3);
        for i in -6..6 {
            for j in -6..6 {
                assert_eq!(f.has_obstacle(i, j), f.has_obstacle(i, j));
                assert_eq!(f.has_obstacle(i, j), field(3).has_obstacle(i, j));
            }
        }
    }

    #[test]
    fn test_gaps() {
        let f = field(2);
        assert!(f.is_gap(1, 1));
        assert!(f.is_gap(-3, 5));
        assert!(!f.is_gap(0, 0));

        // offset 0 never opens gaps
        let f = field(0);
        assert!(!f.is_gap(0, 0));
        assert!(!f.is_gap(-5, 5));
    }

    #[test]
    fn test_drops_include_hidden_diagonal() {
        let f = field(2);
        assert!(f.drops_at(1, 1));
        assert!(!f.drops_at(0, 0));

        // offset 0 draws no gaps but the x + z == 0 diagonal still drops
        let f = field(0);
        assert!(f.drops_at(0, 0));
        assert!(f.drops_at(-5, 5));
        assert!(!f.drops_at(4, -4));
    }

    #[test]
    fn test_goal_is_pattern_independent() {
        for offset in 0..10 {
            let f = field(offset);
            assert!(f.is_goal(4, -4));
            assert_eq!(f.tile_at(Cell::new(4, -4)), TileKind::Goal);
        }
    }

    #[test]
    fn test_layout_covers_visible_field() {
        let f = field(1);
        let tiles: Vec<Tile> = f.layout().collect();
        assert_eq!(tiles.len(), 100);
        assert_eq!(tiles[0].cell, Cell::new(-5, -4));
        assert_eq!(tiles[99].cell, Cell::new(4, 5));

        let obstacle = tiles
            .iter()
            .find(|t| t.cell == Cell::new(3, 0))
            .map(|t| t.kind);
        assert_eq!(obstacle, Some(TileKind::Obstacle));

        let gap = tiles
            .iter()
            .find(|t| t.cell == Cell::new(0, 1))
            .map(|t| t.kind);
        assert_eq!(gap, Some(TileKind::Gap));
    }

    #[test]
    fn test_reseed_stays_in_range() {
        let mut f = field(1);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let offset = f.reseed(&mut rng, 10);
            assert!((0..10).contains(&offset));
            assert_eq!(f.pattern_offset(), offset);
        }
    }
}
