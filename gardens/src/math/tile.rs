pub type Tile = [usize; 2];

/// Compact cell identity inside a region, `y * width + x`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bincode::Encode, bincode::Decode,
)]
pub struct CellId(pub usize);

pub trait TileMath {
    fn fit(self, width: usize) -> CellId;
    fn inside(self, size: [usize; 2]) -> bool;
    fn adjacent(self, size: [usize; 2]) -> Vec<Tile>;
}

impl TileMath for Tile {
    #[inline]
    fn fit(self, width: usize) -> CellId {
        let [x, y] = self;
        CellId(y * width + x)
    }

    #[inline]
    fn inside(self, size: [usize; 2]) -> bool {
        self[0] < size[0] && self[1] < size[1]
    }

    fn adjacent(self, size: [usize; 2]) -> Vec<Tile> {
        let [x, y] = self;
        let mut tiles = Vec::with_capacity(8);
        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let tile = [nx as usize, ny as usize];
                if tile.inside(size) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}
