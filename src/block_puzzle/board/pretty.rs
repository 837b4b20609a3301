use crate::block_puzzle::prelude::*;
use itertools::Itertools;

impl Board {
    /// Pretty-prints the occupancy grid, top row first.
    pub fn pretty(&self) -> String {
        (0..self.rows())
            .rev()
            .map(|y| {
                (0..self.columns())
                    .map(|x| {
                        match self.occupied_unchecked(&Coord::new(x, y)) {
                            true => '#',
                            false => '.',
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}
