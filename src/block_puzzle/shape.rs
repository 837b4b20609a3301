use crate::block_puzzle::prelude::*;

/// A polyomino as an ordered set of cell offsets on an anchor point.
///
/// Insertion order is irrelevant for fit-checking but is kept stable because the
/// texture layer assigns per-cell texture indices by it. Offsets need not
/// include (0, 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    offsets: Vec<Offset>,
}

impl Shape {
    /// Constructs a shape from its offsets; a shape covers at least one cell.
    pub fn new(offsets: Vec<Offset>) -> Result<Shape> {
        if offsets.is_empty() {
            return Err(anyhow!("a shape must cover at least one cell"));
        }
        Ok(Shape { offsets })
    }

    /// Convenience constructor from bare cell pairs.
    pub fn from_cells(cells: &[(isize, isize)]) -> Result<Shape> {
        Shape::new(cells.iter().map(|&(x, y)| Offset::new(x, y)).collect())
    }

    /// The offsets of this shape, in texture-index order.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// The number of cells this shape covers.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }
}

/// The prefab library the generator draws candidate shapes from.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    shapes: Vec<Shape>,
}

impl ShapeLibrary {
    /// Constructs a library from custom shapes.
    pub fn new(shapes: Vec<Shape>) -> ShapeLibrary {
        ShapeLibrary { shapes }
    }

    /// The stock library: one through four cells, the tetrominoes in the same
    /// base geometry the classic tile set uses. The small pieces keep the greedy
    /// fill honest; the anchored-off-centre tetrominoes are what produce gaps.
    pub fn standard() -> ShapeLibrary {
        let cells: [&[(isize, isize)]; 10] = [
            &[(0, 0)],                            // monomino
            &[(0, 0), (1, 0)],                    // domino, flat
            &[(0, 0), (0, 1)],                    // domino, upright
            &[(0, 0), (1, 0), (2, 0)],            // tromino I
            &[(0, 0), (1, 0), (0, 1)],            // tromino L
            &[(0, 0), (1, 0), (0, 1), (1, 1)],    // square
            &[(0, -1), (0, 0), (0, 1), (1, 1)],   // L
            &[(0, -1), (0, 0), (0, 1), (0, 2)],   // I
            &[(-1, 0), (0, 0), (1, 0), (0, 1)],   // T
            &[(-1, 0), (0, 0), (0, 1), (1, 1)],   // S
        ];
        let shapes = cells
            .iter()
            .map(|cell| Shape::from_cells(cell).expect("stock shapes are non-empty"))
            .collect();
        ShapeLibrary { shapes }
    }

    /// The shapes in this library, in prefab order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The number of shapes in this library.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the library has no candidates at all.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
