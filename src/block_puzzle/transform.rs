use crate::block_puzzle::prelude::*;

/// The orientation of a piece: a quarter-turn count plus a horizontal mirror flag.
///
/// Application order is a contract: the reflection (negating x, a mirror parallel
/// to the y-axis) is applied *before* the rotation. Flip-then-rotate and
/// rotate-then-flip are not interchangeable for asymmetric shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transform {
    steps: u8,
    flipped: bool,
}

impl Transform {
    /// The null transformation.
    pub fn identity() -> Transform {
        Transform { steps: 0, flipped: false }
    }

    /// Constructs a transform; quarter turns are reduced mod 4.
    pub fn new(steps: u8, flipped: bool) -> Transform {
        Transform { steps: steps % 4, flipped }
    }

    /// The number of counter-clockwise quarter turns, always in 0..4.
    pub fn steps(&self) -> u8 {
        self.steps
    }

    /// Whether the mirror is applied before the turns.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// True iff applying this transform leaves every offset unchanged,
    /// i.e. an effective rotation of 0 degrees mod 360 and no mirror.
    pub fn is_identity(&self) -> bool {
        self.steps == 0 && !self.flipped
    }

    /// Returns the transform given by rotating this one a quarter turn further.
    pub fn rotate(&self) -> Transform {
        Transform {
            steps: (self.steps + 1) % 4,
            flipped: self.flipped,
        }
    }

    /// Returns the transform given by mirroring this one as currently seen.
    ///
    /// Post-composing the reflection sends `R^s . F^f` to `R^(4-s) . F^(1-f)`,
    /// which is what a player watching the piece expects a flip to do.
    pub fn flip(&self) -> Transform {
        Transform {
            steps: (4 - self.steps) % 4,
            flipped: !self.flipped,
        }
    }

    /// Applies the transform to a single offset: mirror first, then rotate.
    ///
    /// The rotation is the standard 2D matrix at `steps * 90` degrees; on integer
    /// lattice offsets the matrix is exact, so each step is the closed-form match
    /// below rather than a cos/sin product that would need rounding. One step is
    /// counter-clockwise in the y-up world space: (1, 0) goes to (0, 1).
    pub fn apply_one(&self, offset: &Offset) -> Offset {
        let Offset { x, y } = *offset;
        let [x, y] = match self.flipped {
            true => [-x, y],
            false => [x, y],
        };
        match self.steps {
            0 => Offset::new(x, y),
            1 => Offset::new(-y, x),
            2 => Offset::new(-x, -y),
            _ => Offset::new(y, -x),
        }
    }

    /// Applies the transform to every offset of a shape, preserving order.
    pub fn apply(&self, offsets: &[Offset]) -> Vec<Offset> {
        offsets.iter().map(|offset| self.apply_one(offset)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMINO: [Offset; 2] = [Offset { x: 0, y: 0 }, Offset { x: 1, y: 0 }];
    const BENT: [Offset; 3] = [
        Offset { x: 0, y: 0 },
        Offset { x: 1, y: 0 },
        Offset { x: 1, y: 1 },
    ];

    #[test]
    fn four_turns_are_identity() {
        let mut transform = Transform::identity();
        for _ in 0..4 {
            transform = transform.rotate();
        }
        assert_eq!(transform, Transform::identity());
        assert_eq!(Transform::new(4, false).apply(&BENT), BENT.to_vec());
    }

    #[test]
    fn double_flip_is_identity() {
        let transform = Transform::identity().flip().flip();
        assert!(transform.is_identity());

        let mirrored = Transform::new(0, true).apply(&BENT);
        let restored = Transform::new(0, true).apply(&mirrored);
        assert_eq!(restored, BENT.to_vec());
    }

    #[test]
    fn one_turn_pins_the_sign_convention() {
        // A 1x2 domino rotated one step stands upright: (1, 0) -> (0, 1).
        let turned = Transform::new(1, false).apply(&DOMINO);
        assert_eq!(turned, vec![Offset::new(0, 0), Offset::new(0, 1)]);
    }

    #[test]
    fn flip_negates_x_before_rotation() {
        let mirrored = Transform::new(0, true).apply(&BENT);
        assert_eq!(
            mirrored,
            vec![Offset::new(0, 0), Offset::new(-1, 0), Offset::new(-1, 1)]
        );
    }

    #[test]
    fn flip_then_rotate_is_not_rotate_then_flip() {
        // Flip first, then one turn.
        let flip_first = Transform::new(1, true).apply(&BENT);
        // One turn, then mirror the result.
        let rotate_first = Transform::new(0, true).apply(&Transform::new(1, false).apply(&BENT));
        assert_ne!(flip_first, rotate_first);
    }

    #[test]
    fn flip_post_composes_the_mirror() {
        // Flipping a turned transform must mirror what the player currently sees.
        let turned = Transform::new(1, false);
        let seen_then_mirrored: Vec<Offset> = turned
            .apply(&BENT)
            .iter()
            .map(|offset| Offset::new(-offset.x, offset.y))
            .collect();
        assert_eq!(turned.flip().apply(&BENT), seen_then_mirrored);
        assert_eq!(turned.flip(), Transform::new(3, true));
    }
}
