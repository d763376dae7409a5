/// One horse jump: the final offset and the single leg point that must be
/// empty, both relative to the horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorseJump {
    pub offset: (i8, i8),
    pub leg: (i8, i8),
}

/// The leg is the first orthogonal step along the longer axis of the jump.
pub const HORSE_JUMPS: [HorseJump; 8] = [
    HorseJump { offset: (2, 1), leg: (1, 0) },
    HorseJump { offset: (2, -1), leg: (1, 0) },
    HorseJump { offset: (-2, 1), leg: (-1, 0) },
    HorseJump { offset: (-2, -1), leg: (-1, 0) },
    HorseJump { offset: (1, 2), leg: (0, 1) },
    HorseJump { offset: (1, -2), leg: (0, -1) },
    HorseJump { offset: (-1, 2), leg: (0, 1) },
    HorseJump { offset: (-1, -2), leg: (0, -1) },
];

#[cfg(test)]
mod tests {
    use super::HORSE_JUMPS;

    #[test]
    fn every_leg_points_along_the_long_axis() {
        for jump in HORSE_JUMPS {
            let (d_col, d_row) = jump.offset;
            assert_eq!(d_col.abs() + d_row.abs(), 3);
            if d_col.abs() == 2 {
                assert_eq!(jump.leg, (d_col.signum(), 0));
            } else {
                assert_eq!(jump.leg, (0, d_row.signum()));
            }
        }
    }
}
