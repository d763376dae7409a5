/// One elephant jump: the final offset plus the orthogonal first leg and
/// the diagonal second leg, all relative to the elephant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElephantJump {
    pub offset: (i8, i8),
    pub legs: [(i8, i8); 2],
}

pub const ELEPHANT_JUMPS: [ElephantJump; 8] = [
    ElephantJump { offset: (2, 3), legs: [(0, 1), (1, 2)] },
    ElephantJump { offset: (2, -3), legs: [(0, -1), (1, -2)] },
    ElephantJump { offset: (-2, 3), legs: [(0, 1), (-1, 2)] },
    ElephantJump { offset: (-2, -3), legs: [(0, -1), (-1, -2)] },
    ElephantJump { offset: (3, 2), legs: [(1, 0), (2, 1)] },
    ElephantJump { offset: (3, -2), legs: [(1, 0), (2, -1)] },
    ElephantJump { offset: (-3, 2), legs: [(-1, 0), (-2, 1)] },
    ElephantJump { offset: (-3, -2), legs: [(-1, 0), (-2, -1)] },
];

#[cfg(test)]
mod tests {
    use super::ELEPHANT_JUMPS;

    #[test]
    fn legs_trace_one_orthogonal_then_two_diagonal_steps() {
        for jump in ELEPHANT_JUMPS {
            let [first, second] = jump.legs;
            assert_eq!(first.0.abs() + first.1.abs(), 1);
            // second leg is one diagonal step beyond the first
            assert_eq!((second.0 - first.0).abs(), 1);
            assert_eq!((second.1 - first.1).abs(), 1);
            // and the destination one more diagonal step in the same direction
            assert_eq!(jump.offset.0 - second.0, second.0 - first.0);
            assert_eq!(jump.offset.1 - second.1, second.1 - first.1);
        }
    }
}
