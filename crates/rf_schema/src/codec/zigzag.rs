/// Map a signed integer onto an unsigned one so that values close to zero,
/// of either sign, stay small: `0 -> 0`, `-1 -> 1`, `1 -> 2`, `-2 -> 3` ...
///
/// # Examples
///
/// ```
/// use rf_schema::codec::zigzag_encode;
///
/// assert_eq!(zigzag_encode(0), 0);
/// assert_eq!(zigzag_encode(-1), 1);
/// assert_eq!(zigzag_encode(1), 2);
/// assert_eq!(zigzag_encode(i32::MIN), u32::MAX);
/// ```
#[inline]
pub const fn zigzag_encode(n: i32) -> u32 {
    // `>>` on i32 is arithmetic: the sign bit fills the word.
    ((n >> 31) ^ (n << 1)) as u32
}

/// Inverse of [`zigzag_encode`].
///
/// # Examples
///
/// ```
/// use rf_schema::codec::zigzag_decode;
///
/// assert_eq!(zigzag_decode(3), -2);
/// assert_eq!(zigzag_decode(4), 2);
/// ```
#[inline]
pub const fn zigzag_decode(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::{zigzag_decode, zigzag_encode};

    #[test]
    fn small_values_interleave() {
        let encoded: Vec<u32> = [0, -1, 1, -2, 2].into_iter().map(zigzag_encode).collect();
        assert_eq!(encoded, [0, 1, 2, 3, 4]);
        assert_eq!(zigzag_encode(300), 600);
    }

    #[test]
    fn extremes() {
        assert_eq!(zigzag_encode(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag_encode(i32::MIN), u32::MAX);
        assert_eq!(zigzag_decode(u32::MAX), i32::MIN);
        assert_eq!(zigzag_decode(u32::MAX - 1), i32::MAX);
    }

    #[test]
    fn bijection() {
        // Dense around zero, strided across the rest of the range.
        for i in -(1 << 20)..(1 << 20) {
            assert_eq!(zigzag_decode(zigzag_encode(i)), i);
        }
        let mut i = i32::MIN;
        while i < i32::MAX - 65_521 {
            assert_eq!(zigzag_decode(zigzag_encode(i)), i);
            i += 65_521;
        }
    }
}
