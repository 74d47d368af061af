#![forbid(unsafe_code)]

//! Fire palette: transparent black through deep red, orange, yellow, to white.

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 34;

/// Hottest intensity (index of the white entry).
pub const MAX_INTENSITY: u8 = (PALETTE_SIZE - 1) as u8;

/// The fire palette, coldest first. Entry 0 is always rendered transparent.
pub const PALETTE: [Rgb; PALETTE_SIZE] = [
    (7, 7, 7),       // 0: cold (transparent)
    (31, 7, 7),      // 1
    (47, 15, 7),     // 2
    (71, 15, 7),     // 3
    (87, 23, 7),     // 4
    (103, 31, 7),    // 5
    (119, 31, 7),    // 6
    (143, 39, 7),    // 7
    (159, 47, 7),    // 8
    (175, 63, 7),    // 9
    (191, 71, 7),    // 10
    (199, 71, 7),    // 11
    (223, 79, 7),    // 12
    (223, 87, 7),    // 13
    (223, 95, 7),    // 14
    (215, 103, 15),  // 15
    (207, 111, 15),  // 16
    (207, 119, 15),  // 17
    (207, 127, 15),  // 18
    (207, 135, 23),  // 19
    (199, 135, 23),  // 20
    (199, 143, 23),  // 21
    (199, 151, 31),  // 22
    (191, 159, 31),  // 23
    (191, 159, 31),  // 24
    (191, 167, 39),  // 25
    (191, 167, 39),  // 26
    (191, 175, 47),  // 27
    (183, 175, 47),  // 28
    (183, 183, 47),  // 29
    (183, 183, 55),  // 30
    (223, 223, 159), // 31
    (239, 239, 223), // 32
    (255, 255, 255), // 33: white
];

/// Colour for an intensity. Out-of-range values saturate at white.
#[inline]
pub fn color(intensity: u8) -> Rgb {
    PALETTE[usize::from(intensity.min(MAX_INTENSITY))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hottest_is_white() {
        assert_eq!(color(MAX_INTENSITY), (255, 255, 255));
        assert_eq!(MAX_INTENSITY, 33);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(color(200), color(MAX_INTENSITY));
    }

    #[test]
    fn brightness_roughly_rises() {
        let luma = |(r, g, b): Rgb| u32::from(r) + u32::from(g) + u32::from(b);
        assert!(luma(PALETTE[0]) < luma(PALETTE[10]));
        assert!(luma(PALETTE[10]) < luma(PALETTE[20]));
        assert!(luma(PALETTE[20]) < luma(PALETTE[33]));
    }
}
