use crate::render::Color;

/// RGB values of red, lime, deepskyblue, darkorange, gold, blueviolet,
/// magenta, tan, navy.
const BALL_PALETTE_RGB8: [(u8, u8, u8); 9] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 191, 255),
    (255, 140, 0),
    (255, 215, 0),
    (138, 43, 226),
    (255, 0, 255),
    (210, 180, 140),
    (0, 0, 128),
];

/// Color for ball `index`; the palette repeats after nine balls.
#[must_use]
pub fn ball_color(index: usize) -> Color {
    let (red, green, blue) = BALL_PALETTE_RGB8[index % BALL_PALETTE_RGB8.len()];
    Color::from_rgb8(red, green, blue)
}

#[must_use]
pub fn ball_palette_len() -> usize {
    BALL_PALETTE_RGB8.len()
}
