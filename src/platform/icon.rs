//! Window Icon
//!
//! Paints the taskbar icon at startup instead of embedding rgba blobs:
//! an S-coiled snake and an apple on a dark tile, scaled from one 8x8
//! motif to the three sizes miniquad wants.

use macroquad::miniquad::conf::Icon;

type Rgba = [u8; 4];

const TILE: Rgba = [24, 30, 24, 255];
const BODY: Rgba = [80, 170, 60, 255];
const HEAD: Rgba = [130, 210, 90, 255];
const APPLE: Rgba = [205, 40, 40, 255];

/// `b` body, `h` head, `a` apple, `.` tile.
const MOTIF: [[u8; 8]; 8] = [
    *b"........",
    *b".bbbbb..",
    *b".....b..",
    *b".bbbbb..",
    *b".b......",
    *b".bbbbh..",
    *b"......a.",
    *b"........",
];

pub fn window_icon() -> Icon {
    let mut small = [0u8; 16 * 16 * 4];
    let mut medium = [0u8; 32 * 32 * 4];
    let mut big = [0u8; 64 * 64 * 4];
    paint(16, &mut small);
    paint(32, &mut medium);
    paint(64, &mut big);
    Icon { small, medium, big }
}

fn paint(side: usize, buf: &mut [u8]) {
    for y in 0..side {
        for x in 0..side {
            let color = match MOTIF[y * 8 / side][x * 8 / side] {
                b'b' => BODY,
                b'h' => HEAD,
                b'a' => APPLE,
                _ => TILE,
            };
            let at = (y * side + x) * 4;
            buf[at..at + 4].copy_from_slice(&color);
        }
    }
}
