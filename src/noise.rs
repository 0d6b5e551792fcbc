//! Noise buffer generator for the block glitch effect.
//!
//! A small RGBA grid at `screen / scale` resolution, regenerated
//! probabilistically per frame. Regeneration walks the grid row-major and
//! reuses the previous cell's color with probability `change_probability`,
//! which is what produces the horizontal block runs the glitch shader
//! displaces by.

use crate::rng::SplitMix64;

/// 2D grid of RGBA samples plus the scale it was last sized for.
#[derive(Debug, Clone)]
pub struct NoiseBuffer {
    pixels: Vec<[u8; 4]>,
    width: u32,
    height: u32,
    cached_scale: u32,
    rng: SplitMix64,
}

impl NoiseBuffer {
    /// Allocate a grid for `screen / scale` and fill it with an initial
    /// regeneration pass so every cell is defined from the start.
    pub fn new(scale: u32, screen_width: u32, screen_height: u32, seed: u64) -> Self {
        let scale = scale.max(1);
        let (width, height) = grid_dimensions(scale, screen_width, screen_height);
        let mut buffer = Self {
            pixels: vec![[0; 4]; (width * height) as usize],
            width,
            height,
            cached_scale: scale,
            rng: SplitMix64::from_seed(seed),
        };
        buffer.regenerate(0.0);
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cached_scale(&self) -> u32 {
        self.cached_scale
    }

    /// Read-only grid contents, row-major.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Reallocate for a changed scale, discarding old contents. A matching
    /// scale is a no-op. The fresh grid is zero-filled until the next
    /// regeneration, so cells are never left undefined.
    pub fn resize(&mut self, new_scale: u32, screen_width: u32, screen_height: u32) {
        let new_scale = new_scale.max(1);
        if new_scale == self.cached_scale {
            return;
        }
        let (width, height) = grid_dimensions(new_scale, screen_width, screen_height);
        self.pixels = vec![[0; 4]; (width * height) as usize];
        self.width = width;
        self.height = height;
        self.cached_scale = new_scale;
    }

    /// Rewrite every cell. The scan keeps a current color and, per cell,
    /// resamples it with probability `1 - change_probability`; higher values
    /// therefore mean longer identical runs along each row.
    pub fn regenerate(&mut self, change_probability: f32) {
        let mut color = self.random_color();
        for cell in &mut self.pixels {
            if self.rng.next_unit() > change_probability {
                color = [
                    self.rng.next_byte(),
                    self.rng.next_byte(),
                    self.rng.next_byte(),
                    self.rng.next_byte(),
                ];
            }
            *cell = color;
        }
    }

    /// Throttled per-frame refresh: one uniform draw decides whether this
    /// frame regenerates at all. Returns whether it did.
    pub fn maybe_regenerate(&mut self, update_probability: f32, change_probability: f32) -> bool {
        if self.rng.next_unit() > update_probability {
            self.regenerate(change_probability);
            true
        } else {
            false
        }
    }

    fn random_color(&mut self) -> [u8; 4] {
        [
            self.rng.next_byte(),
            self.rng.next_byte(),
            self.rng.next_byte(),
            self.rng.next_byte(),
        ]
    }
}

fn grid_dimensions(scale: u32, screen_width: u32, screen_height: u32) -> (u32, u32) {
    ((screen_width / scale).max(1), (screen_height / scale).max(1))
}

#[cfg(test)]
mod tests {
    use super::NoiseBuffer;

    #[test]
    fn dimensions_use_integer_division() {
        let buffer = NoiseBuffer::new(55, 1920, 1080, 0);
        assert_eq!((buffer.width(), buffer.height()), (34, 19));
        assert_eq!(buffer.pixels().len(), 34 * 19);
    }

    #[test]
    fn resize_to_new_scale_reallocates_and_discards() {
        let mut buffer = NoiseBuffer::new(55, 1920, 1080, 3);
        buffer.resize(60, 1920, 1080);
        assert_eq!((buffer.width(), buffer.height()), (32, 18));
        assert_eq!(buffer.cached_scale(), 60);
        // Discarded contents: zero-filled until regenerated.
        assert!(buffer.pixels().iter().all(|px| *px == [0; 4]));
    }

    #[test]
    fn resize_with_unchanged_scale_keeps_contents() {
        let mut buffer = NoiseBuffer::new(55, 1920, 1080, 3);
        let before = buffer.pixels().to_vec();
        buffer.resize(55, 1920, 1080);
        assert_eq!(buffer.pixels(), before.as_slice());
    }

    #[test]
    fn oversized_scale_floors_at_one_by_one() {
        let buffer = NoiseBuffer::new(4000, 1920, 1080, 0);
        assert_eq!((buffer.width(), buffer.height()), (1, 1));
    }

    #[test]
    fn change_probability_one_yields_a_single_run() {
        let mut buffer = NoiseBuffer::new(20, 640, 480, 11);
        buffer.regenerate(1.0);
        let first = buffer.pixels()[0];
        assert!(buffer.pixels().iter().all(|px| *px == first));
    }

    #[test]
    fn change_probability_zero_yields_independent_cells() {
        let mut buffer = NoiseBuffer::new(20, 640, 480, 11);
        buffer.regenerate(0.0);
        let runs = buffer
            .pixels()
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .count();
        // 32-bit colors: adjacent duplicates are vanishingly unlikely.
        assert_eq!(runs, 0);
    }

    #[test]
    fn regeneration_is_deterministic_per_seed() {
        let mut a = NoiseBuffer::new(30, 1280, 720, 99);
        let mut b = NoiseBuffer::new(30, 1280, 720, 99);
        a.regenerate(0.85);
        b.regenerate(0.85);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn maybe_regenerate_is_throttled_by_update_probability() {
        let mut buffer = NoiseBuffer::new(30, 1280, 720, 5);
        let regenerated = (0..1000)
            .filter(|_| buffer.maybe_regenerate(0.9, 0.85))
            .count();
        // Expect roughly 10% of frames to refresh.
        assert!(regenerated > 40 && regenerated < 250, "got {regenerated}");
    }

    #[test]
    fn maybe_regenerate_always_fires_at_zero_probability() {
        let mut buffer = NoiseBuffer::new(30, 1280, 720, 5);
        assert!(buffer.maybe_regenerate(0.0, 0.5));
    }
}
