use edgekit_image::PixelFormat;

/// Boundary policy for convolution.
///
/// Governs how pixels outside the image are synthesized, or whether the
/// output shrinks instead (`Crop`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideHandle {
    /// Outside pixels are zero bytes.
    Zeros,
    /// Outside pixels are 0xFF bytes.
    Ones,
    /// Outside pixels are black; on ARGB the alpha byte stays opaque.
    Black,
    /// Outside pixels are white.
    White,
    /// Replicate the nearest edge row/column.
    Continuous,
    /// Reflect pixel values across the edge.
    Mirror,
    /// Wrap around to the opposite edge.
    Repeat,
    /// No padding; the output shrinks by the kernel radius per side.
    Crop,
}

impl SideHandle {
    /// Map a possibly out-of-range source coordinate into the valid
    /// range `[0, n)`, or `None` for the constant-fill policies.
    ///
    /// Applied independently per axis; the column mapping reads data
    /// the row mapping already resolved, which matches the corner
    /// behavior of filling top/bottom rows before left/right columns.
    pub(crate) fn map_coord(&self, i: isize, n: usize) -> Option<usize> {
        let n = n as isize;
        if (0..n).contains(&i) {
            return Some(i as usize);
        }
        match self {
            SideHandle::Continuous => Some(i.clamp(0, n - 1) as usize),
            SideHandle::Mirror => {
                // Reflect about the edge without repeating the edge
                // pixel; clamp degenerate pads wider than the image.
                let r = if i < 0 { -i } else { 2 * (n - 1) - i };
                Some(r.clamp(0, n - 1) as usize)
            }
            SideHandle::Repeat => Some(i.rem_euclid(n) as usize),
            _ => None,
        }
    }

    /// The byte a constant-fill policy writes for the given channel.
    pub(crate) fn fill_value(&self, channel: usize, format: PixelFormat) -> u8 {
        match self {
            SideHandle::Zeros => 0,
            SideHandle::Black => {
                // Keep synthesized black pixels opaque on ARGB.
                if channel == 0 && format == PixelFormat::Argb {
                    0xFF
                } else {
                    0
                }
            }
            SideHandle::Ones | SideHandle::White => 0xFF,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_untouched() {
        for side in [
            SideHandle::Zeros,
            SideHandle::Continuous,
            SideHandle::Mirror,
            SideHandle::Repeat,
        ] {
            assert_eq!(side.map_coord(0, 5), Some(0));
            assert_eq!(side.map_coord(4, 5), Some(4));
        }
    }

    #[test]
    fn continuous_clamps() {
        assert_eq!(SideHandle::Continuous.map_coord(-3, 5), Some(0));
        assert_eq!(SideHandle::Continuous.map_coord(7, 5), Some(4));
    }

    #[test]
    fn mirror_reflects_across_edge() {
        assert_eq!(SideHandle::Mirror.map_coord(-1, 5), Some(1));
        assert_eq!(SideHandle::Mirror.map_coord(-2, 5), Some(2));
        assert_eq!(SideHandle::Mirror.map_coord(5, 5), Some(3));
        assert_eq!(SideHandle::Mirror.map_coord(6, 5), Some(2));
    }

    #[test]
    fn repeat_wraps() {
        assert_eq!(SideHandle::Repeat.map_coord(-1, 5), Some(4));
        assert_eq!(SideHandle::Repeat.map_coord(-5, 5), Some(0));
        assert_eq!(SideHandle::Repeat.map_coord(5, 5), Some(0));
        assert_eq!(SideHandle::Repeat.map_coord(6, 5), Some(1));
    }

    #[test]
    fn constant_policies_fill() {
        assert_eq!(SideHandle::Zeros.map_coord(-1, 5), None);
        assert_eq!(SideHandle::White.map_coord(5, 5), None);
        assert_eq!(SideHandle::Zeros.fill_value(0, PixelFormat::Rgb), 0);
        assert_eq!(SideHandle::White.fill_value(2, PixelFormat::Rgb), 0xFF);
        assert_eq!(SideHandle::Black.fill_value(0, PixelFormat::Argb), 0xFF);
        assert_eq!(SideHandle::Black.fill_value(1, PixelFormat::Argb), 0);
        assert_eq!(SideHandle::Black.fill_value(0, PixelFormat::Rgb), 0);
    }
}
