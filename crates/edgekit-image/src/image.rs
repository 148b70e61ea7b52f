use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use edgekit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Pixel layout of an image buffer.
///
/// Exactly three interleaved 8-bit layouts are supported. `Argb` stores
/// the alpha byte first (A,R,G,B), `Rgb` stores R,G,B, and `Indexed8`
/// stores one palette index per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 3 bytes per pixel: R, G, B.
    Rgb,
    /// 4 bytes per pixel: A, R, G, B.
    Argb,
    /// 1 byte per pixel, resolved through a 256-entry palette.
    Indexed8,
}

impl PixelFormat {
    /// Number of bytes used by one pixel in this layout.
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Argb => 4,
            PixelFormat::Indexed8 => 1,
        }
    }
}

/// A 256-entry color table for `Indexed8` images, packed as 0xAARRGGBB.
pub type Palette = [u32; 256];

/// Build the opaque grayscale ramp palette where entry `i` maps to the
/// gray level `i`.
pub fn grayscale_palette() -> Palette {
    let mut palette = [0u32; 256];
    for (i, entry) in palette.iter_mut().enumerate() {
        let i = i as u32;
        *entry = 0xFF00_0000 | (i << 16) | (i << 8) | i;
    }
    palette
}

/// Represents an image with owned pixel data.
///
/// The pixel data is a flat, row-major byte buffer whose layout is
/// described by the [`PixelFormat`]. Images are value types: every
/// processing operation produces a freshly owned output and never
/// mutates its input.
#[derive(Clone, Debug)]
pub struct Image {
    size: ImageSize,
    format: PixelFormat,
    data: Vec<u8>,
    palette: Option<Box<Palette>>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// `Indexed8` images get the opaque grayscale ramp palette; use
    /// [`Image::new_with_palette`] to attach a custom color table.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `format` - The pixel layout of `data`.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size,
    /// an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{Image, ImageSize, PixelFormat};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     PixelFormat::Rgb,
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, format: PixelFormat, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.width * size.height * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(ImageError::InvalidPixelBuffer(data.len(), expected));
        }

        let palette = match format {
            PixelFormat::Indexed8 => Some(Box::new(grayscale_palette())),
            _ => None,
        };

        Ok(Self {
            size,
            format,
            data,
            palette,
        })
    }

    /// Create a new `Indexed8` image with an explicit palette.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size,
    /// an error is returned.
    pub fn new_with_palette(
        size: ImageSize,
        data: Vec<u8>,
        palette: Palette,
    ) -> Result<Self, ImageError> {
        let mut image = Self::new(size, PixelFormat::Indexed8, data)?;
        image.palette = Some(Box::new(palette));
        Ok(image)
    }

    /// Create a new image with the given size and constant pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{Image, ImageSize, PixelFormat};
    ///
    /// let image = Image::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     PixelFormat::Indexed8,
    ///     0u8,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.num_channels(), 1);
    /// assert!(image.palette().is_some());
    /// ```
    pub fn from_size_val(size: ImageSize, format: PixelFormat, val: u8) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height * format.bytes_per_pixel()];
        Image::new(size, format, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the pixel layout of the image.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of bytes per pixel, which equals the number of
    /// interleaved channels for the non-indexed layouts.
    pub fn num_channels(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Get the palette of the image, present only for `Indexed8`.
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_deref()
    }

    /// Replace the palette of an `Indexed8` image.
    ///
    /// # Errors
    ///
    /// Returns an error for non-indexed layouts, where a palette is
    /// meaningless.
    pub fn set_palette(&mut self, palette: Palette) -> Result<(), ImageError> {
        if self.format != PixelFormat::Indexed8 {
            return Err(ImageError::PaletteNotSupported(self.format));
        }
        self.palette = Some(Box::new(palette));
        Ok(())
    }

    /// Get the pixel data as a flat byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the pixel data as a mutable flat byte slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return the owned pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get one channel byte of the pixel at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index within the pixel layout.
    ///
    /// # Errors
    ///
    /// If the coordinates or the channel index are out of bounds, an
    /// error is returned.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<u8, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        let bpp = self.format.bytes_per_pixel();
        if ch >= bpp {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, bpp));
        }

        Ok(self.data[(y * self.width() + x) * bpp + ch])
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{grayscale_palette, Image, ImageError, ImageSize, PixelFormat};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            PixelFormat::Rgb,
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);
        assert!(image.palette().is_none());

        Ok(())
    }

    #[test]
    fn image_wrong_buffer_size() {
        let image = Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            PixelFormat::Argb,
            vec![0u8; 10],
        );
        assert!(matches!(
            image,
            Err(ImageError::InvalidPixelBuffer(10, 24))
        ));
    }

    #[test]
    fn indexed_gets_grayscale_palette() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            PixelFormat::Indexed8,
            0,
        )?;
        let palette = image.palette().expect("indexed image has a palette");
        assert_eq!(palette[0], 0xFF000000);
        assert_eq!(palette[128], 0xFF808080);
        assert_eq!(palette[255], 0xFFFFFFFF);

        Ok(())
    }

    #[test]
    fn custom_palette_roundtrip() -> Result<(), ImageError> {
        let mut palette = grayscale_palette();
        palette[1] = 0xFFFF0000;
        let image = Image::new_with_palette(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 1, 0],
            palette,
        )?;
        assert_eq!(image.palette().map(|p| p[1]), Some(0xFFFF0000));

        Ok(())
    }

    #[test]
    fn palette_rejected_for_rgb() -> Result<(), ImageError> {
        let mut image = Image::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            PixelFormat::Rgb,
            0,
        )?;
        assert!(matches!(
            image.set_palette(grayscale_palette()),
            Err(ImageError::PaletteNotSupported(PixelFormat::Rgb))
        ));

        Ok(())
    }

    #[test]
    fn image_get_pixel() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            PixelFormat::Rgb,
            vec![0, 1, 2, 3, 4, 5],
        )?;
        assert_eq!(image.get_pixel(0, 1, 2)?, 5);
        assert!(image.get_pixel(1, 0, 0).is_err());
        assert!(image.get_pixel(0, 0, 3).is_err());

        Ok(())
    }
}
