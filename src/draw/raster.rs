//! Persistent pixel surface that accumulates everything drawn.

use thiserror::Error;

/// Default raster width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default raster height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Errors raised while allocating a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo surface allocation failed: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Fixed-size ARGB raster backing the drawing surface.
///
/// The raster is the only record of what has been drawn: there is no
/// structured shape list behind it.
pub struct Raster {
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
}

impl Raster {
    /// Allocates a transparent raster of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(RasterError::InvalidSize { width, height });
        }

        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` lies on the raster.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }

    /// Backing Cairo surface.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Opens a fresh drawing context over the raster.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        cairo::Context::new(&self.surface)
    }

    /// Wipes every pixel back to transparent.
    pub fn clear(&self) {
        if let Ok(ctx) = self.context() {
            clear_context(&ctx);
        }
    }

    /// Alpha value (0-255) of the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.with_pixels(|data, stride| {
            let offset = y as usize * stride + x as usize * 4;
            alpha_of(&data[offset..offset + 4])
        })
    }

    /// Returns `true` if any pixel has been painted.
    pub fn has_ink(&self) -> bool {
        self.count_inked_pixels() > 0
    }

    /// Counts pixels with non-zero alpha.
    pub fn count_inked_pixels(&self) -> usize {
        let row_bytes = self.width as usize * 4;
        self.with_pixels(|data, stride| {
            data.chunks(stride)
                .map(|row| {
                    row[..row_bytes]
                        .chunks_exact(4)
                        .filter(|px| alpha_of(px) != 0)
                        .count()
                })
                .sum()
        })
        .unwrap_or(0)
    }

    /// Runs `f` over a private copy of the pixel data.
    ///
    /// The live surface may still be referenced by the drawing context, which
    /// makes Cairo refuse direct data access, so the pixels are copied first.
    fn with_pixels<T>(&self, f: impl FnOnce(&[u8], usize) -> T) -> Option<T> {
        let mut copy = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.width as i32,
            self.height as i32,
        )
        .ok()?;
        {
            let ctx = cairo::Context::new(&copy).ok()?;
            ctx.set_source_surface(&self.surface, 0.0, 0.0).ok()?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.paint().ok()?;
        }
        copy.flush();
        let stride = copy.stride() as usize;
        let data = copy.data().ok()?;
        Some(f(&data, stride))
    }
}

// ARGB32 stores each pixel as a native-endian u32
fn alpha_of(px: &[u8]) -> u8 {
    (u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) >> 24) as u8
}

/// Clears the whole target of `ctx` to transparent without disturbing its state.
pub fn clear_context(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}
