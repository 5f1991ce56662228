//! In-memory pixel buffer.
use super::Rgb;
use anyhow::{anyhow, Result};
use std::path::Path;

/// A framebuffer of `0RGB` pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Frame {
    /// A black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels in the `0RGB` format.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        Rgb::from_u32(self.pixels[y * self.width + x])
    }

    /// Fills the whole frame.
    pub fn clear(&mut self, color: Rgb) {
        let c = color.to_u32();
        self.pixels.iter_mut().for_each(|p| *p = c);
    }

    /// Fills a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgb) {
        let c = color.to_u32();
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for yy in y.min(y1)..y1 {
            let row = yy * self.width;
            self.pixels[row + x.min(x1)..row + x1]
                .iter_mut()
                .for_each(|p| *p = c);
        }
    }

    /// Fills the ellipse inscribed in a rectangle, clipped to the frame.
    pub fn fill_ellipse(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let c = color.to_u32();
        let (rx, ry) = (w as f32 / 2.0, h as f32 / 2.0);
        let (cx, cy) = (x as f32 + rx, y as f32 + ry);
        for yy in y..(y + h).min(self.height) {
            for xx in x..(x + w).min(self.width) {
                let dx = (xx as f32 + 0.5 - cx) / rx;
                let dy = (yy as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.pixels[yy * self.width + xx] = c;
                }
            }
        }
    }

    /// Writes the frame as a PNG image.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let buf = self
            .pixels
            .iter()
            .flat_map(|&p| {
                let Rgb(r, g, b) = Rgb::from_u32(p);
                vec![r, g, b]
            })
            .collect::<Vec<_>>();
        let img = image::RgbImage::from_raw(self.width as u32, self.height as u32, buf)
            .ok_or_else(|| anyhow!("Frame buffer does not match {}x{}", self.width, self.height))?;
        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fill_rect_clipped() {
        let mut frame = Frame::new(4, 3);
        frame.fill_rect(2, 1, 10, 10, Rgb::WHITE);
        assert_eq!(frame.pixel(1, 1), Rgb::BLACK);
        assert_eq!(frame.pixel(2, 1), Rgb::WHITE);
        assert_eq!(frame.pixel(3, 2), Rgb::WHITE);
        assert_eq!(frame.pixel(3, 0), Rgb::BLACK);
    }

    #[test]
    fn test_fill_ellipse() {
        let mut frame = Frame::new(10, 10);
        frame.fill_ellipse(0, 0, 10, 10, Rgb::GREY);
        assert_eq!(frame.pixel(5, 5), Rgb::GREY);
        assert_eq!(frame.pixel(0, 0), Rgb::BLACK);
        assert_eq!(frame.pixel(9, 9), Rgb::BLACK);
    }
}
