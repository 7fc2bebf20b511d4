use std::io::{self, Write};
use std::path::Path;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const BM_MAGIC: u16 = 0x4d42;

/// BITMAPFILEHEADER
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub bf_type: u16,
    pub bf_size: u32,
    pub bf_reserved: u32,
    pub bf_off_bits: u32,
}

impl FileHeader {
    pub fn from(pixel_array_size: usize) -> Self {
        Self {
            bf_type: BM_MAGIC,
            bf_size: FILE_HEADER_SIZE + INFO_HEADER_SIZE + pixel_array_size as u32,
            bf_reserved: 0,
            bf_off_bits: FILE_HEADER_SIZE + INFO_HEADER_SIZE,
        }
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bf_type.to_le_bytes())?;
        out.write_all(&self.bf_size.to_le_bytes())?;
        out.write_all(&self.bf_reserved.to_le_bytes())?;
        out.write_all(&self.bf_off_bits.to_le_bytes())
    }
}

/// BITMAPINFOHEADER for an uncompressed, top-down, 24-bit image
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InfoHeader {
    pub bi_size: u32,
    pub bi_width: i32,
    pub bi_height: i32,
    pub bi_planes: u16,
    pub bi_bit_count: u16,
    pub bi_compression: u32,
    pub bi_size_image: u32,
    pub bi_x_pels_per_meter: i32,
    pub bi_y_pels_per_meter: i32,
    pub bi_clr_used: u32,
    pub bi_clr_important: u32,
}

impl InfoHeader {
    pub fn from(width: usize, height: usize, pixel_array_size: usize) -> Self {
        Self {
            bi_size: INFO_HEADER_SIZE,
            bi_width: width as i32,
            // negative height: rows are stored top to bottom
            bi_height: -(height as i32),
            bi_planes: 1,
            bi_bit_count: 24,
            bi_compression: 0,
            bi_size_image: pixel_array_size as u32,
            bi_x_pels_per_meter: 2835,
            bi_y_pels_per_meter: 2835,
            bi_clr_used: 0,
            bi_clr_important: 0,
        }
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bi_size.to_le_bytes())?;
        out.write_all(&self.bi_width.to_le_bytes())?;
        out.write_all(&self.bi_height.to_le_bytes())?;
        out.write_all(&self.bi_planes.to_le_bytes())?;
        out.write_all(&self.bi_bit_count.to_le_bytes())?;
        out.write_all(&self.bi_compression.to_le_bytes())?;
        out.write_all(&self.bi_size_image.to_le_bytes())?;
        out.write_all(&self.bi_x_pels_per_meter.to_le_bytes())?;
        out.write_all(&self.bi_y_pels_per_meter.to_le_bytes())?;
        out.write_all(&self.bi_clr_used.to_le_bytes())?;
        out.write_all(&self.bi_clr_important.to_le_bytes())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Tightly packed BGR rows, `3 * width * height` bytes.
pub struct BMP<'a> {
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

impl<'a> BMP<'a> {
    pub fn from_mem(width: usize, height: usize, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    fn row_size(&self) -> usize {
        // rows are padded to 4 bytes
        (3 * self.width + 3) & !3
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let row_bytes = 3 * self.width;
        if self.pixels.len() != row_bytes * self.height {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "bmp: {}x{} image needs {} pixel bytes, got {}",
                    self.width,
                    self.height,
                    row_bytes * self.height,
                    self.pixels.len()
                ),
            ));
        }
        let row_size = self.row_size();
        let pixel_array_size = row_size * self.height;
        FileHeader::from(pixel_array_size).write_to(out)?;
        InfoHeader::from(self.width, self.height, pixel_array_size).write_to(out)?;

        let padding = vec![0u8; row_size - row_bytes];
        for row in self.pixels.chunks_exact(row_bytes.max(1)).take(self.height) {
            out.write_all(row)?;
            out.write_all(&padding)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(
            (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize + self.row_size() * self.height,
        );
        self.write_to(&mut out)?;
        Ok(out)
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        std::fs::write(filename, self.to_bytes()?)
    }
}

/// Owned drawing buffer that serializes through `BMP`.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    bgr: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Pixel) -> Self {
        let mut canvas = Self {
            width,
            height,
            bgr: vec![0; 3 * width * height],
        };
        canvas.fill_rect(0, 0, width, height, background);
        canvas
    }

    /// Fills the rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Pixel) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y.min(y_end)..y_end {
            for col in x.min(x_end)..x_end {
                self.set(col, row, color);
            }
        }
    }

    /// Out of range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Pixel) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = 3 * (y * self.width + x);
        self.bgr[i] = color.b;
        self.bgr[i + 1] = color.g;
        self.bgr[i + 2] = color.r;
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 3 * (y * self.width + x);
        Some(Pixel::rgb(self.bgr[i + 2], self.bgr[i + 1], self.bgr[i]))
    }

    pub fn as_bmp(&self) -> BMP<'_> {
        BMP::from_mem(self.width, self.height, &self.bgr)
    }
}
