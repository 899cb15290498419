//! PNG encoding into caller-owned memory.
//!
//! This module provides PNG encoding using the `image` crate's PNG encoder.
//! The encoder writes the complete stream (signature, IHDR, IDAT, IEND) into
//! a pre-sized buffer supplied by the caller and reports the number of bytes
//! written, so the output never goes near a file descriptor.

use std::io;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sink::MemorySink;

/// Every complete PNG stream ends with an empty IEND chunk.
const IEND_CHUNK: [u8; 12] = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Bits per pixel is not one of the supported layouts
    #[error("Unsupported bit depth: {0} bits per pixel (supported: 8, 24, 32)")]
    UnsupportedBitDepth(u8),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * bytes per pixel), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The caller-supplied output buffer could not hold the encoded stream
    #[error("Output buffer too small: {capacity} bytes could not hold the encoded stream")]
    BufferOverflow { capacity: usize },

    /// PNG encoding failed inside the engine
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Pixel layout of an input buffer, derived from its bits-per-pixel value.
///
/// The depth fully determines the channel count; every supported layout is
/// 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8 bits per pixel: one gray channel.
    Gray8,
    /// 24 bits per pixel: 8-bit red, green, blue channels.
    Rgb8,
    /// 32 bits per pixel: 8-bit red, green, blue, alpha channels.
    Rgba8,
}

impl PixelFormat {
    /// Map a bits-per-pixel value onto a pixel layout.
    ///
    /// Returns `None` for any depth other than 8, 24, or 32.
    pub fn from_bits_per_pixel(bits: u8) -> Option<Self> {
        match bits {
            8 => Some(PixelFormat::Gray8),
            24 => Some(PixelFormat::Rgb8),
            32 => Some(PixelFormat::Rgba8),
            _ => None,
        }
    }

    /// Bits per pixel of this layout.
    #[inline]
    pub fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Gray8 => 8,
            PixelFormat::Rgb8 => 24,
            PixelFormat::Rgba8 => 32,
        }
    }

    /// Bytes per pixel of this layout.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.bits_per_pixel() as usize / 8
    }

    /// Convert to the image crate's color type.
    pub fn to_color_type(self) -> ExtendedColorType {
        match self {
            PixelFormat::Gray8 => ExtendedColorType::L8,
            PixelFormat::Rgb8 => ExtendedColorType::Rgb8,
            PixelFormat::Rgba8 => ExtendedColorType::Rgba8,
        }
    }

    /// Conservative upper bound on the encoded PNG size for an image of the
    /// given dimensions in this layout.
    ///
    /// The bound covers the filtered image (one filter byte per row), the
    /// worst case of deflate expanding incompressible data (a Huffman
    /// literal can cost up to 15 bits per byte), and the fixed overhead of
    /// the signature plus IHDR/IDAT/IEND framing. A buffer of this size is
    /// always large enough for [`encode_png_into`].
    pub fn max_encoded_len(self, width: u32, height: u32) -> usize {
        let row = width as usize * self.bytes_per_pixel() + 1;
        let filtered = row * height as usize;
        filtered * 2 + 1024
    }
}

/// Encode a raw pixel buffer as PNG into a caller-supplied buffer.
///
/// The complete PNG stream is appended to `out` starting at offset zero and
/// the number of bytes written is returned. Bytes of `out` past the returned
/// length are left untouched. The caller is responsible for sizing `out`;
/// [`PixelFormat::max_encoded_len`] gives a bound that always suffices.
///
/// # Arguments
///
/// * `pixels` - Pixel data, row-major, no padding between rows
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `bits_per_pixel` - 8 (grayscale), 24 (RGB), or 32 (RGBA)
/// * `out` - Caller-sized output buffer for the encoded stream
///
/// # Returns
///
/// The number of bytes of `out` occupied by the PNG stream.
///
/// # Errors
///
/// Returns `UnsupportedBitDepth` for any depth other than 8/24/32,
/// `InvalidDimensions` if `width` or `height` is zero, `InvalidPixelData`
/// if `pixels` doesn't match the declared geometry, `BufferOverflow` if
/// `out` is too small for the encoded stream, and `EncodingFailed` for any
/// other fault inside the engine. After `BufferOverflow` or
/// `EncodingFailed`, `out` may hold a partial, non-decodable stream.
///
/// # Example
///
/// ```ignore
/// use rasterpng_core::encode::{encode_png_into, PixelFormat};
///
/// let pixels = [10u8, 20, 30, 40]; // 2x2 grayscale
/// let mut out = vec![0u8; PixelFormat::Gray8.max_encoded_len(2, 2)];
/// let len = encode_png_into(&pixels, 2, 2, 8, &mut out).unwrap();
/// assert_eq!(&out[..4], &[0x89, b'P', b'N', b'G']);
/// assert!(len > 0);
/// ```
pub fn encode_png_into(
    pixels: &[u8],
    width: u32,
    height: u32,
    bits_per_pixel: u8,
    out: &mut [u8],
) -> Result<usize, EncodeError> {
    let format = PixelFormat::from_bits_per_pixel(bits_per_pixel)
        .ok_or(EncodeError::UnsupportedBitDepth(bits_per_pixel))?;

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length against the declared geometry. Row i of the
    // image starts at byte offset i * width * bytes_per_pixel.
    let expected_len = (width as usize) * (height as usize) * format.bytes_per_pixel();
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let capacity = out.len();
    let written = {
        let mut sink = MemorySink::new(out);

        // No interlacing, default compression and filter heuristics.
        let encoder = PngEncoder::new(&mut sink);
        encoder
            .write_image(pixels, width, height, format.to_color_type())
            .map_err(|e| match e {
                image::ImageError::IoError(io_err)
                    if io_err.kind() == io::ErrorKind::WriteZero =>
                {
                    EncodeError::BufferOverflow { capacity }
                }
                other => EncodeError::EncodingFailed(other.to_string()),
            })?;

        sink.bytes_written()
    };

    // The engine emits the closing IEND chunk during writer teardown, where
    // a full sink cannot surface a write error, so completeness is verified
    // here rather than trusted.
    if !out[..written].ends_with(&IEND_CHUNK) {
        return Err(EncodeError::BufferOverflow { capacity });
    }

    Ok(written)
}

/// Encode a raw pixel buffer as PNG into an owned byte vector.
///
/// Convenience wrapper over [`encode_png_into`] that allocates a worst-case
/// buffer itself and truncates it to the encoded length.
///
/// # Example
///
/// ```ignore
/// use rasterpng_core::encode::encode_png;
///
/// let pixels = [255u8, 0, 0, 128]; // 1x1 semi-transparent red
/// let png = encode_png(&pixels, 1, 1, 32).unwrap();
/// assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    bits_per_pixel: u8,
) -> Result<Vec<u8>, EncodeError> {
    let format = PixelFormat::from_bits_per_pixel(bits_per_pixel)
        .ok_or(EncodeError::UnsupportedBitDepth(bits_per_pixel))?;

    let mut out = vec![0u8; format.max_encoded_len(width, height)];
    let len = encode_png_into(pixels, width, height, bits_per_pixel, &mut out)?;
    out.truncate(len);
    Ok(out)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
