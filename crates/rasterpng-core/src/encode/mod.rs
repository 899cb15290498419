//! Image encoding pipeline for Rasterpng.
//!
//! This module provides functionality for:
//! - Encoding raw pixel buffers (grayscale, RGB, RGBA) to PNG, entirely in
//!   memory
//!
//! # Architecture
//!
//! Compression, filter selection, and chunk framing are delegated to the
//! `image` crate's PNG encoder. This module validates the pixel buffer
//! against the declared geometry, maps the bits-per-pixel convention onto
//! the encoder's color types, and directs the encoder's output into a
//! caller-owned buffer through [`crate::sink::MemorySink`].
//!
//! # Examples
//!
//! ```ignore
//! use rasterpng_core::encode::encode_png;
//!
//! let pixels = vec![128u8; 100 * 100]; // Gray image
//! let png_bytes = encode_png(&pixels, 100, 100, 8).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, encode_png_into, EncodeError, PixelFormat};
