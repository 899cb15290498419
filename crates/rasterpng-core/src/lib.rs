//! Rasterpng Core - In-memory PNG encoding library
//!
//! This crate converts raw pixel buffers (grayscale, RGB, or RGBA) into
//! complete PNG byte streams without touching the filesystem. Compression,
//! filter selection, and chunk framing are delegated to the `image` crate's
//! PNG encoder; this crate supplies the geometry validation, the
//! bits-per-pixel to color-type mapping, and a fixed-capacity memory sink
//! that receives the encoder's output.
//!
//! The two entry points are [`encode_png_into`], which writes into a
//! caller-supplied buffer and returns the byte count, and [`encode_png`],
//! which allocates and returns an owned vector.

pub mod encode;
pub mod sink;

pub use encode::{encode_png, encode_png_into, EncodeError, PixelFormat};
pub use sink::MemorySink;
