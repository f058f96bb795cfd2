//! Minimal solid-color PNG encoder.
//!
//! Produces a complete, standards-compliant PNG in memory for a uniform
//! opaque RGB fill: signature, IHDR, one zlib-compressed IDAT, IEND. Every
//! chunk is framed as `length || type || payload || crc` with the CRC
//! computed over type + payload, so the output passes strict readers.
//! Writing the buffer anywhere is the caller's job; this module does no I/O.

use anyhow::{ensure, Context, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;
use std::sync::OnceLock;

/// Fixed 8-byte signature every PNG file begins with.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Fill color for a generated icon. Pixels are fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Encode a `width` × `height` PNG where every pixel is `color`.
///
/// The result is byte-identical across calls with the same arguments.
/// Dimensions must both be at least 1; no clamping is attempted.
pub fn encode(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>> {
    ensure!(
        width >= 1 && height >= 1,
        "invalid icon geometry {width}x{height}: width and height must both be at least 1"
    );

    // IHDR: geometry plus the fixed encoding parameters (8-bit depth,
    // truecolor RGB, no interlace).
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(2); // color type: truecolor RGB
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace: none

    // Raw scanlines: filter byte 0 (None) then `width` copies of the fill.
    let row_bytes = 1 + width as usize * 3;
    let mut raw = Vec::with_capacity(row_bytes * height as usize);
    for _ in 0..height {
        raw.push(0);
        for _ in 0..width {
            raw.extend_from_slice(&[color.r, color.g, color.b]);
        }
    }

    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(row_bytes + 64),
        Compression::default(),
    );
    encoder
        .write_all(&raw)
        .context("Failed to compress scanline data")?;
    let compressed = encoder
        .finish()
        .context("Failed to compress scanline data")?;

    let mut png = Vec::with_capacity(compressed.len() + 64);
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &compressed);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Append one framed chunk: length (4B BE), type, payload, CRC (4B BE).
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], payload: &[u8]) {
    // Chunk lengths are 32-bit in the format; icon payloads never get close.
    debug_assert!(payload.len() <= u32::MAX as usize);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(payload);
    let crc = crc32(chunk_type.iter().chain(payload));
    out.extend_from_slice(&crc.to_be_bytes());
}

/// Reflected CRC-32 (polynomial 0xEDB88320), as PNG and zlib use it.
fn crc32<'a>(bytes: impl IntoIterator<Item = &'a u8>) -> u32 {
    let table = crc_table();
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc = table[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ 0xFFFF_FFFF
}

fn crc_table() -> &'static [u32; 256] {
    static TABLE: OnceLock<[u32; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (n, entry) in table.iter_mut().enumerate() {
            let mut c = n as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 {
                    0xEDB8_8320 ^ (c >> 1)
                } else {
                    c >> 1
                };
            }
            *entry = c;
        }
        table
    })
}
