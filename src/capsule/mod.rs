//! Flashback name extraction from firmware capsules.
//!
//! ASUS-style `.CAP` images embed the short filename that the board's
//! USB BIOS Flashback loader looks for on a USB stick. The name lives in a
//! fixed-size record inside the EFI bootloader payload:
//!
//! ```text
//! ... [GUID marker, 16 bytes] ... $BOOTEFI$ [0x91 bytes from tag start] [name, 12 bytes, NUL padded] ...
//! ```
//!
//! - `layout`: constants describing the record, plus the GUID type
//! - `parser`: locating the record and decoding the name
//!
//! Everything here works on a buffer already in memory; loading it is the
//! job of [`crate::io`].

mod error;
mod layout;
mod parser;

pub use error::ExtractError;
pub use layout::*;
pub use parser::{decode_name, extract, locate};
