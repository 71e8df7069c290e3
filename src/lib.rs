//! # flashname
//!
//! Print the USB BIOS Flashback filename embedded in a firmware capsule.
//!
//! Boards with a Flashback button only accept a capsule when it is copied to
//! the USB stick under a board-specific short name (`PX570PRO.CAP` and the
//! like). That name is stored inside the capsule itself, next to the
//! `$BOOTEFI$` record of the EFI payload. This crate finds and decodes it.
//!
//! ## Features
//!
//! - Extract the flashback name from an in-memory capsule ([`capsule::extract`])
//! - Load capsules from the local filesystem or from HTTP/HTTPS URLs
//!
//! ## Example
//!
//! ```no_run
//! use flashname::{LocalFile, CapsuleSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = LocalFile::new("PRIME-X570-PRO-ASUS-4021.CAP");
//!     let data = source.read_all().await?;
//!     println!("{}", flashname::capsule::extract(&data)?);
//!     Ok(())
//! }
//! ```

pub mod capsule;
pub mod cli;
pub mod io;

pub use capsule::{ExtractError, extract};
pub use cli::Cli;
pub use io::{CapsuleSource, HttpFile, LocalFile, SourceError};
