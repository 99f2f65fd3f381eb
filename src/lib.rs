//! Upload files to [Catbox](https://catbox.moe) (permanent) and
//! [Litterbox](https://litterbox.catbox.moe) (temporary).
//!
//! ```no_run
//! use std::time::Duration;
//! use catbox_uploader::{upload_file, upload_to_litterbox, Retention};
//!
//! # async fn run() -> Result<(), catbox_uploader::UploadError> {
//! let bytes = std::fs::read("image.png").unwrap();
//! let url = upload_file(&bytes, "image.png", Duration::from_secs(10), None).await?;
//! let temp = upload_to_litterbox(&bytes, "image.png", &Retention::OneHour, Duration::from_secs(10)).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod form;
mod types;
mod uploader;
pub mod config;

#[cfg(feature = "blocking")]
pub mod blocking;


pub use error::{ConfigError, UploadError};
pub use types::{Retention, Service};
pub use uploader::{upload_file, upload_to_litterbox, Endpoints, Uploader};
