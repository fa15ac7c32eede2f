//! Output encoding: PNG, JPEG and EXIF metadata.

pub mod encoder;
pub mod exif;

pub use self::encoder::{encode_jpeg, encode_png};
pub use self::exif::{build_exif, embed_exif_jpeg};
