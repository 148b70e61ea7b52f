#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use edgekit_image as image;

#[doc(inline)]
pub use edgekit_imgproc as imgproc;
