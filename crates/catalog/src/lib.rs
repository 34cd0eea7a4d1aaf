//! Catalog domain module.
//!
//! Plain validated records for the catalog (products, their images, offers that
//! bundle products). No identity, no lifecycle, no storage: a record lives for
//! one request.

pub mod image;
pub mod offer;
pub mod product;

pub use image::Image;
pub use offer::Offer;
pub use product::{DESCRIPTION_MAX_CHARS, IMAGES_MAX, Product};
