//! Image generation module.

mod adapter;
mod decart;
mod types;

pub use adapter::ImageAdapter;
pub use decart::{create_decart_image, decart_image, DecartImageAdapter, DecartImageAdapterBuilder};
pub use types::{DecartImageModel, GeneratedImage, ImageResult, Usage};
