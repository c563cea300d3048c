//! One-shot image generation.
//!
//! Run with: `cargo run --example generate_image`
//!
//! Requires `DECART_API_KEY` environment variable.

use decart_adapter::{DecartImageAdapter, GenerationRequest, ImageAdapter, Resolution};

#[tokio::main]
async fn main() -> decart_adapter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let adapter = DecartImageAdapter::builder().build()?;

    let request = GenerationRequest::new("A lighthouse on a cliff at dusk, oil painting")
        .with_resolution(Resolution::High)
        .with_seed(7);

    let result = adapter.generate_images(&request).await?;
    for (i, image) in result.images.iter().enumerate() {
        let path = format!("output-{i}.png");
        image.save(&path)?;
        println!("{}: saved {path}", result.id);
    }

    Ok(())
}
