use anyhow::{Context, Result};
use image::DynamicImage;

pub async fn download_thumbnail(http: &reqwest::Client, url: &str) -> Result<DynamicImage> {
    let response = http.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    let img = image::load_from_memory(&bytes).context("Failed to decode thumbnail")?;
    Ok(img)
}
