use std::io::Write;

use anyhow::{anyhow, Context};
use clap::Subcommand;
use storefront_config::Config;
use storefront_core_gallery_contracts::{GalleryService, GALLERY_FRAGMENT};
use storefront_models::ProductEntityId;

use super::write_json;
use crate::environment::Services;

#[derive(Debug, Subcommand)]
pub enum GalleryCommand {
    /// Fetch the image gallery of a product
    #[command(aliases(["g"]))]
    Get { product_entity_id: i32 },
    /// Print the gallery fragment definition
    #[command(aliases(["f"]))]
    Fragment,
}

impl GalleryCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        match self {
            Self::Get { product_entity_id } => {
                let services = Services::new(&config)?;
                get(&services.gallery, product_entity_id.into(), &mut out).await
            }
            Self::Fragment => fragment(&mut out),
        }
    }
}

async fn get(
    service: &impl GalleryService,
    product_entity_id: ProductEntityId,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let gallery = service
        .get_product_gallery(product_entity_id)
        .await
        .context("Failed to fetch product gallery")?
        .ok_or_else(|| anyhow!("Product {product_entity_id} does not exist"))?;

    write_json(out, &gallery)
}

fn fragment(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", GALLERY_FRAGMENT.source.trim())?;
    Ok(())
}
