use std::future::Future;

use storefront_graphql_contracts::Fragment;
use storefront_models::{gallery::ProductGallery, ProductEntityId};
use thiserror::Error;

/// Selects the fields of a product needed to render its image gallery.
///
/// Embed it into a query on `Product` with [`Fragment::spread`] and list it in
/// the fragments of the query document.
pub static GALLERY_FRAGMENT: Fragment = Fragment {
    name: "GalleryFragment",
    source: r#"
        fragment GalleryFragment on Product {
          images {
            edges {
              node {
                altText
                url: urlTemplate(lossy: true)
                isDefault
              }
            }
          }
          defaultImage {
            altText
            url: urlTemplate(lossy: true)
          }
        }
    "#,
    fragments: &[],
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait GalleryService: Send + Sync + 'static {
    /// Return the gallery of the given product or `None` if the product does
    /// not exist.
    fn get_product_gallery(
        &self,
        product_entity_id: ProductEntityId,
    ) -> impl Future<Output = Result<Option<ProductGallery>, GalleryGetError>> + Send;
}

#[derive(Debug, Error)]
pub enum GalleryGetError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockGalleryService {
    pub fn with_get_product_gallery(
        mut self,
        product_entity_id: ProductEntityId,
        result: Option<ProductGallery>,
    ) -> Self {
        self.expect_get_product_gallery()
            .once()
            .with(mockall::predicate::eq(product_entity_id))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment() {
        assert_eq!(GALLERY_FRAGMENT.spread(), "...GalleryFragment");
        assert!(GALLERY_FRAGMENT
            .source
            .trim()
            .starts_with("fragment GalleryFragment on Product {"));
        assert_eq!(GALLERY_FRAGMENT.source.matches("urlTemplate(lossy: true)").count(), 2);
    }
}
