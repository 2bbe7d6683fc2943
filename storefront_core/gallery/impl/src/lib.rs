use serde::Deserialize;
use storefront_core_gallery_contracts::{GalleryGetError, GalleryService, GALLERY_FRAGMENT};
use storefront_graphql_contracts::{Document, GraphQlClient, GraphQlClientExt};
use storefront_models::{gallery::ProductGallery, ProductEntityId};

pub static PRODUCT_GALLERY_QUERY: Document = Document {
    operation_name: "ProductGallery",
    source: r#"
        query ProductGallery($entityId: Int!) {
          site {
            product(entityId: $entityId) {
              ...GalleryFragment
            }
          }
        }
    "#,
    fragments: &[&GALLERY_FRAGMENT],
};

#[derive(Debug, Clone)]
pub struct GalleryServiceImpl<GraphQl> {
    graphql: GraphQl,
}

impl<GraphQl> GalleryServiceImpl<GraphQl> {
    pub fn new(graphql: GraphQl) -> Self {
        Self { graphql }
    }
}

impl<GraphQl> GalleryService for GalleryServiceImpl<GraphQl>
where
    GraphQl: GraphQlClient,
{
    async fn get_product_gallery(
        &self,
        product_entity_id: ProductEntityId,
    ) -> Result<Option<ProductGallery>, GalleryGetError> {
        self.graphql
            .fetch::<ProductGalleryData>(
                &PRODUCT_GALLERY_QUERY,
                serde_json::json!({ "entityId": product_entity_id }),
            )
            .await
            .map(|data| data.site.product)
            .map_err(Into::into)
    }
}

#[derive(Deserialize)]
struct ProductGalleryData {
    site: Site,
}

#[derive(Deserialize)]
struct Site {
    product: Option<ProductGallery>,
}
