use storefront_core_gallery_contracts::GalleryService;
use storefront_core_gallery_impl::GalleryServiceImpl;
use storefront_graphql_impl::{GraphQlClientConfig, GraphQlClientImpl};

#[tokio::test]
async fn get_product_gallery() {
    let sut = make_sut().await;

    let gallery = sut.get_product_gallery(77.into()).await.unwrap().unwrap();

    let images = gallery.images().collect::<Vec<_>>();
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|image| !image.alt_text.is_empty()));
    assert!(images.iter().all(|image| image.url.contains("{:size}")));

    let default_image = gallery.default_image.as_ref().unwrap();
    assert_eq!(
        gallery.flagged_default_image().map(|image| &image.url),
        Some(&default_image.url)
    );
}

#[tokio::test]
async fn get_product_gallery_not_found() {
    let sut = make_sut().await;

    let result = sut.get_product_gallery(1.into()).await.unwrap();

    assert_eq!(result, None);
}

async fn make_sut() -> GalleryServiceImpl<GraphQlClientImpl> {
    let endpoint = storefront_testing::start_background_server().await.unwrap();
    let graphql = GraphQlClientImpl::new(GraphQlClientConfig {
        endpoint: endpoint.into(),
    })
    .unwrap();

    GalleryServiceImpl::new(graphql)
}
