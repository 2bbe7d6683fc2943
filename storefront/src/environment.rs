use storefront_config::Config;
use storefront_core_contact_impl::ContactServiceImpl;
use storefront_core_gallery_impl::GalleryServiceImpl;
use storefront_graphql_impl::{GraphQlClientConfig, GraphQlClientImpl};

pub type ContactService = ContactServiceImpl<GraphQlClientImpl>;
pub type GalleryService = GalleryServiceImpl<GraphQlClientImpl>;

/// All services of the storefront client, wired up from the configuration.
#[derive(Debug, Clone)]
pub struct Services {
    pub contact: ContactService,
    pub gallery: GalleryService,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let graphql = GraphQlClientImpl::new(GraphQlClientConfig {
            endpoint: config.graphql.endpoint.clone().into(),
        })?;

        Ok(Self {
            contact: ContactServiceImpl::new(graphql.clone()),
            gallery: GalleryServiceImpl::new(graphql),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use storefront_config::DEFAULT_CONFIG_PATH;

    use super::*;

    #[test]
    fn services_from_default_config() {
        let config = storefront_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        Services::new(&config).unwrap();
    }
}
