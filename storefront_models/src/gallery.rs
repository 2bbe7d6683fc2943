use serde::{Deserialize, Serialize};

/// The images of a product as selected by the gallery fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGallery {
    pub images: ImageConnection,
    pub default_image: Option<DefaultImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConnection {
    pub edges: Option<Vec<ImageEdge>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEdge {
    pub node: GalleryImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub alt_text: String,
    /// Lossy url template of the image.
    pub url: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultImage {
    pub alt_text: String,
    pub url: String,
}

impl ProductGallery {
    /// Iterates over all images in the order returned by the storefront.
    pub fn images(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.edges.iter().flatten().map(|edge| &edge.node)
    }

    /// Returns the image flagged as default within the image collection.
    pub fn flagged_default_image(&self) -> Option<&GalleryImage> {
        self.images().find(|image| image.is_default)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize() {
        let gallery = serde_json::from_value::<ProductGallery>(serde_json::json!({
            "images": {
                "edges": [
                    {"node": {"altText": "front", "url": "https://cdn.example.com/{:size}/front.jpg", "isDefault": false}},
                    {"node": {"altText": "side", "url": "https://cdn.example.com/{:size}/side.jpg", "isDefault": true}},
                ]
            },
            "defaultImage": {"altText": "side", "url": "https://cdn.example.com/{:size}/side.jpg"},
        }))
        .unwrap();

        assert_eq!(
            gallery.images().map(|image| &*image.alt_text).collect::<Vec<_>>(),
            ["front", "side"]
        );
        assert_eq!(
            gallery.flagged_default_image().map(|image| &*image.url),
            Some("https://cdn.example.com/{:size}/side.jpg")
        );
        assert_eq!(
            gallery.default_image,
            Some(DefaultImage {
                alt_text: "side".into(),
                url: "https://cdn.example.com/{:size}/side.jpg".into(),
            })
        );
    }

    #[test]
    fn deserialize_without_images() {
        let gallery = serde_json::from_value::<ProductGallery>(serde_json::json!({
            "images": {"edges": null},
            "defaultImage": null,
        }))
        .unwrap();

        assert_eq!(gallery.images().count(), 0);
        assert_eq!(gallery.flagged_default_image(), None);
        assert_eq!(gallery.default_image, None);
    }
}
