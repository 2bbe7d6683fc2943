use axum::{routing, Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const GRAPHQL_ROUTE: &str = "/graphql";
pub const GALLERY_PRODUCT_ID: i64 = 77;

pub fn router() -> Router<()> {
    Router::new().route(GRAPHQL_ROUTE, routing::post(graphql))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest {
    query: String,
    operation_name: Option<String>,
    #[serde(default)]
    variables: Map<String, Value>,
}

async fn graphql(Json(request): Json<GraphQlRequest>) -> Json<Value> {
    let result = match request.operation_name.as_deref() {
        Some("submitContactUs") => submit_contact_us(&request.query, &request.variables),
        Some("ProductGallery") => product_gallery(&request.query, &request.variables),
        Some(name) => Err(format!("Unknown operation named \"{name}\".")),
        None => Err("Must provide operation name.".into()),
    };

    Json(match result {
        Ok(data) => match deprecation_warnings(&request.variables) {
            warnings if warnings.is_empty() => json!({ "data": data }),
            warnings => json!({ "data": data, "errors": warnings }),
        },
        Err(message) => json!({ "data": null, "errors": [{ "message": message }] }),
    })
}

/// Top-level errors returned next to the data of an otherwise successful
/// response.
fn deprecation_warnings(variables: &Map<String, Value>) -> Vec<Value> {
    variables
        .get("input")
        .and_then(|input| input.get("data"))
        .and_then(Value::as_object)
        .filter(|data| data.contains_key("rmaNumber"))
        .map(|_| json!({ "message": "Field \"rmaNumber\" is deprecated." }))
        .into_iter()
        .collect()
}

fn submit_contact_us(query: &str, variables: &Map<String, Value>) -> Result<Value, String> {
    if !query.contains("submitContactUs(input: $input, reCaptchaV2: $reCaptchaV2)") {
        return Err("Query does not select submitContactUs.".into());
    }

    let input = variables
        .get("input")
        .and_then(Value::as_object)
        .ok_or("Variable \"$input\" of required type \"SubmitContactUsInput!\" was not provided.")?;
    input
        .get("pageEntityId")
        .and_then(Value::as_i64)
        .ok_or("Field \"pageEntityId\" of type \"Int!\" is required.")?;
    let data = input
        .get("data")
        .and_then(Value::as_object)
        .ok_or("Field \"data\" of type \"ContactUsInput!\" is required.")?;
    for field in ["email", "comments"] {
        data.get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("Field \"{field}\" of type \"String!\" is required."))?;
    }

    let token = match variables.get("reCaptchaV2") {
        None => None,
        Some(Value::Object(recaptcha)) => Some(
            recaptcha
                .get("token")
                .and_then(Value::as_str)
                .ok_or("Field \"token\" of type \"String!\" is required.")?,
        ),
        Some(_) => {
            return Err("Variable \"$reCaptchaV2\" must be an object when provided.".into());
        }
    };

    let mut errors = Vec::new();
    if token == Some("invalid") {
        errors.push(json!({
            "__typename": "ValidationError",
            "message": "ReCaptcha validation failed.",
        }));
    }
    if data["comments"].as_str().is_some_and(|c| c.contains("fail")) {
        errors.push(json!({
            "__typename": "Error",
            "message": "Unable to submit the contact form.",
        }));
    }

    Ok(json!({
        "submitContactUs": {
            "__typename": "SubmitContactUsResult",
            "errors": errors,
        }
    }))
}

fn product_gallery(query: &str, variables: &Map<String, Value>) -> Result<Value, String> {
    if !query.contains("fragment GalleryFragment on Product") {
        return Err("Unknown fragment \"GalleryFragment\".".into());
    }

    let entity_id = variables
        .get("entityId")
        .and_then(Value::as_i64)
        .ok_or("Variable \"$entityId\" of required type \"Int!\" was not provided.")?;

    let product = (entity_id == GALLERY_PRODUCT_ID).then(|| {
        json!({
            "entityId": entity_id,
            "images": {
                "edges": [
                    {
                        "node": {
                            "altText": "Orbit Terrarium front",
                            "url": "https://cdn.example.com/images/stencil/{:size}/products/77/front.jpg",
                            "isDefault": true,
                        }
                    },
                    {
                        "node": {
                            "altText": "Orbit Terrarium side",
                            "url": "https://cdn.example.com/images/stencil/{:size}/products/77/side.jpg",
                            "isDefault": false,
                        }
                    },
                ]
            },
            "defaultImage": {
                "altText": "Orbit Terrarium front",
                "url": "https://cdn.example.com/images/stencil/{:size}/products/77/front.jpg",
            },
        })
    });

    Ok(json!({ "site": { "product": product } }))
}
