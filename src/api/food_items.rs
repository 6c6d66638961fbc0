//! Admin menu item endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{Ack, AiSuggestRequest, AiSuggestion, FoodItemForm};

impl ApiClient {
    /// Adds when `form.id` is empty, updates otherwise.
    pub async fn save_food_item(&self, form: &FoodItemForm) -> Result<Ack> {
        let path = if form.id.is_some() {
            "/admin/food-items/update"
        } else {
            "/admin/food-items/add"
        };
        tracing::info!(path, name = %form.name, "saving food item");
        self.post_query(path, form).await
    }

    pub async fn delete_food_item(&self, id: u64) -> Result<Ack> {
        tracing::info!(id, "deleting food item");
        self.post_query("/admin/food-items/delete", &[("id", id.to_string())]).await
    }

    pub async fn ai_suggest(&self, req: &AiSuggestRequest) -> Result<AiSuggestion> {
        self.post_json_status("/admin/food-items/ai-suggest", req).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;

    fn form(id: Option<&str>) -> FoodItemForm {
        FoodItemForm {
            name: "Masala Dosa".into(),
            description: "Crispy".into(),
            price: "120".into(),
            category: "South Indian".into(),
            image_url: String::new(),
            id: id.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_save_picks_add_or_update() {
        let server = MockServer::start_async().await;
        let add = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/food-items/add")
                    .query_param("name", "Masala Dosa")
                    .query_param("price", "120");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/food-items/update").query_param("id", "7");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let client = ApiClient::new(server.base_url());
        client.save_food_item(&form(None)).await.unwrap();
        client.save_food_item(&form(Some("7"))).await.unwrap();
        add.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_ai_suggest_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/food-items/ai-suggest");
                then.status(503).body("model offline");
            })
            .await;

        let client = ApiClient::new(server.base_url());
        let req = AiSuggestRequest { name: "Dosa".into(), category: String::new() };
        let err = client.ai_suggest(&req).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(503)));
    }

    #[tokio::test]
    async fn test_ai_suggest_without_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/food-items/ai-suggest")
                    .json_body(json!({"name": "Dosa", "category": "Breakfast"}));
                then.status(200).json_body(json!({
                    "description": "Thin rice crepe",
                    "imageUrl": "https://img.example.com/dosa.jpg",
                    "suggestions": ["Serve with sambar"]
                }));
            })
            .await;

        let client = ApiClient::new(server.base_url());
        let req = AiSuggestRequest { name: "Dosa".into(), category: "Breakfast".into() };
        let s = client.ai_suggest(&req).await.unwrap();
        assert_eq!(s.description.as_deref(), Some("Thin rice crepe"));
        assert_eq!(s.suggestions, vec!["Serve with sambar".to_string()]);
    }
}
