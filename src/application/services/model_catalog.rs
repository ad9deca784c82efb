use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::application::ports::InferenceBackend;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatModelOption {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub description: String,
}

impl ChatModelOption {
    fn fallback(model: &str) -> Self {
        Self {
            id: model.to_string(),
            name: model.to_string(),
            provider: "ollama".to_string(),
            description: "Default model".to_string(),
        }
    }
}

/// Chat models the backend can serve, with a configured fallback when it
/// cannot be reached.
pub struct ModelCatalog {
    backend: Arc<dyn InferenceBackend>,
    fallback_model: String,
}

impl ModelCatalog {
    pub fn new(backend: Arc<dyn InferenceBackend>, fallback_model: String) -> Self {
        Self {
            backend,
            fallback_model,
        }
    }

    pub async fn available_models(&self) -> Vec<ChatModelOption> {
        match self.backend.list_models().await {
            Ok(models) if !models.is_empty() => models
                .into_iter()
                .map(|model| ChatModelOption {
                    id: model.name.clone(),
                    name: model.name,
                    provider: "ollama".to_string(),
                    description: format!("{:.1}GB", model.size as f64 / 1e9),
                })
                .collect(),
            Ok(_) => {
                warn!(fallback = %self.fallback_model, "Backend returned no models, using fallback");
                vec![ChatModelOption::fallback(&self.fallback_model)]
            }
            Err(e) => {
                warn!(error = %e, fallback = %self.fallback_model, "Failed to fetch models, using fallback");
                vec![ChatModelOption::fallback(&self.fallback_model)]
            }
        }
    }

    pub async fn default_model(&self) -> String {
        self.available_models()
            .await
            .into_iter()
            .next()
            .map(|model| model.id)
            .unwrap_or_else(|| self.fallback_model.clone())
    }
}
