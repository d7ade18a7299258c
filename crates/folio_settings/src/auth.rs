use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthSettings {
    #[serde(skip_serializing)]
    pub api_token: String,
}

impl AuthSettings {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }
}
