use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AskRequest {
    /// Passed through to the providers unchecked; absent means empty.
    #[serde(default)]
    pub prompt: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub text: String,
}
