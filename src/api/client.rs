use reqwest::Client;
use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::{
    Flashcard,
    Group,
    Notebook,
    TangochoError,
};

#[derive(Debug, Clone, Serialize)]
pub struct GroupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub groupname: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotebookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub title: String,
    pub description: String,
}

/// Create/update body for a card. Same mixed naming as the read side:
/// the API wants snake_case text fields here.
#[derive(Debug, Clone, Serialize)]
pub struct FlashcardPayload {
    pub front_text: String,
    pub back_text: String,
    pub detail: String,
    pub bookmarked: bool,
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/api/{}", base_url.trim_end_matches('/'), path)
}

async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, TangochoError> {
    if !response.status().is_success() {
        return Err(TangochoError::Api {
            status: response.status(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, TangochoError> {
    let response = Client::new().get(&url).send().await?;
    let response = ensure_success(response).await?;
    Ok(response.json().await?)
}

async fn send_json<B: Serialize>(
    method: reqwest::Method,
    url: String,
    body: &B,
) -> Result<(), TangochoError> {
    let response = Client::new().request(method, &url).json(body).send().await?;
    ensure_success(response).await?;
    Ok(())
}

async fn delete(url: String) -> Result<(), TangochoError> {
    let response = Client::new().delete(&url).send().await?;
    ensure_success(response).await?;
    Ok(())
}

pub async fn list_groups(base_url: &str) -> Result<Vec<Group>, TangochoError> {
    get_json(endpoint(base_url, "groups")).await
}

pub async fn get_group(base_url: &str, group_id: &str) -> Result<Group, TangochoError> {
    get_json(endpoint(base_url, &format!("groups/{}", group_id))).await
}

pub async fn create_group(base_url: &str, payload: &GroupPayload) -> Result<(), TangochoError> {
    send_json(reqwest::Method::POST, endpoint(base_url, "groups"), payload).await
}

pub async fn update_group(
    base_url: &str,
    group_id: &str,
    payload: &GroupPayload,
) -> Result<(), TangochoError> {
    send_json(reqwest::Method::PUT, endpoint(base_url, &format!("groups/{}", group_id)), payload)
        .await
}

pub async fn delete_group(base_url: &str, group_id: &str) -> Result<(), TangochoError> {
    delete(endpoint(base_url, &format!("groups/{}", group_id))).await
}

pub async fn list_notebooks(
    base_url: &str,
    group_id: &str,
) -> Result<Vec<Notebook>, TangochoError> {
    get_json(endpoint(base_url, &format!("notebooks?groupId={}", group_id))).await
}

pub async fn get_notebook(
    base_url: &str,
    notebook_id: &str,
) -> Result<Notebook, TangochoError> {
    get_json(endpoint(base_url, &format!("notebooks/{}", notebook_id))).await
}

pub async fn list_liked_notebooks(base_url: &str) -> Result<Vec<Notebook>, TangochoError> {
    get_json(endpoint(base_url, "notebooks/liked")).await
}

pub async fn create_notebook(
    base_url: &str,
    group_id: &str,
    payload: &NotebookPayload,
) -> Result<(), TangochoError> {
    send_json(
        reqwest::Method::POST,
        endpoint(base_url, &format!("notebooks?groupId={}", group_id)),
        payload,
    )
    .await
}

pub async fn update_notebook(
    base_url: &str,
    notebook_id: &str,
    payload: &NotebookPayload,
) -> Result<(), TangochoError> {
    send_json(
        reqwest::Method::PUT,
        endpoint(base_url, &format!("notebooks/{}", notebook_id)),
        payload,
    )
    .await
}

pub async fn set_notebook_liked(
    base_url: &str,
    notebook_id: &str,
    liked: bool,
) -> Result<(), TangochoError> {
    send_json(
        reqwest::Method::PATCH,
        endpoint(base_url, &format!("notebooks/{}", notebook_id)),
        &serde_json::json!({ "liked": liked }),
    )
    .await
}

pub async fn delete_notebook(base_url: &str, notebook_id: &str) -> Result<(), TangochoError> {
    delete(endpoint(base_url, &format!("notebooks/{}", notebook_id))).await
}

pub async fn list_flashcards(
    base_url: &str,
    notebook_id: &str,
) -> Result<Vec<Flashcard>, TangochoError> {
    get_json(endpoint(base_url, &format!("flashcards?notebookId={}", notebook_id))).await
}

pub async fn create_flashcard(
    base_url: &str,
    notebook_id: &str,
    payload: &FlashcardPayload,
) -> Result<(), TangochoError> {
    send_json(
        reqwest::Method::POST,
        endpoint(base_url, &format!("flashcards?notebookId={}", notebook_id)),
        payload,
    )
    .await
}

pub async fn update_flashcard(
    base_url: &str,
    flashcard_id: &str,
    payload: &FlashcardPayload,
) -> Result<(), TangochoError> {
    send_json(
        reqwest::Method::PUT,
        endpoint(base_url, &format!("flashcards/{}", flashcard_id)),
        payload,
    )
    .await
}

pub async fn set_flashcard_bookmarked(
    base_url: &str,
    flashcard_id: &str,
    bookmarked: bool,
) -> Result<(), TangochoError> {
    send_json(
        reqwest::Method::PATCH,
        endpoint(base_url, &format!("flashcards/{}", flashcard_id)),
        &serde_json::json!({ "bookmarked": bookmarked }),
    )
    .await
}

pub async fn delete_flashcard(base_url: &str, flashcard_id: &str) -> Result<(), TangochoError> {
    delete(endpoint(base_url, &format!("flashcards/{}", flashcard_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            endpoint("http://localhost:8080/", "groups"),
            "http://localhost:8080/api/groups"
        );
        assert_eq!(
            endpoint("http://localhost:8080", "notebooks/liked"),
            "http://localhost:8080/api/notebooks/liked"
        );
    }

    #[test]
    fn flashcard_wire_format_mixes_naming_styles() {
        let card: Flashcard = serde_json::from_str(
            r#"{
                "flashcardId": "f1",
                "front_text": "dog",
                "back_text": "犬",
                "detail": "",
                "bookmarked": true
            }"#,
        )
        .unwrap();
        assert_eq!(card.flashcard_id, "f1");
        assert!(card.bookmarked);

        let payload = FlashcardPayload {
            front_text: card.front_text,
            back_text: card.back_text,
            detail: card.detail,
            bookmarked: card.bookmarked,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("front_text").is_some());
        assert!(value.get("frontText").is_none());
    }

    #[test]
    fn notebook_update_payload_uses_camel_case_group_id() {
        let payload = NotebookPayload {
            sub: None,
            group_id: Some("g9".to_string()),
            title: "t".to_string(),
            description: "d".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value.get("groupId").unwrap(), "g9");
        assert!(value.get("sub").is_none());
    }
}
