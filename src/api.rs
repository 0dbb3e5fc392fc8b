use gloo_net::http::Request;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("expected JSON but got: {0}")]
    NotJson(String),
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl ApiError {
    /// Text shown to the visitor under a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Network(_) => "Network error. Please check your connection and try again.".to_string(),
            _ => "Failed to send message. Please try again.".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentKind {
    Contact,
    Bundle,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EnrollmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: EnrollmentKind,
}

impl EnrollmentRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let required = [("Name", &self.name), ("Email", &self.email), ("Phone number", &self.phone)];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ApiError::Validation(format!("{} is required.", label)));
        }
        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
            None => false,
        };
        if !valid_email {
            return Err(ApiError::Validation("Please enter a valid email address.".to_string()));
        }
        Ok(())
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnrollmentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct OurSectionItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ListResponse<T> {
    success: bool,
    data: Option<Vec<T>>,
}

/// Outcome of a form submission as the form displays it.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitStatus {
    pub success: bool,
    pub message: String,
}

impl SubmitStatus {
    pub fn from_result(result: Result<EnrollmentResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.success => SubmitStatus {
                success: true,
                message: "Message sent successfully! We will contact you soon.".to_string(),
            },
            Ok(resp) => SubmitStatus {
                success: false,
                message: resp
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Failed to send message. Please try again.".to_string()),
            },
            Err(err) => SubmitStatus {
                success: false,
                message: err.user_message(),
            },
        }
    }
}

pub async fn submit_enrollment(request: &EnrollmentRequest) -> Result<EnrollmentResponse, ApiError> {
    request.validate()?;

    let url = format!("{}{}", config::get_backend_url(), config::ENROLLMENT_SUBMIT_PATH);
    let response = Request::post(&url).json(request)?.send().await?;
    let status = response.status();
    match response.json::<EnrollmentResponse>().await {
        Ok(body) => Ok(body),
        Err(_) if !response.ok() => Err(ApiError::Status(status)),
        Err(err) => Err(err.into()),
    }
}

pub async fn fetch_our_section() -> Result<Vec<OurSectionItem>, ApiError> {
    let url = format!("{}{}", config::get_backend_url(), config::OUR_SECTION_PATH);
    let response = Request::get(&url)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let is_json = response
        .headers()
        .get("content-type")
        .map_or(false, |ct| ct.contains("application/json"));
    if !is_json {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::NotJson(text.chars().take(200).collect()));
    }

    let body = response.json::<ListResponse<OurSectionItem>>().await?;
    Ok(ordered_items(body))
}

fn ordered_items(body: ListResponse<OurSectionItem>) -> Vec<OurSectionItem> {
    match body {
        ListResponse { success: true, data: Some(mut items) } => {
            items.sort_by_key(|item| item.order);
            items
        }
        _ => {
            warn!("Our section API returned an unsuccessful response");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact_request() -> EnrollmentRequest {
        EnrollmentRequest {
            name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            phone: "+91 9970804242".to_string(),
            course: "AZ-305".to_string(),
            message: String::new(),
            kind: EnrollmentKind::Contact,
        }
    }

    #[test]
    fn request_serializes_kind_as_type() {
        let value = serde_json::to_value(contact_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Priya Patel",
                "email": "priya@example.com",
                "phone": "+91 9970804242",
                "course": "AZ-305",
                "message": "",
                "type": "contact",
            })
        );

        let bundle = EnrollmentRequest { kind: EnrollmentKind::Bundle, ..contact_request() };
        assert_eq!(serde_json::to_value(bundle).unwrap()["type"], "bundle");
    }

    #[test]
    fn validation_requires_contact_fields() {
        assert!(contact_request().validate().is_ok());

        let blank_name = EnrollmentRequest { name: "  ".into(), ..contact_request() };
        assert_eq!(
            blank_name.validate(),
            Err(ApiError::Validation("Name is required.".into()))
        );

        let no_phone = EnrollmentRequest { phone: String::new(), ..contact_request() };
        assert!(matches!(no_phone.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn validation_rejects_malformed_email() {
        for email in ["priya", "@example.com", "priya@", "a@b@c"] {
            let request = EnrollmentRequest { email: email.into(), ..contact_request() };
            assert!(request.validate().is_err(), "{} should be rejected", email);
        }
    }

    #[test]
    fn response_message_is_optional() {
        let ok: EnrollmentResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(ok, EnrollmentResponse { success: true, message: None });

        let failed: EnrollmentResponse =
            serde_json::from_str(r#"{"success":false,"message":"Duplicate enrollment"}"#).unwrap();
        assert_eq!(failed.message.as_deref(), Some("Duplicate enrollment"));
    }

    #[test]
    fn submit_status_messages() {
        let sent = SubmitStatus::from_result(Ok(EnrollmentResponse { success: true, message: None }));
        assert!(sent.success);

        let rejected = SubmitStatus::from_result(Ok(EnrollmentResponse {
            success: false,
            message: Some("Duplicate enrollment".into()),
        }));
        assert_eq!(rejected.message, "Duplicate enrollment");

        let silent = SubmitStatus::from_result(Ok(EnrollmentResponse { success: false, message: None }));
        assert_eq!(silent.message, "Failed to send message. Please try again.");

        let offline = SubmitStatus::from_result(Err(ApiError::Network("connection refused".into())));
        assert!(!offline.success);
        assert_eq!(offline.message, "Network error. Please check your connection and try again.");
    }

    #[test]
    fn our_section_items_are_ordered() {
        let body: ListResponse<OurSectionItem> = serde_json::from_value(json!({
            "success": true,
            "data": [
                { "_id": "b", "title": "Labs", "description": "Hands-on", "order": 2, "icon": "🧪" },
                { "_id": "a", "title": "Mentors", "order": 1, "image": "/img/mentor.jpg" },
            ]
        }))
        .unwrap();
        let items = ordered_items(body);
        assert_eq!(items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(items[0].description, "");
        assert_eq!(items[1].icon.as_deref(), Some("🧪"));
    }

    #[test]
    fn unsuccessful_list_is_empty() {
        let body: ListResponse<OurSectionItem> =
            serde_json::from_value(json!({ "success": false, "message": "db down" })).unwrap();
        assert!(ordered_items(body).is_empty());

        let no_data: ListResponse<OurSectionItem> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(ordered_items(no_data).is_empty());
    }
}
