use crate::domain::{ApiToken, DispatchResult};

const ACTION_FIELD: &str = "Action";
const ACTION_PUBLISH: &str = "Publish";
const PHONE_NUMBER_FIELD: &str = "PhoneNumber";
const MESSAGE_FIELD: &str = "Message";

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    #[error("publish endpoint returned an empty body")]
    EmptyBody,
}

pub fn encode_publish_form(
    destination: &str,
    body: &str,
    api_token: Option<&ApiToken>,
) -> Vec<(String, String)> {
    let mut params = vec![
        (ACTION_FIELD.to_owned(), ACTION_PUBLISH.to_owned()),
        (PHONE_NUMBER_FIELD.to_owned(), destination.to_owned()),
        (MESSAGE_FIELD.to_owned(), body.to_owned()),
    ];
    if let Some(token) = api_token {
        params.push((ApiToken::FIELD.to_owned(), token.as_str().to_owned()));
    }
    params
}

pub fn decode_publish_response(status: u16, body: String) -> Result<DispatchResult, PublishError> {
    if !(200..=299).contains(&status) {
        let body = if body.trim().is_empty() {
            None
        } else {
            Some(body)
        };
        return Err(PublishError::HttpStatus { status, body });
    }

    if body.trim().is_empty() {
        return Err(PublishError::EmptyBody);
    }

    Ok(DispatchResult::new(body))
}
