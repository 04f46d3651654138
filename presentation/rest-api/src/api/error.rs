use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error envelope returned by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human readable description
    pub message: String,
    /// Stable machine readable code
    pub code: String,
}

impl ErrorResponse {
    pub fn json(code: ErrorCode, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
            code: code.as_str().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUuidFormat,
    InvalidGroceryQueryParamType,
    CreateGroceryPayloadError,
    CreateGroceryQueryError,
    GetGroceriesError,
    GetGroceriesCountError,
    UpdateGroceryPayloadError,
    UpdateGroceryQueryError,
    ToDeleteGroceryPayloadError,
    ToDeleteGroceryQueryError,
    ToRestoreGroceryQueryError,
    ToBuyGroceryPayloadError,
    ToBuyGroceryQueryError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUuidFormat => "INVALID_UUID_FORMAT",
            ErrorCode::InvalidGroceryQueryParamType => "INVALID_GROCERY_QUERY_PARAM_TYPE",
            ErrorCode::CreateGroceryPayloadError => "CREATE_GROCERY_PAYLOAD_ERROR",
            ErrorCode::CreateGroceryQueryError => "CREATE_GROCERY_QUERY_ERROR",
            ErrorCode::GetGroceriesError => "GET_GROCERIES_ERROR",
            ErrorCode::GetGroceriesCountError => "GET_GROCERIES_COUNT_ERROR",
            ErrorCode::UpdateGroceryPayloadError => "UPDATE_GROCERY_PAYLOAD_ERROR",
            ErrorCode::UpdateGroceryQueryError => "UPDATE_GROCERY_QUERY_ERROR",
            ErrorCode::ToDeleteGroceryPayloadError => "TO_DELETE_GROCERY_PAYLOAD_ERROR",
            ErrorCode::ToDeleteGroceryQueryError => "TO_DELETE_GROCERY_QUERY_ERROR",
            ErrorCode::ToRestoreGroceryQueryError => "TO_RESTORE_GROCERY_QUERY_ERROR",
            ErrorCode::ToBuyGroceryPayloadError => "TO_BUY_GROCERY_PAYLOAD_ERROR",
            ErrorCode::ToBuyGroceryQueryError => "TO_BUY_GROCERY_QUERY_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait IntoErrorResponse {
    type Context;

    fn into_error_response(self, context: Self::Context) -> (StatusCode, Json<ErrorResponse>);
}
