use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::grocery::errors::GroceryError;

use crate::api::error::{ErrorCode, ErrorResponse, IntoErrorResponse};

/// The endpoint an error came from. Storage and payload codes are per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroceryOperation {
    Create,
    List,
    Update,
    ToDelete,
    ToRestore,
    ToBuy,
}

impl GroceryOperation {
    pub fn payload_error_code(&self) -> ErrorCode {
        match self {
            GroceryOperation::Create => ErrorCode::CreateGroceryPayloadError,
            GroceryOperation::List => ErrorCode::InvalidGroceryQueryParamType,
            GroceryOperation::Update => ErrorCode::UpdateGroceryPayloadError,
            GroceryOperation::ToDelete => ErrorCode::ToDeleteGroceryPayloadError,
            // Restore has no body; only the path can be malformed.
            GroceryOperation::ToRestore => ErrorCode::InvalidUuidFormat,
            GroceryOperation::ToBuy => ErrorCode::ToBuyGroceryPayloadError,
        }
    }

    pub fn query_error_code(&self) -> ErrorCode {
        match self {
            GroceryOperation::Create => ErrorCode::CreateGroceryQueryError,
            GroceryOperation::List => ErrorCode::GetGroceriesError,
            GroceryOperation::Update => ErrorCode::UpdateGroceryQueryError,
            GroceryOperation::ToDelete => ErrorCode::ToDeleteGroceryQueryError,
            GroceryOperation::ToRestore => ErrorCode::ToRestoreGroceryQueryError,
            GroceryOperation::ToBuy => ErrorCode::ToBuyGroceryQueryError,
        }
    }

    /// Storage details stay in the logs; callers only get this.
    fn query_error_message(&self) -> &'static str {
        match self {
            GroceryOperation::Create => "Creating grocery failed.",
            GroceryOperation::List => "Fetching groceries failed.",
            GroceryOperation::Update => "Updating grocery failed.",
            GroceryOperation::ToDelete => "Deleting grocery failed.",
            GroceryOperation::ToRestore => "Restoring grocery failed.",
            GroceryOperation::ToBuy => "Updating grocery status failed.",
        }
    }

    /// Envelope for a request the framework could not decode.
    pub fn payload_error(&self, err: &poem::Error) -> Json<ErrorResponse> {
        ErrorResponse::json(self.payload_error_code(), err.to_string())
    }
}

impl IntoErrorResponse for GroceryError {
    type Context = GroceryOperation;

    fn into_error_response(self, operation: GroceryOperation) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            GroceryError::InvalidUuid => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::json(ErrorCode::InvalidUuidFormat, "Invalid UUID format"),
            ),
            GroceryError::InvalidType => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::json(
                    ErrorCode::InvalidGroceryQueryParamType,
                    "Invalid 'type' query parameter. It should be 'bought' or 'to-buy'.",
                ),
            ),
            GroceryError::InvalidDeletedFlag(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::json(ErrorCode::InvalidGroceryQueryParamType, message),
            ),
            GroceryError::CountFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::json(ErrorCode::GetGroceriesCountError, "Counting groceries failed."),
            ),
            GroceryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::json(
                    operation.query_error_code(),
                    operation.query_error_message(),
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_invalid_uuid_to_bad_request() {
        let (status, json) = GroceryError::InvalidUuid.into_error_response(GroceryOperation::Update);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.code, "INVALID_UUID_FORMAT");
    }

    #[test]
    fn should_pass_deleted_flag_message_through() {
        let err = GroceryError::InvalidDeletedFlag("bad flag".to_string());

        let (status, json) = err.into_error_response(GroceryOperation::List);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.code, "INVALID_GROCERY_QUERY_PARAM_TYPE");
        assert_eq!(json.0.message, "bad flag");
    }

    #[test]
    fn should_mask_storage_details() {
        let err = GroceryError::Repository(RepositoryError::database_error(
            "relation \"groceries\" does not exist",
        ));

        let (status, json) = err.into_error_response(GroceryOperation::Create);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.code, "CREATE_GROCERY_QUERY_ERROR");
        assert!(!json.0.message.contains("relation"));
    }

    #[test]
    fn should_mask_connection_failures() {
        let err = GroceryError::Repository(RepositoryError::connection(
            "failed to connect to `host=db.internal`",
        ));

        let (_, json) = err.into_error_response(GroceryOperation::List);

        assert_eq!(json.0.code, "GET_GROCERIES_ERROR");
        assert_eq!(json.0.message, "Fetching groceries failed.");
    }

    #[test]
    fn should_use_count_code_for_count_failures() {
        let err = GroceryError::CountFailed(RepositoryError::database_error("boom"));

        let (status, json) = err.into_error_response(GroceryOperation::List);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.code, "GET_GROCERIES_COUNT_ERROR");
    }

    #[test]
    fn should_use_operation_specific_query_codes() {
        let cases = [
            (GroceryOperation::Update, "UPDATE_GROCERY_QUERY_ERROR"),
            (GroceryOperation::ToDelete, "TO_DELETE_GROCERY_QUERY_ERROR"),
            (GroceryOperation::ToRestore, "TO_RESTORE_GROCERY_QUERY_ERROR"),
            (GroceryOperation::ToBuy, "TO_BUY_GROCERY_QUERY_ERROR"),
        ];

        for (operation, code) in cases {
            assert_eq!(operation.query_error_code().as_str(), code);
        }
    }
}
