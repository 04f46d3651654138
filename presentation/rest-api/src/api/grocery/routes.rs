use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::grocery::errors::GroceryError;
use business::domain::grocery::facade::{
    CreateGroceryParams, GroceryQueryFacade, ListGroceriesParams, MarkBoughtParams,
    ToDeleteParams, UpdateGroceryParams,
};
use business::domain::grocery::pagination::PageRequest;
use business::domain::grocery::value_objects::{GroceryFilter, parse_grocery_id};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::grocery::dto::{
    BuyGroceryRequest, CreateGroceryRequest, DeleteGroceryRequest, GroceryListResponse,
    GroceryResponse, UpdateGroceryRequest,
};
use crate::api::grocery::error_mapper::GroceryOperation;
use crate::api::tags::ApiTags;

const UPDATED: &str = "Updated successfully";
const DELETED: &str = "Deleted successfully";

pub struct GroceryApi {
    facade: Arc<dyn GroceryQueryFacade>,
}

impl GroceryApi {
    pub fn new(facade: Arc<dyn GroceryQueryFacade>) -> Self {
        Self { facade }
    }
}

/// Picks the 400 or 500 variant of a response enum for a mapped error.
fn respond<R>(
    err: GroceryError,
    operation: GroceryOperation,
    bad_request: fn(Json<ErrorResponse>) -> R,
    internal_error: fn(Json<ErrorResponse>) -> R,
) -> R {
    let (status, json) = err.into_error_response(operation);
    if status == StatusCode::BAD_REQUEST {
        bad_request(json)
    } else {
        internal_error(json)
    }
}

/// Grocery list management API
///
/// Endpoints for creating, listing and changing the status of groceries.
#[OpenApi]
impl GroceryApi {
    /// List groceries
    ///
    /// Returns one page of groceries matching `type` (`bought` or `to-buy`)
    /// and `is_deleted`, newest first, with the total match count.
    #[oai(path = "/groceries", method = "get", tag = "ApiTags::Groceries")]
    async fn get_all(
        &self,
        #[oai(name = "type")]
        grocery_type: Query<Option<String>>,
        is_deleted: Query<Option<String>>,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> GetGroceriesResponse {
        let filter = match GroceryFilter::resolve(grocery_type.0.as_deref(), is_deleted.0.as_deref())
        {
            Ok(filter) => filter,
            Err(err) => return GetGroceriesResponse::from_error(err),
        };
        let request = PageRequest::resolve(page.0.as_deref(), limit.0.as_deref());

        match self
            .facade
            .list(ListGroceriesParams {
                filter,
                page: request,
            })
            .await
        {
            Ok(page) => GetGroceriesResponse::Ok(Json(page.into())),
            Err(err) => GetGroceriesResponse::from_error(err),
        }
    }

    /// Create a grocery
    ///
    /// Adds a new item to the to-buy list and returns it.
    #[oai(path = "/groceries", method = "post", tag = "ApiTags::Groceries")]
    async fn create(&self, body: Json<CreateGroceryRequest>) -> CreateGroceryResponse {
        let params = CreateGroceryParams { name: body.0.name };

        match self.facade.create(params).await {
            Ok(item) => CreateGroceryResponse::Ok(Json(item.into())),
            Err(err) => CreateGroceryResponse::from_error(err),
        }
    }

    /// Rename a grocery
    #[oai(path = "/groceries/:id", method = "put", tag = "ApiTags::Groceries")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateGroceryRequest>,
    ) -> UpdateGroceryResponse {
        let id = match parse_grocery_id(&id.0) {
            Ok(id) => id,
            Err(err) => return UpdateGroceryResponse::from_error(err),
        };

        let params = UpdateGroceryParams {
            id,
            name: body.0.name,
        };

        match self.facade.update(params).await {
            Ok(()) => UpdateGroceryResponse::Ok(Json(UPDATED.to_string())),
            Err(err) => UpdateGroceryResponse::from_error(err),
        }
    }

    /// Soft-delete a grocery
    ///
    /// Stamps `deleted_at` with the given time, or the server time when omitted.
    #[oai(path = "/groceries/:id", method = "delete", tag = "ApiTags::Groceries")]
    async fn delete(
        &self,
        id: Path<String>,
        body: Json<DeleteGroceryRequest>,
    ) -> DeleteGroceryResponse {
        let id = match parse_grocery_id(&id.0) {
            Ok(id) => id,
            Err(err) => return DeleteGroceryResponse::from_error(err),
        };

        let params = ToDeleteParams {
            id,
            deleted_at: body.0.deleted_at,
        };

        match self.facade.to_delete(params).await {
            Ok(()) => DeleteGroceryResponse::Ok(Json(DELETED.to_string())),
            Err(err) => DeleteGroceryResponse::from_error(err),
        }
    }

    /// Restore a deleted grocery
    #[oai(
        path = "/groceries/:id/restore",
        method = "post",
        tag = "ApiTags::Groceries"
    )]
    async fn restore(&self, id: Path<String>) -> RestoreGroceryResponse {
        let id = match parse_grocery_id(&id.0) {
            Ok(id) => id,
            Err(err) => return RestoreGroceryResponse::from_error(err),
        };

        match self.facade.to_restore(id).await {
            Ok(()) => RestoreGroceryResponse::Ok(Json(UPDATED.to_string())),
            Err(err) => RestoreGroceryResponse::from_error(err),
        }
    }

    /// Mark a grocery as bought
    ///
    /// Sets `bought_at`; sending no timestamp moves the item back to to-buy.
    #[oai(
        path = "/groceries/:id/buy",
        method = "post",
        tag = "ApiTags::Groceries"
    )]
    async fn buy(&self, id: Path<String>, body: Json<BuyGroceryRequest>) -> BuyGroceryResponse {
        let id = match parse_grocery_id(&id.0) {
            Ok(id) => id,
            Err(err) => return BuyGroceryResponse::from_error(err),
        };

        let params = MarkBoughtParams {
            id,
            bought_at: body.0.bought_at,
        };

        match self.facade.mark_bought(params).await {
            Ok(()) => BuyGroceryResponse::Ok(Json(UPDATED.to_string())),
            Err(err) => BuyGroceryResponse::from_error(err),
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "list_bad_request")]
pub enum GetGroceriesResponse {
    #[oai(status = 200)]
    Ok(Json<GroceryListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl GetGroceriesResponse {
    fn from_error(err: GroceryError) -> Self {
        respond(err, GroceryOperation::List, Self::BadRequest, Self::InternalError)
    }
}

fn list_bad_request(err: poem::Error) -> GetGroceriesResponse {
    GetGroceriesResponse::BadRequest(GroceryOperation::List.payload_error(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateGroceryResponse {
    #[oai(status = 200)]
    Ok(Json<GroceryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CreateGroceryResponse {
    fn from_error(err: GroceryError) -> Self {
        respond(err, GroceryOperation::Create, Self::BadRequest, Self::InternalError)
    }
}

fn create_bad_request(err: poem::Error) -> CreateGroceryResponse {
    CreateGroceryResponse::BadRequest(GroceryOperation::Create.payload_error(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateGroceryResponse {
    #[oai(status = 200)]
    Ok(Json<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UpdateGroceryResponse {
    fn from_error(err: GroceryError) -> Self {
        respond(err, GroceryOperation::Update, Self::BadRequest, Self::InternalError)
    }
}

fn update_bad_request(err: poem::Error) -> UpdateGroceryResponse {
    UpdateGroceryResponse::BadRequest(GroceryOperation::Update.payload_error(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_bad_request")]
pub enum DeleteGroceryResponse {
    #[oai(status = 200)]
    Ok(Json<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DeleteGroceryResponse {
    fn from_error(err: GroceryError) -> Self {
        respond(err, GroceryOperation::ToDelete, Self::BadRequest, Self::InternalError)
    }
}

fn delete_bad_request(err: poem::Error) -> DeleteGroceryResponse {
    DeleteGroceryResponse::BadRequest(GroceryOperation::ToDelete.payload_error(&err))
}

/// Restore takes no body, so a rejected request can only mean a bad path id.
#[derive(ApiResponse)]
#[oai(bad_request_handler = "restore_bad_request")]
pub enum RestoreGroceryResponse {
    #[oai(status = 200)]
    Ok(Json<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl RestoreGroceryResponse {
    fn from_error(err: GroceryError) -> Self {
        respond(err, GroceryOperation::ToRestore, Self::BadRequest, Self::InternalError)
    }
}

fn restore_bad_request(err: poem::Error) -> RestoreGroceryResponse {
    RestoreGroceryResponse::BadRequest(GroceryOperation::ToRestore.payload_error(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "buy_bad_request")]
pub enum BuyGroceryResponse {
    #[oai(status = 200)]
    Ok(Json<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl BuyGroceryResponse {
    fn from_error(err: GroceryError) -> Self {
        respond(err, GroceryOperation::ToBuy, Self::BadRequest, Self::InternalError)
    }
}

fn buy_bad_request(err: poem::Error) -> BuyGroceryResponse {
    BuyGroceryResponse::BadRequest(GroceryOperation::ToBuy.payload_error(&err))
}
