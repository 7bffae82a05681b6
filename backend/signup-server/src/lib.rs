pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        id_param::{IdParam, parse_id},
        json_body::{JsonBody, decode_json},
    },
    fallback::{method_not_allowed, not_found},
    signup::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, delete_user, show_user, update_user},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
