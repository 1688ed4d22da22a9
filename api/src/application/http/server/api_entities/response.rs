use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub enum Response<T: Serialize + PartialEq> {
    OK(T),
    Created(T),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize + PartialEq,
{
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
        }
    }
}
