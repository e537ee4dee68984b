use axum::response::{Html, IntoResponse, Response};

use super::AppError;
use crate::views;

/// Error returned by the HTML page handlers. Same taxonomy as [`AppError`],
/// rendered as a page instead of a JSON body.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let page = views::layout::error_page(status, self.0.public_message());

        (status, Html(page)).into_response()
    }
}
