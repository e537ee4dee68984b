mod app_error;
mod page_error;

pub use app_error::AppError;
pub use page_error::PageError;

pub type Result<T> = std::result::Result<T, AppError>;
