pub mod entities;
pub mod requests;

pub type CustomerFeedbackListResponse = super::PaginatedResponse<entities::CustomerFeedback>;
