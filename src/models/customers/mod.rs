pub mod entities;
pub mod requests;

pub type CustomerListResponse = super::PaginatedResponse<entities::Customer>;
