pub mod entities;
pub mod requests;

pub type ProductListResponse = super::PaginatedResponse<entities::Product>;
