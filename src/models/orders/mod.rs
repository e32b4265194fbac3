pub mod entities;
pub mod requests;

pub type OrderListResponse = super::PaginatedResponse<entities::Order>;
