pub mod entities;
pub mod requests;

pub type OrderItemListResponse = super::PaginatedResponse<entities::OrderItem>;
