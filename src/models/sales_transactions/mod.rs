pub mod entities;
pub mod requests;

pub type SalesTransactionListResponse = super::PaginatedResponse<entities::SalesTransaction>;
