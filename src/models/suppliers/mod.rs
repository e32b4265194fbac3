pub mod entities;
pub mod requests;

pub type SupplierListResponse = super::PaginatedResponse<entities::Supplier>;
