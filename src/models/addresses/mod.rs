pub mod entities;
pub mod requests;

pub type AddressListResponse = super::PaginatedResponse<entities::Address>;
