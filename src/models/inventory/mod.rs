pub mod entities;
pub mod requests;

pub type InventoryListResponse = super::PaginatedResponse<entities::Inventory>;
