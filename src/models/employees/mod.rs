pub mod entities;
pub mod requests;

pub type EmployeeListResponse = super::PaginatedResponse<entities::Employee>;
