pub mod entities;
pub mod requests;

pub type DepartmentListResponse = super::PaginatedResponse<entities::Department>;
