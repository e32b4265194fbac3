pub mod entities;
pub mod requests;

pub type EmployeeDepartmentListResponse =
    super::PaginatedResponse<entities::EmployeeDepartment>;
