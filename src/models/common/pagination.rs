use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;
/// 页号上限，保证 page * size 不溢出
const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

/// 规范化后的分页参数（page 从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub size: u64,
}

impl PageParams {
    /// page 限制在 1..=MAX_PAGE，size 默认 10，限制在 1..=100
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).clamp(1, MAX_PAGE) as u64,
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as u64,
        }
    }

    /// SeaORM 分页器使用从 0 开始的页号
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }

    pub fn info(&self, total: u64, total_pages: u64) -> PaginationInfo {
        PaginationInfo {
            page: self.page as i64,
            page_size: self.size as i64,
            total: total as i64,
            total_pages: total_pages as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::new(None, None);
        assert_eq!(params, PageParams { page: 1, size: 10 });
        assert_eq!(params.page_index(), 0);
    }

    #[test]
    fn test_page_params_clamped() {
        assert_eq!(PageParams::new(Some(-3), Some(0)), PageParams { page: 1, size: 1 });
        assert_eq!(PageParams::new(Some(4), Some(500)).size, 100);
    }

    #[test]
    fn test_page_params_huge_page_does_not_overflow() {
        let params = PageParams::new(Some(i64::MAX), Some(MAX_PAGE_SIZE));
        assert_eq!(params.page, MAX_PAGE as u64);
        let offset = params.size.checked_mul(params.page_index());
        assert!(offset.is_some_and(|o| o <= i64::MAX as u64));
        assert!(params.size.checked_mul(params.page).is_some());
    }

    #[test]
    fn test_pagination_info() {
        let info = PageParams::new(Some(2), Some(5)).info(12, 3);
        assert_eq!(info.page, 2);
        assert_eq!(info.page_size, 5);
        assert_eq!(info.total, 12);
        assert_eq!(info.total_pages, 3);
    }
}
