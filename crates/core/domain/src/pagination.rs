//! 分页参数。
//!
//! 大屏分页接口统一接收 `current`（从 1 开始）与 `size`，
//! 缺省或非法时回退到 `1` / `10`。

/// 默认页码
pub const DEFAULT_PAGE: i64 = 1;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 分页请求。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub current: i64,
    pub size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// 构造分页请求，小于 1 的值回退为默认值。
    pub fn new(current: i64, size: i64) -> Self {
        Self {
            current: if current >= 1 { current } else { DEFAULT_PAGE },
            size: if size >= 1 { size } else { DEFAULT_PAGE_SIZE },
        }
    }

    /// 从查询字符串解析分页参数。
    pub fn from_query(current: Option<&str>, size: Option<&str>) -> Self {
        let current = current
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE);
        let size = size
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(current, size)
    }

    /// 跳过的记录数
    pub fn offset(&self) -> i64 {
        (self.current - 1).saturating_mul(self.size)
    }

    /// 本页最多返回的记录数
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// 按当前每页条数计算总页数
    pub fn pages(&self, total: i64) -> i64 {
        page_count(total, self.size)
    }

    /// 对内存中的完整列表取当前页。
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.size).unwrap_or(usize::MAX);
        items.iter().skip(offset).take(limit).cloned().collect()
    }
}

/// `ceil(total / size)`；`total <= 0` 时为 0。
pub fn page_count(total: i64, size: i64) -> i64 {
    if total <= 0 || size <= 0 {
        return 0;
    }
    total / size + i64::from(total % size != 0)
}
