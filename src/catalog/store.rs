// ==========================================
// 阀门产品目录系统 - 目录视图状态容器
// ==========================================
// 职责: 持有产品全集 + 搜索/筛选/排序/分页参数,重算可见页
// 红线: 过滤/排序/分页为纯同步重算,无隐藏状态
// 红线: 最新拉取生效 —— 过期令牌的提交/失败一律丢弃
// ==========================================

use crate::catalog::pagination;
use crate::domain::product::Product;
use crate::domain::types::SortOrder;
use serde::Serialize;

/// 页码窗口宽度（分页控件最多展示的页码数）
const PAGE_WINDOW_WIDTH: usize = 5;

// ==========================================
// FetchToken - 拉取令牌
// ==========================================
// 用途: 标记一次拉取;仅最新令牌的结果允许落入 store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

// ==========================================
// PageView - 可见页快照
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub items: Vec<Product>,      // 当前页产品
    pub total_matches: usize,     // 过滤后总数
    pub total_pages: usize,       // 总页数（≥1）
    pub current_page: usize,      // 生效页码（已钳制）
    pub page_size: usize,         // 页大小
    pub page_numbers: Vec<usize>, // 页码窗口
}

// ==========================================
// CatalogStore - 目录视图状态
// ==========================================
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    search_term: String,
    company_filter: Option<String>, // None = 全部品牌
    sort_order: SortOrder,
    current_page: usize,
    page_size: usize,
    loading: bool,
    last_error: Option<String>,
    fetch_seq: u64,
}

impl CatalogStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            company_filter: None,
            sort_order: SortOrder::default(),
            current_page: 1,
            page_size,
            loading: false,
            last_error: None,
            fetch_seq: 0,
        }
    }

    // ==========================================
    // 拉取生命周期
    // ==========================================

    /// 开始一次拉取,返回令牌
    ///
    /// 再次调用会使先前令牌过期（最新拉取生效）
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.fetch_seq += 1;
        self.loading = true;
        self.last_error = None;
        FetchToken(self.fetch_seq)
    }

    /// 提交拉取结果;过期令牌 → 丢弃并返回 false
    pub fn commit_fetch(&mut self, token: FetchToken, products: Vec<Product>) -> bool {
        if token.0 != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.set_products(products);
        true
    }

    /// 记录拉取失败;过期令牌 → 丢弃并返回 false
    pub fn fail_fetch(&mut self, token: FetchToken, message: String) -> bool {
        if token.0 != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.last_error = Some(message);
        self.products.clear();
        true
    }

    // ==========================================
    // 写入口（任何参数变更都重置页码）
    // ==========================================

    /// 整体替换产品列表,页码复位
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.current_page = 1;
    }

    /// 应用搜索词（显式触发口径: 调用即生效,store 不持有计时器）
    pub fn apply_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.current_page = 1;
    }

    /// 设置品牌筛选（None = 全部）
    pub fn set_company_filter(&mut self, company: Option<String>) {
        self.company_filter = company;
        self.current_page = 1;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.current_page = 1;
    }

    /// 跳转页码（钳制到当前视图的 [1, total_pages]）
    pub fn set_page(&mut self, page: usize) {
        let total = pagination::total_pages(self.filtered().len(), self.page_size);
        self.current_page = pagination::clamp_page(page, total);
    }

    /// 复位搜索/筛选/排序/页码（产品列表不动）
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.company_filter = None;
        self.sort_order = SortOrder::default();
        self.current_page = 1;
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// 品牌下拉候选（去重 + 字典序）
    pub fn unique_companies(&self) -> Vec<String> {
        let mut companies: Vec<String> = self
            .products
            .iter()
            .map(|p| p.company_name.clone())
            .filter(|c| !c.is_empty())
            .collect();
        companies.sort();
        companies.dedup();
        companies
    }

    /// 过滤: 搜索词（去空白,大小写不敏感,命中品名/货号/品牌任一）AND 品牌精确匹配
    fn filtered(&self) -> Vec<&Product> {
        let search_lower = self.search_term.trim().to_lowercase();

        self.products
            .iter()
            .filter(|p| {
                let matches_search = search_lower.is_empty()
                    || p.name.to_lowercase().contains(&search_lower)
                    || p.art_no.to_lowercase().contains(&search_lower)
                    || p.company_name.to_lowercase().contains(&search_lower);

                let matches_company = match &self.company_filter {
                    None => true,
                    Some(company) => &p.company_name == company,
                };

                matches_search && matches_company
            })
            .collect()
    }

    /// 稳定排序（同键行保持过滤后的相对顺序）
    fn sorted<'a>(&self, mut filtered: Vec<&'a Product>) -> Vec<&'a Product> {
        match self.sort_order {
            SortOrder::NameAsc => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::ArtnoAsc => filtered.sort_by(|a, b| a.art_no.cmp(&b.art_no)),
            SortOrder::ArtnoDesc => filtered.sort_by(|a, b| b.art_no.cmp(&a.art_no)),
            SortOrder::PriceAsc => filtered.sort_by(|a, b| {
                a.price
                    .unwrap_or(0.0)
                    .total_cmp(&b.price.unwrap_or(0.0))
            }),
            SortOrder::PriceDesc => filtered.sort_by(|a, b| {
                b.price
                    .unwrap_or(0.0)
                    .total_cmp(&a.price.unwrap_or(0.0))
            }),
        }
        filtered
    }

    /// 重算可见页（过滤 → 排序 → 分页,页码钳制后生效）
    pub fn visible_page(&self) -> PageView {
        let sorted = self.sorted(self.filtered());

        let total_matches = sorted.len();
        let total_pages = pagination::total_pages(total_matches, self.page_size);
        let current_page = pagination::clamp_page(self.current_page, total_pages);

        let items = pagination::page_slice(&sorted, current_page, self.page_size)
            .iter()
            .map(|p| (*p).clone())
            .collect();

        PageView {
            items,
            total_matches,
            total_pages,
            current_page,
            page_size: self.page_size,
            page_numbers: pagination::page_window(current_page, total_pages, PAGE_WINDOW_WIDTH),
        }
    }
}
