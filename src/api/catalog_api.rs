// ==========================================
// 阀门产品目录系统 - 目录 API
// ==========================================
// 职责: 目录拉取编排 + 视图状态读写的业务入口
// 红线: 最新拉取生效（过期结果不落 store）
// ==========================================

use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::store::{CatalogStore, PageView};
use crate::domain::product::FetchBatch;
use crate::domain::types::SortOrder;
use crate::gateway::sheet::SheetSource;
use crate::ingest::product_mapper::ProductMapper;

// ==========================================
// CatalogApi - 目录 API
// ==========================================

/// 目录API
///
/// 职责：
/// 1. 表格拉取 → 接入映射 → store 提交的编排
/// 2. 搜索/筛选/排序/分页参数的写入口
/// 3. 可见页与品牌候选的查询
pub struct CatalogApi {
    store: Arc<Mutex<CatalogStore>>,
    source: Arc<dyn SheetSource>,
    mapper: ProductMapper,
}

impl CatalogApi {
    /// 创建新的CatalogApi实例
    ///
    /// # 参数
    /// - store: 目录视图状态（与展示层共享）
    /// - source: 表格数据源
    /// - mapper: 产品映射器
    pub fn new(
        store: Arc<Mutex<CatalogStore>>,
        source: Arc<dyn SheetSource>,
        mapper: ProductMapper,
    ) -> Self {
        Self {
            store,
            source,
            mapper,
        }
    }

    fn lock_store(&self) -> ApiResult<std::sync::MutexGuard<'_, CatalogStore>> {
        self.store
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }

    // ==========================================
    // 拉取编排
    // ==========================================

    /// 拉取目录并提交到 store
    ///
    /// # 返回
    /// - Ok(Some(FetchBatch)): 本次结果已生效
    /// - Ok(None): 本次结果晚于更新的拉取,已丢弃
    /// - Err(ApiError): 拉取失败（已写入 store 的错误横幅文案）
    ///
    /// # 说明
    /// - 不持锁跨越网络等待;令牌机制保证最新拉取生效
    /// - 失败不自动重试,由用户重新触发
    pub async fn refresh(&self) -> ApiResult<Option<FetchBatch>> {
        let token = self.lock_store()?.begin_fetch();

        match self.source.fetch_rows().await {
            Ok(rows) => {
                let outcome = self.mapper.map(&rows);
                let batch = outcome.batch;

                let mut store = self.lock_store()?;
                if store.commit_fetch(token, outcome.products) {
                    info!(
                        batch_id = %batch.batch_id,
                        total_rows = batch.total_rows,
                        mapped = batch.mapped,
                        skipped = batch.skipped_identity,
                        duplicates = batch.duplicates,
                        "目录拉取完成"
                    );
                    Ok(Some(batch))
                } else {
                    warn!(batch_id = %batch.batch_id, "过期拉取结果,已丢弃");
                    Ok(None)
                }
            }
            Err(gateway_err) => {
                let api_err = ApiError::from(gateway_err);
                let mut store = self.lock_store()?;
                if store.fail_fetch(token, api_err.user_message()) {
                    warn!(error = %api_err, "目录拉取失败");
                }
                Err(api_err)
            }
        }
    }

    // ==========================================
    // 参数写入口
    // ==========================================

    /// 应用搜索词（显式触发: Enter/点击时调用）
    pub fn apply_search_term(&self, term: &str) -> ApiResult<()> {
        self.lock_store()?.apply_search_term(term);
        Ok(())
    }

    /// 设置品牌筛选（None = 全部）
    pub fn set_company_filter(&self, company: Option<String>) -> ApiResult<()> {
        self.lock_store()?.set_company_filter(company);
        Ok(())
    }

    pub fn set_sort_order(&self, order: SortOrder) -> ApiResult<()> {
        self.lock_store()?.set_sort_order(order);
        Ok(())
    }

    pub fn set_page(&self, page: usize) -> ApiResult<()> {
        self.lock_store()?.set_page(page);
        Ok(())
    }

    pub fn reset_filters(&self) -> ApiResult<()> {
        self.lock_store()?.reset_filters();
        Ok(())
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 当前可见页快照
    pub fn visible_page(&self) -> ApiResult<PageView> {
        Ok(self.lock_store()?.visible_page())
    }

    /// 品牌下拉候选
    pub fn unique_companies(&self) -> ApiResult<Vec<String>> {
        Ok(self.lock_store()?.unique_companies())
    }

    /// 是否有拉取在途
    pub fn is_loading(&self) -> ApiResult<bool> {
        Ok(self.lock_store()?.is_loading())
    }

    /// 最近一次拉取失败的横幅文案
    pub fn last_error(&self) -> ApiResult<Option<String>> {
        Ok(self.lock_store()?.last_error().map(|s| s.to_string()))
    }
}
