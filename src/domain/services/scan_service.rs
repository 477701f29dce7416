// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{ScanSettings, SelectorSettings};
use crate::domain::models::job_record::{JobRecord, ScanResult, ScrapeTarget};
use crate::domain::scraping::ListingScraper;
use crate::domain::services::extraction_service::{self, ExtractionError};
use crate::domain::services::listing_locator;
use crate::engines::router::ContentFetcher;
use crate::engines::traits::RenderMode;
use async_trait::async_trait;
use scraper::{ElementRef, Html};
use tracing::{error, info, warn};

/// 职位列表抓取器
///
/// 驱动完整的扫描管线：获取 → 解析 → 定位 → 逐节点抽取 →
/// 聚合。每次调用都是独立的全新运行，职位计数仅在调用内
/// 累加。管线内的任何失败都收敛为空值或空结果，调用方
/// 永远得到一个结构完整的ScanResult
pub struct JobListingScraper {
    /// 扫描目标
    target: ScrapeTarget,
    /// 内容获取器
    fetcher: ContentFetcher,
    /// 渲染模式
    render_mode: RenderMode,
    /// 选择器配置
    selectors: SelectorSettings,
}

impl JobListingScraper {
    /// 创建新的职位列表抓取器
    ///
    /// # 参数
    ///
    /// * `target` - 扫描目标
    /// * `fetcher` - 内容获取器
    /// * `scan` - 扫描配置（渲染模式）
    /// * `selectors` - 选择器配置
    ///
    /// # 返回值
    ///
    /// 返回新的职位列表抓取器实例
    pub fn new(
        target: ScrapeTarget,
        fetcher: ContentFetcher,
        scan: &ScanSettings,
        selectors: SelectorSettings,
    ) -> Self {
        Self {
            target,
            fetcher,
            render_mode: scan.render_mode,
            selectors,
        }
    }
}

#[async_trait]
impl ListingScraper for JobListingScraper {
    /// 检索并解析目标站点的职位列表
    ///
    /// # 返回值
    ///
    /// 结构完整的扫描结果；获取失败时为空结果、零计数
    async fn get_job_listings(&self) -> ScanResult {
        info!(target = %self.target.as_str(), "Starting job scan");

        let Some(markup) = self
            .fetcher
            .fetch(self.target.as_str(), self.render_mode)
            .await
        else {
            error!(target = %self.target.as_str(), "Failed to retrieve page content");
            return ScanResult::empty(&self.target);
        };

        // Html is not Send; all tree work happens after the fetch await completes
        let document = Html::parse_document(&markup);
        let nodes = listing_locator::locate(&document, &self.selectors.signature_classes);

        let mut result = ScanResult::empty(&self.target);
        for (index, node) in nodes.into_iter().enumerate() {
            match self.extract_job_details(node) {
                Ok(record) => result.push(record),
                Err(e) => {
                    warn!(index, error = %e, "Error extracting job details, skipping node");
                }
            }
        }

        info!(
            positions_analyzed = result.positions_analyzed,
            "Successfully analyzed positions"
        );
        result
    }

    /// 从单个职位列表节点抽取职位详情
    fn extract_job_details(&self, node: ElementRef<'_>) -> Result<JobRecord, ExtractionError> {
        extraction_service::extract(node, &self.selectors)
    }
}

#[cfg(test)]
#[path = "scan_service_test.rs"]
mod tests;
