// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::{JobRecord, ScanResult};
use crate::domain::services::extraction_service::ExtractionError;
use async_trait::async_trait;
use scraper::ElementRef;

/// 职位抓取器特质
///
/// 任何抓取器实现都必须提供列表扫描与单节点抽取两个能力。
/// 以多态接口表达，具体变体见scan_service::JobListingScraper
#[async_trait]
pub trait ListingScraper: Send + Sync {
    /// 从目标站点检索职位列表
    async fn get_job_listings(&self) -> ScanResult;

    /// 从单个职位列表节点抽取职位详情
    fn extract_job_details(&self, node: ElementRef<'_>) -> Result<JobRecord, ExtractionError>;
}
