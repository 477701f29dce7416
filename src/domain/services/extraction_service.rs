// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SelectorSettings;
use crate::domain::models::job_record::JobRecord;
use crate::utils::text_processing::normalize;
use scraper::{ElementRef, Selector};
use thiserror::Error;

/// 抽取错误类型
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// 字段选择器无法解析
    #[error("Invalid selector for field '{field}': {reason}")]
    InvalidSelector {
        field: &'static str,
        reason: String,
    },
}

/// 从单个职位列表节点抽取结构化数据
///
/// 对七个字段分别在节点内定位指定的子元素并规范化其文本。
/// 子元素缺失时对应字段为缺失值，不构成错误；配置中的
/// 选择器无法解析才是硬失败，由调用方记录并跳过该节点
///
/// # 参数
///
/// * `node` - 职位列表节点
/// * `selectors` - 字段选择器配置
///
/// # 返回值
///
/// * `Ok(JobRecord)` - 抽取出的职位记录
/// * `Err(ExtractionError)` - 选择器配置错误
pub fn extract(
    node: ElementRef<'_>,
    selectors: &SelectorSettings,
) -> Result<JobRecord, ExtractionError> {
    Ok(JobRecord {
        title: select_text(node, &selectors.title, "title")?,
        location: select_text(node, &selectors.location, "location")?,
        department: select_text(node, &selectors.department, "department")?,
        description: select_text(node, &selectors.description, "description")?,
        requirements: select_text(node, &selectors.requirements, "requirements")?,
        posting_date: select_text(node, &selectors.posting_date, "posting_date")?,
        url: select_attr(node, &selectors.link, "href", "url")?,
    })
}

/// 定位子元素并返回其规范化文本
fn select_text(
    node: ElementRef<'_>,
    selector: &str,
    field: &'static str,
) -> Result<Option<String>, ExtractionError> {
    let selector = parse_selector(selector, field)?;
    Ok(node
        .select(&selector)
        .next()
        .map(|element| normalize(&element.text().collect::<Vec<_>>().join(" "))))
}

/// 定位第一个匹配的子元素并返回指定属性值
fn select_attr(
    node: ElementRef<'_>,
    selector: &str,
    attr: &str,
    field: &'static str,
) -> Result<Option<String>, ExtractionError> {
    let selector = parse_selector(selector, field)?;
    Ok(node
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.to_string()))
}

fn parse_selector(selector: &str, field: &'static str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        field,
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
