// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// 在解析后的文档中定位职位列表节点
///
/// 扫描class属性与签名类集合相交的div元素。签名类集合是
/// 外部配置数据；定位器保证按文档顺序返回所有匹配节点，
/// 无匹配时返回空序列而非错误
///
/// # 参数
///
/// * `document` - 解析后的文档树
/// * `signature_classes` - 职位列表签名类集合
///
/// # 返回值
///
/// 按文档顺序排列的职位列表节点序列
pub fn locate<'a>(document: &'a Html, signature_classes: &[String]) -> Vec<ElementRef<'a>> {
    if signature_classes.is_empty() {
        return Vec::new();
    }

    let group = signature_classes
        .iter()
        .map(|class| format!("div.{}", class))
        .collect::<Vec<_>>()
        .join(", ");

    let selector = match Selector::parse(&group) {
        Ok(selector) => selector,
        Err(e) => {
            warn!(selector = %group, error = %e, "Invalid listing signature selector");
            return Vec::new();
        }
    };

    document.select(&selector).collect()
}
