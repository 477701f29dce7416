// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// 扫描目标
///
/// 标识待扫描的职位列表页面，在单次扫描的生命周期内不可变
#[derive(Debug, Clone)]
pub struct ScrapeTarget {
    url: Url,
}

impl ScrapeTarget {
    /// 创建一个新的扫描目标
    ///
    /// # 参数
    ///
    /// * `url` - 目标页面的基础URL
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeTarget)` - 合法URL构造的目标
    /// * `Err(url::ParseError)` - URL解析失败
    pub fn new(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(url)?,
        })
    }

    /// 目标URL文本
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// 职位记录实体
///
/// 单个职位列表节点的规范化抽取结果。缺失的子元素对应
/// 缺失的字段值，不构成错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// 职位名称
    pub title: Option<String>,
    /// 工作地点
    pub location: Option<String>,
    /// 所属部门
    pub department: Option<String>,
    /// 职位描述
    pub description: Option<String>,
    /// 任职要求
    pub requirements: Option<String>,
    /// 发布日期
    pub posting_date: Option<String>,
    /// 职位详情链接
    pub url: Option<String>,
}

/// 扫描结果实体
///
/// 一次扫描调用产出的职位记录序列及统计信息。
/// 不变量：records.len() == positions_analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// 扫描唯一标识符
    pub scan_id: Uuid,
    /// 目标URL
    pub target: String,
    /// 职位记录序列，保持页面文档顺序
    pub records: Vec<JobRecord>,
    /// 成功分析的职位数量
    pub positions_analyzed: usize,
    /// 扫描时间戳
    pub scanned_at: DateTime<Utc>,
}

impl ScanResult {
    /// 创建一个空的扫描结果
    ///
    /// # 参数
    ///
    /// * `target` - 扫描目标
    ///
    /// # 返回值
    ///
    /// 返回记录为空、计数为零的新ScanResult实例
    pub fn empty(target: &ScrapeTarget) -> Self {
        Self {
            scan_id: Uuid::new_v4(),
            target: target.as_str().to_string(),
            records: Vec::new(),
            positions_analyzed: 0,
            scanned_at: Utc::now(),
        }
    }

    /// 追加一条职位记录并同步递增计数
    ///
    /// 计数只在此处递增，保证与记录序列长度一致
    pub fn push(&mut self, record: JobRecord) {
        self.records.push(record);
        self.positions_analyzed += 1;
    }
}
