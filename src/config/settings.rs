// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::traits::RenderMode;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// 应用程序配置设置
///
/// 包含扫描目标、抓取行为和选择器等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 扫描配置
    pub scan: ScanSettings,
    /// 抓取配置
    pub fetcher: FetcherSettings,
    /// 选择器配置
    pub selectors: SelectorSettings,
}

/// 扫描配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// 目标职位列表页面URL
    pub target_url: String,
    /// 渲染模式 (static, dynamic)
    pub render_mode: RenderMode,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// User-Agent请求头
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 额外的静态请求头
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// 选择器配置设置
///
/// 职位列表签名类与各字段的子元素选择器。这组选择器是
/// 可替换的站点配置数据，不属于核心算法
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorSettings {
    /// 职位列表签名类集合
    pub signature_classes: Vec<String>,
    /// 标题选择器（按标签）
    pub title: String,
    /// 链接选择器（按标签，取href属性）
    pub link: String,
    /// 工作地点选择器
    pub location: String,
    /// 部门选择器
    pub department: String,
    /// 职位描述选择器
    pub description: String,
    /// 任职要求选择器
    pub requirements: String,
    /// 发布日期选择器
    pub posting_date: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default scan settings
            .set_default("scan.target_url", "https://example-job-site.com/careers")?
            .set_default("scan.render_mode", "dynamic")?
            // Default fetcher settings
            .set_default(
                "fetcher.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )?
            .set_default("fetcher.timeout_secs", 30)?
            // Default selector settings; generic placeholders until tuned per site
            .set_default(
                "selectors.signature_classes",
                vec!["job-listing", "job-card", "job-posting"],
            )?
            .set_default("selectors.title", "h2")?
            .set_default("selectors.link", "a")?
            .set_default("selectors.location", ".location")?
            .set_default("selectors.department", ".department")?
            .set_default("selectors.description", ".description")?
            .set_default("selectors.requirements", ".requirements")?
            .set_default("selectors.posting_date", ".date")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBSCAN").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
