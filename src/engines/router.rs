// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::FetcherSettings;
use crate::engines::browser_engine::BrowserEngine;
use crate::engines::fetch_engine::FetchEngine;
use crate::engines::traits::{FetchRequest, RenderMode, ScraperEngine};
use std::time::Duration;
use tracing::{error, info};

/// 内容获取器
///
/// 根据渲染模式把抓取请求分发给静态或浏览器引擎，
/// 并把引擎层错误收敛为缺失值：任何抓取失败都被记录
/// 日志并返回None，绝不向上抛出
pub struct ContentFetcher {
    /// 静态HTTP引擎
    static_engine: FetchEngine,
    /// 浏览器渲染引擎
    browser_engine: BrowserEngine,
    /// 抓取配置
    settings: FetcherSettings,
}

impl ContentFetcher {
    /// 创建新的内容获取器
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置
    ///
    /// # 返回值
    ///
    /// 返回新的内容获取器实例
    pub fn new(settings: FetcherSettings) -> Self {
        Self {
            static_engine: FetchEngine,
            browser_engine: BrowserEngine,
            settings,
        }
    }

    fn build_request(&self, url: &str) -> FetchRequest {
        FetchRequest {
            url: url.to_string(),
            headers: self.settings.headers.clone(),
            user_agent: self.settings.user_agent.clone(),
            timeout: Duration::from_secs(self.settings.timeout_secs),
        }
    }

    /// 获取页面标记
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `mode` - 渲染模式
    ///
    /// # 返回值
    ///
    /// * `Some(String)` - 页面标记文本
    /// * `None` - 抓取失败（已记录日志）
    pub async fn fetch(&self, url: &str, mode: RenderMode) -> Option<String> {
        let request = self.build_request(url);
        let engine: &dyn ScraperEngine = match mode {
            RenderMode::Static => &self.static_engine,
            RenderMode::Dynamic => &self.browser_engine,
        };

        match engine.fetch(&request).await {
            Ok(response) => {
                info!(
                    url = %url,
                    engine = engine.name(),
                    status = response.status_code,
                    elapsed_ms = response.response_time_ms,
                    "Fetched page content"
                );
                Some(response.content)
            }
            Err(e) => {
                error!(url = %url, engine = engine.name(), error = %e, "Error fetching page content");
                None
            }
        }
    }
}
