// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, ScraperEngine};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Instant;

/// 浏览器引擎
///
/// 基于chromiumoxide实现的浏览器渲染抓取引擎，用于
/// 需要执行JavaScript才能得到完整标记的页面
pub struct BrowserEngine;

#[async_trait]
impl ScraperEngine for BrowserEngine {
    /// 执行浏览器渲染抓取
    ///
    /// 每次调用启动一个独立的无头浏览器实例，导航完成后
    /// 捕获渲染后的文档标记。实例在所有退出路径上都会被
    /// 关闭，包括导航超时和脚本错误。
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 渲染后的页面标记
    /// * `Err(EngineError)` - 启动、导航或超时错误
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        let start = Instant::now();

        let config = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(request.timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(EngineError::Browser)?;

        // One isolated browser per fetch; instances are never shared across scans
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        // Drive browser events until the instance shuts down
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let navigation = tokio::time::timeout(request.timeout, async {
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?;

            page.set_user_agent(request.user_agent.as_str())
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?;

            if !request.headers.is_empty() {
                tracing::warn!(
                    "Custom headers are currently partially supported in BrowserEngine due to API constraints"
                );
            }

            // goto waits for the load event by default
            page.goto(request.url.as_str())
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?;

            page.content()
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))
        })
        .await;

        // Teardown runs on every path, including timeout and navigation errors
        let _ = browser.close().await;
        let _ = browser.wait().await;
        event_loop.abort();

        let content = match navigation {
            Ok(Ok(content)) => content,
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(EngineError::Timeout),
        };

        Ok(FetchResponse {
            // CDP does not surface the HTTP status on Page in this version
            status_code: 200,
            content,
            content_type: "text/html".to_string(),
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    ///
    /// # 返回值
    ///
    /// 引擎名称
    fn name(&self) -> &'static str {
        "browser"
    }
}
