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

use jobscan::config::settings::Settings;
use jobscan::domain::models::job_record::ScrapeTarget;
use jobscan::domain::scraping::ListingScraper;
use jobscan::domain::services::scan_service::JobListingScraper;
use jobscan::engines::router::ContentFetcher;
use jobscan::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 薄驱动层：初始化遥测与配置，对配置的目标执行一次扫描，
/// 输出职位记录与汇总计数
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobscan...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the pipeline
    let target = ScrapeTarget::new(&settings.scan.target_url)?;
    let fetcher = ContentFetcher::new(settings.fetcher.clone());
    let scraper = JobListingScraper::new(target, fetcher, &settings.scan, settings.selectors.clone());

    // 4. Run one scan and report
    let result = scraper.get_job_listings().await;
    for record in &result.records {
        println!("{}", serde_json::to_string(record)?);
    }
    println!("Found {} job listings", result.positions_analyzed);

    Ok(())
}
