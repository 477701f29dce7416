// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 扫描目标（ScrapeTarget）：待扫描的职位列表页面
/// - 职位记录（JobRecord）：单个职位的规范化抽取结果
/// - 扫描结果（ScanResult）：一次扫描的记录序列与统计
pub mod job_record;
