// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块实现扫描管线的各个环节：
/// - 列表定位（listing_locator）：按签名类集合定位职位节点
/// - 字段抽取（extraction_service）：从单个节点抽取职位记录
/// - 扫描编排（scan_service）：驱动获取、解析、定位、抽取全流程
pub mod extraction_service;
pub mod listing_locator;
pub mod scan_service;
