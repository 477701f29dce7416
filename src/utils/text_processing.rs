// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 规范化文本内容
///
/// 去除首尾空白，并把内部的连续空白（含换行和制表符）
/// 折叠为单个空格。纯函数，对任意输入都不会失败
///
/// # 参数
///
/// * `text` - 原始文本
///
/// # 返回值
///
/// 规范化后的文本；空输入产出空字符串
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Senior\n\tEngineer  "), "Senior Engineer");
        assert_eq!(normalize("a  b   c"), "a b c");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "  Senior\n\tEngineer  ",
            "already normal",
            "",
            "\t\t\n",
            "  边缘  情况\u{3000}文本  ",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
