// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 员工数查询区间
///
/// 上下界均为闭区间，且可以各自缺省（缺省一侧视为无界）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl EmployeeRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// 是否未请求任何过滤
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// 判断 `[low, high]` 与查询区间是否有交集
    ///
    /// `low <= high` 不做校验，只比较 `high` 与下界、`low` 与上界。
    pub fn overlaps(&self, low: i64, high: i64) -> bool {
        if self.min.is_some_and(|min| high < min) {
            return false;
        }
        if self.max.is_some_and(|max| low > max) {
            return false;
        }
        true
    }

    pub fn contains(&self, value: i64) -> bool {
        self.overlaps(value, value)
    }
}
