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

use crate::domain::models::business::BusinessRecord;
use crate::domain::models::employee_range::EmployeeRange;

/// 匹配策略
///
/// 能根据记录中的员工数据给出确定结论时返回 `Some`，否则返回 `None` 交给下一个策略。
type MatchStrategy = fn(&BusinessRecord, &EmployeeRange) -> Option<bool>;

/// 按优先级排列的策略：先标签，后估计值
const STRATEGIES: &[MatchStrategy] = &[match_by_tag, match_by_estimate];

/// 员工数过滤器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    range: EmployeeRange,
    strict: bool,
}

impl EmployeeFilter {
    /// # 参数
    ///
    /// * `range` - 查询区间
    /// * `strict` - 为 true 时排除没有员工数据的记录
    pub fn new(range: EmployeeRange, strict: bool) -> Self {
        Self { range, strict }
    }

    /// 判断记录是否落在查询区间内
    ///
    /// 未设置任何边界时总是匹配。解析失败一律视为“无数据”。
    pub fn matches(&self, record: &BusinessRecord) -> bool {
        if self.range.is_unbounded() {
            return true;
        }

        STRATEGIES
            .iter()
            .find_map(|strategy| strategy(record, &self.range))
            .unwrap_or(!self.strict)
    }
}

/// `matches(record, min, max, strict)` 的函数形式
pub fn matches(record: &BusinessRecord, min: Option<i64>, max: Option<i64>, strict: bool) -> bool {
    EmployeeFilter::new(EmployeeRange::new(min, max), strict).matches(record)
}

/// 解析员工数标签
///
/// `"10-50"` 解析为 `(10, 50)`，`"12"` 解析为 `(12, 12)`。
/// 只按第一个 `-` 切分，不要求左值不大于右值。
pub fn parse_employees_tag(tag: &str) -> Option<(i64, i64)> {
    if tag.is_empty() {
        return None;
    }

    match tag.split_once('-') {
        Some((low, high)) => Some((low.trim().parse().ok()?, high.trim().parse().ok()?)),
        None => {
            let value = tag.trim().parse().ok()?;
            Some((value, value))
        }
    }
}

fn match_by_tag(record: &BusinessRecord, range: &EmployeeRange) -> Option<bool> {
    let (low, high) = parse_employees_tag(record.employees_tag.as_deref()?)?;
    Some(range.overlaps(low, high))
}

fn match_by_estimate(record: &BusinessRecord, range: &EmployeeRange) -> Option<bool> {
    record.employees_estimate.map(|estimate| range.contains(estimate))
}

#[cfg(test)]
#[path = "employee_filter_test.rs"]
mod tests;
