//! Serialize Rules - 序列化裁剪规则
//!
//! 规则写法沿用 `-relation.field` 形式：
//! - `-missions.planet`：渲染 `missions` 中每一项时省略 `planet`
//! - `-planet.id`：渲染 `planet` 时省略 `id`

use std::collections::{BTreeMap, BTreeSet};

/// 排除路径树
///
/// 每层记录本层要省略的 key，以及向下传递给子节点的规则分支
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeRules {
    excluded: BTreeSet<String>,
    branches: BTreeMap<String, SerializeRules>,
}

impl SerializeRules {
    /// 解析规则列表
    ///
    /// 只支持排除规则（`-` 前缀）；不带前缀或为空的规则会被忽略
    pub fn parse(rules: &[&str]) -> Self {
        let mut tree = Self::default();
        for rule in rules {
            let Some(path) = rule.strip_prefix('-') else {
                tracing::warn!(rule = %rule, "Ignoring non-exclusion serialize rule");
                continue;
            };
            let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
            tree.insert(&segments);
        }
        tree
    }

    fn insert(&mut self, segments: &[&str]) {
        match segments {
            [] => {}
            [key] => {
                self.excluded.insert((*key).to_string());
            }
            [head, rest @ ..] => self
                .branches
                .entry((*head).to_string())
                .or_default()
                .insert(rest),
        }
    }

    /// 合并另一组规则（并集）
    pub fn merge(&mut self, other: &SerializeRules) {
        self.excluded.extend(other.excluded.iter().cloned());
        for (key, branch) in &other.branches {
            self.branches.entry(key.clone()).or_default().merge(branch);
        }
    }

    /// 返回合并后的新规则
    pub fn merged(&self, other: &SerializeRules) -> Self {
        let mut rules = self.clone();
        rules.merge(other);
        rules
    }

    /// 本层是否省略该 key
    pub fn excludes(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }

    /// 取传递给子节点 `key` 的规则
    pub fn branch(&self, key: &str) -> SerializeRules {
        self.branches.get(key).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.branches.values().all(SerializeRules::is_empty)
    }
}
