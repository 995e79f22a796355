//! # Interpreter Version Module / 解释器版本模块
//!
//! This module models the `major.minor` version reported by the interpreter
//! and the exception predicate used to decide whether the formatting check
//! must be skipped on the current runtime.
//!
//! 此模块建模解释器报告的 `major.minor` 版本，
//! 以及用于判断当前运行时是否必须跳过格式化检查的例外谓词。

use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

/// The one-liner handed to the interpreter so it reports its own version
/// as a two-token dotted string, e.g. `3.10`.
/// 交给解释器的单行脚本，使其以两段点分字符串的形式报告自身版本，例如 `3.10`。
pub const VERSION_PROBE_SNIPPET: &str = "import sys; print('%s.%s' % sys.version_info[0:2])";

/// A parsed `major.minor` interpreter version.
///
/// Versions are compared numerically, never textually, so `3.10` and `3.1`
/// are distinct and an exception list entry can never match by prefix.
///
/// 解析后的 `major.minor` 解释器版本。
///
/// 版本按数值比较而非文本比较，因此 `3.10` 与 `3.1` 是不同的，
/// 例外列表条目永远不会按前缀匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterpreterVersion {
    /// Major version component / 主版本号
    pub major: u32,
    /// Minor version component / 次版本号
    pub minor: u32,
}

impl InterpreterVersion {
    /// Creates a version from its two components.
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Returns `true` when this version appears in the exception list.
    /// Only listed versions match; nothing is inferred for newer releases.
    ///
    /// 当此版本出现在例外列表中时返回 `true`。
    /// 只有列出的版本才会匹配；不会对较新的版本做任何推断。
    pub fn is_excluded(&self, excluded: &[InterpreterVersion]) -> bool {
        excluded.contains(self)
    }
}

// Versions travel through serialized step outcomes as their dotted string
// form, which keeps reports and the TOML exception list consistent.
impl serde::Serialize for InterpreterVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for InterpreterVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for InterpreterVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (major, minor) = trimmed
            .split_once('.')
            .ok_or_else(|| anyhow!("Expected a 'major.minor' version string, got '{trimmed}'"))?;
        let major: u32 = major
            .parse()
            .map_err(|_| anyhow!("Invalid major version component in '{trimmed}'"))?;
        let minor: u32 = minor
            .parse()
            .map_err(|_| anyhow!("Invalid minor version component in '{trimmed}'"))?;
        Ok(Self { major, minor })
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
