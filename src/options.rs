//! 编解码选项
//!
//! 类型化选项结构体，外加 `key=value` 形式的动态解析入口；
//! 动态入口遇到未知选项名时返回 [`Error::InvalidOption`]。

use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{Error, Result};

/// `encode` 选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// 最小输出宽度（不含连字符），不足时左侧补 `0`
    pub length: Option<usize>,
    /// 从右侧起每 `split` 个字符插入一个 `-`
    pub split: Option<NonZeroUsize>,
    /// 是否追加校验位
    pub checksum: bool,
}

impl EncodeOptions {
    /// 选项名
    pub const KEYS: [&'static str; 3] = ["length", "split", "checksum"];

    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: None,
            split: None,
            checksum: false,
        }
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// 设置分组间隔；`split` 为 0 时保持不分组
    #[must_use]
    pub const fn with_split(mut self, split: usize) -> Self {
        self.split = NonZeroUsize::new(split);
        self
    }

    #[must_use]
    pub const fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    /// 从键值对构造选项
    ///
    /// # Errors
    /// 出现 `length`/`split`/`checksum` 以外的键时返回 [`Error::InvalidOption`]，
    /// 值无法解析（含 `split=0`）时返回 [`Error::InvalidOptionValue`]。
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut opts = Self::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref().trim(), value.as_ref().trim());
            match key {
                "length" => opts.length = Some(parse_usize(key, value)?),
                "split" => {
                    let split = NonZeroUsize::new(parse_usize(key, value)?)
                        .ok_or_else(|| invalid_value(key, value))?;
                    opts.split = Some(split);
                }
                "checksum" => opts.checksum = parse_bool(key, value)?,
                other => return Err(Error::InvalidOption(other.to_string())),
            }
        }
        Ok(opts)
    }
}

impl FromStr for EncodeOptions {
    type Err = Error;

    /// 解析 `length=5,split=2,checksum` 形式的字符串
    fn from_str(s: &str) -> Result<Self> {
        Self::from_pairs(split_pairs(s))
    }
}

/// `decode` / `normalize` / `is_valid` 选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// 输入末尾是否带校验位
    pub checksum: bool,
}

impl DecodeOptions {
    /// 选项名
    pub const KEYS: [&'static str; 1] = ["checksum"];

    #[must_use]
    pub const fn new() -> Self {
        Self { checksum: false }
    }

    #[must_use]
    pub const fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    /// 从键值对构造选项
    ///
    /// # Errors
    /// 出现 `checksum` 以外的键时返回 [`Error::InvalidOption`]，
    /// 值不是布尔值时返回 [`Error::InvalidOptionValue`]。
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut opts = Self::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref().trim(), value.as_ref().trim());
            match key {
                "checksum" => opts.checksum = parse_bool(key, value)?,
                other => return Err(Error::InvalidOption(other.to_string())),
            }
        }
        Ok(opts)
    }
}

impl FromStr for DecodeOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_pairs(split_pairs(s))
    }
}

/// `a=1,b` → `[("a", "1"), ("b", "true")]`，空段忽略
fn split_pairs(s: &str) -> impl Iterator<Item = (&str, &str)> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.split_once('=').unwrap_or((part, "true")))
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| invalid_value(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn invalid_value(key: &str, value: &str) -> Error {
    Error::InvalidOptionValue {
        option: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let opts = EncodeOptions::new()
            .with_length(5)
            .with_split(2)
            .with_checksum(true);
        assert_eq!(opts.length, Some(5));
        assert_eq!(opts.split.map(NonZeroUsize::get), Some(2));
        assert!(opts.checksum);

        assert!(EncodeOptions::new().with_split(0).split.is_none());
    }

    #[test]
    fn test_from_pairs() {
        let opts = EncodeOptions::from_pairs([("length", "5"), ("split", "3")]).unwrap();
        assert_eq!(opts, EncodeOptions::new().with_length(5).with_split(3));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result = EncodeOptions::from_pairs([("length", "5"), ("width", "3")]);
        assert_eq!(result, Err(Error::InvalidOption("width".to_string())));

        // decode 不接受 encode 专用选项
        let result = DecodeOptions::from_pairs([("length", "5")]);
        assert_eq!(result, Err(Error::InvalidOption("length".to_string())));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            EncodeOptions::from_pairs([("split", "0")]),
            Err(Error::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            EncodeOptions::from_pairs([("length", "-1")]),
            Err(Error::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            DecodeOptions::from_pairs([("checksum", "maybe")]),
            Err(Error::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let opts: EncodeOptions = "length=5, split=2,checksum".parse().unwrap();
        assert_eq!(
            opts,
            EncodeOptions::new()
                .with_length(5)
                .with_split(2)
                .with_checksum(true)
        );

        let opts: DecodeOptions = "checksum=false".parse().unwrap();
        assert!(!opts.checksum);

        let opts: DecodeOptions = "".parse().unwrap();
        assert_eq!(opts, DecodeOptions::default());

        assert!("bogus".parse::<DecodeOptions>().is_err());
    }
}
