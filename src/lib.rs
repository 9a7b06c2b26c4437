//! crockford32 - Crockford Base32 整数编码
//!
//! 将非负整数编码为易读、易抄写的字符串，字符集避开易混淆字符，
//! 支持校验位、补零与连字符分组。与 RFC 4648 Base32 不同，只处理整数。
//!
//! # 字符集
//!
//! ```text
//! 值     0-9   10-17     18-19  20-21  22-26      27-31      32-36 (仅校验位)
//! 字符   0-9   A B ... H  J K    M N    P Q R S T  V W X Y Z  * ~ $ = U
//! ```
//!
//! 解码时大小写不敏感，`I`/`L` 视为 `1`，`O` 视为 `0`，`-` 被忽略。
//!
//! # Example
//!
//! ```
//! use crockford32::{Crockford, DecodeOptions, EncodeOptions};
//!
//! let opts = EncodeOptions::new().with_checksum(true).with_split(2);
//! let code = Crockford::encode(1234u64, &opts).unwrap();
//! assert_eq!(code, "16-JD");
//!
//! let checked = DecodeOptions::new().with_checksum(true);
//! assert_eq!(Crockford::decode::<u64>("16-jd", &checked), Some(1234));
//! assert!(Crockford::is_valid("hello-world", &DecodeOptions::new()));
//! ```

pub mod charset;
pub mod codec;
pub mod error;
pub mod options;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use charset::{
    char_to_value, checksum_char_to_value, checksum_value_to_char, is_valid_char, value_to_char,
    CHECKSUM_MODULUS, CHECKSUM_SYMBOLS, ENCODE_SYMBOLS, INVALID_SYMBOL,
};
pub use codec::{checksum_of, decode, encode, is_valid, normalize, try_decode};
pub use error::{Error, Result};
pub use options::{DecodeOptions, EncodeOptions};

use num_traits::PrimInt;

/// 编解码操作的便捷入口
pub struct Crockford;

impl Crockford {
    /// 编码非负整数
    ///
    /// # Errors
    /// `number` 为负数时返回 [`Error::NegativeNumber`]。
    pub fn encode<T: PrimInt>(number: T, opts: &EncodeOptions) -> Result<String> {
        codec::encode(number, opts)
    }

    /// 解码，失败返回 `None`
    #[must_use]
    pub fn decode<T: PrimInt>(input: &str, opts: &DecodeOptions) -> Option<T> {
        codec::decode(input, opts)
    }

    /// 解码，失败返回 [`Error::MalformedInput`]
    ///
    /// # Errors
    /// 输入无法解码或校验位不匹配时返回错误。
    pub fn try_decode<T: PrimInt>(input: &str, opts: &DecodeOptions) -> Result<T> {
        codec::try_decode(input, opts)
    }

    /// 规范化字符串，非法字符替换为 `?`
    #[must_use]
    pub fn normalize(input: &str, opts: &DecodeOptions) -> String {
        codec::normalize(input, opts)
    }

    /// 验证字符串是否可解码
    #[must_use]
    pub fn is_valid(input: &str, opts: &DecodeOptions) -> bool {
        codec::is_valid(input, opts)
    }
}
