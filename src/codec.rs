//! 编解码实现
//!
//! 数值按 5 bit 分组，从最低位开始取组，高位组在前输出。
//! 校验位 = 数值 mod 37，取自 32 + 5 字符的组合字符集。

use num_traits::{NumCast, PrimInt};

use crate::charset::{
    char_to_value, checksum_char_to_value, value_to_char, CHECKSUM_MODULUS, CHECKSUM_SYMBOLS,
    ENCODE_SYMBOLS, INVALID_SYMBOL,
};
use crate::error::{Error, Result};
use crate::options::{DecodeOptions, EncodeOptions};

const BITS_PER_SYMBOL: u32 = 5;
const SYMBOL_MASK: u128 = (1 << BITS_PER_SYMBOL) - 1;

/// u128 最多 26 个符号，另加 1 个校验位
const MAX_SYMBOLS: usize = 27;

/// 编码非负整数
///
/// 处理顺序：编码 → 追加校验位 → 左侧补零 → 从右侧分组插入 `-`。
///
/// # Example
/// ```
/// use crockford32::{encode, EncodeOptions};
///
/// assert_eq!(encode(1234u32, &EncodeOptions::new()).unwrap(), "16J");
/// let opts = EncodeOptions::new().with_length(5).with_split(2);
/// assert_eq!(encode(1234u32, &opts).unwrap(), "0-01-6J");
/// ```
///
/// # Errors
/// `number` 为负数时返回 [`Error::NegativeNumber`]；
/// `length` 过大、无法分配输出时返回 [`Error::InvalidOptionValue`]。
pub fn encode<T: PrimInt>(number: T, opts: &EncodeOptions) -> Result<String> {
    let value = number.to_u128().ok_or(Error::NegativeNumber)?;

    let mut symbols = Vec::with_capacity(MAX_SYMBOLS);
    let mut rest = value;
    loop {
        #[allow(clippy::cast_possible_truncation)]
        let index = (rest & SYMBOL_MASK) as usize;
        symbols.push(ENCODE_SYMBOLS[index]);
        rest >>= BITS_PER_SYMBOL;
        if rest == 0 {
            break;
        }
    }
    symbols.reverse();

    if opts.checksum {
        symbols.push(checksum_symbol(value));
    }

    let width = opts.length.unwrap_or(0).max(symbols.len());
    let pad = width - symbols.len();
    let hyphens = opts.split.map_or(0, |split| (width - 1) / split.get());

    // 超大的 length 返回错误而不是在分配时 panic
    let mut out = String::new();
    width
        .checked_add(hyphens)
        .and_then(|total| out.try_reserve_exact(total).ok())
        .ok_or_else(|| Error::InvalidOptionValue {
            option: "length".to_string(),
            value: width.to_string(),
        })?;

    let padded = std::iter::repeat(ENCODE_SYMBOLS[0]).take(pad).chain(symbols);
    for (i, c) in padded.enumerate() {
        // 从右侧起每 split 个字符插入 `-`
        if let Some(split) = opts.split {
            if i > 0 && (width - i) % split.get() == 0 {
                out.push('-');
            }
        }
        out.push(char::from(c));
    }

    Ok(out)
}

/// 解码字符串，失败返回 `None`
///
/// 忽略 `-`，大小写不敏感，I/L 视为 1，O 视为 0。
/// 结果超出 `T` 的范围同样视为失败。
///
/// # Example
/// ```
/// use crockford32::{decode, DecodeOptions};
///
/// let opts = DecodeOptions::new();
/// assert_eq!(decode::<u32>("1-6-j", &opts), Some(1234));
/// assert_eq!(decode::<u32>("OI", &opts), Some(1));
/// assert_eq!(decode::<u32>("BU-123", &opts), None);
/// ```
#[must_use]
pub fn decode<T: PrimInt>(input: &str, opts: &DecodeOptions) -> Option<T> {
    if !opts.checksum {
        return decode_body(input);
    }

    let (body, check) = split_checksum(input)?;
    let expected = ascii(check).and_then(checksum_char_to_value)?;
    let value: T = decode_body(body)?;
    let modulus = <T as NumCast>::from(CHECKSUM_MODULUS)?;

    if (value % modulus).to_u8()? == expected {
        Some(value)
    } else {
        None
    }
}

/// 同 [`decode`]，失败时返回错误；`checksum` 选项同样生效
///
/// # Errors
/// 输入含非法字符、校验位不匹配或溢出 `T` 时返回 [`Error::MalformedInput`]。
pub fn try_decode<T: PrimInt>(input: &str, opts: &DecodeOptions) -> Result<T> {
    decode(input, opts).ok_or(Error::MalformedInput)
}

/// 规范化：转大写、去掉 `-`、同义字符替换为标准字符
///
/// 非法字符替换为 `?`，不会失败。校验位模式下末尾字符原样保留；
/// 若末尾字符不在校验位字符集中（或输入为空），追加 `?`。
#[must_use]
pub fn normalize(input: &str, opts: &DecodeOptions) -> String {
    let (body, check) = if opts.checksum {
        match split_checksum(input) {
            Some((body, check)) => (body, Some(check)),
            None => (input, None),
        }
    } else {
        (input, None)
    };

    let mut out: String = clean(body)
        .map(|c| {
            let symbol = ascii(c).and_then(char_to_value).and_then(value_to_char);
            char::from(symbol.unwrap_or(INVALID_SYMBOL))
        })
        .collect();

    if opts.checksum {
        let check = check.filter(|&c| ascii(c).and_then(checksum_char_to_value).is_some());
        out.push(check.unwrap_or(char::from(INVALID_SYMBOL)));
    }

    out
}

/// 字符串可解码时返回 true（以 `normalize` 的输出为准）
#[must_use]
pub fn is_valid(input: &str, opts: &DecodeOptions) -> bool {
    !normalize(input, opts).contains(char::from(INVALID_SYMBOL))
}

/// 计算校验值 (0-36)
#[must_use]
pub fn checksum_of(value: u128) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    let check = (value % <u128 as From<u8>>::from(CHECKSUM_MODULUS)) as u8;
    check
}

/// 校验值对应的字符
fn checksum_symbol(value: u128) -> u8 {
    let check = <usize as From<u8>>::from(checksum_of(value));
    if check < ENCODE_SYMBOLS.len() {
        ENCODE_SYMBOLS[check]
    } else {
        CHECKSUM_SYMBOLS[check - ENCODE_SYMBOLS.len()]
    }
}

/// 逐字符折叠为 `T`，遇到非法字符或溢出返回 None
fn decode_body<T: PrimInt>(input: &str) -> Option<T> {
    let radix = <T as NumCast>::from(1u8 << BITS_PER_SYMBOL)?;
    clean(input).try_fold(T::zero(), |acc, c| {
        let value = <T as NumCast>::from(ascii(c).and_then(char_to_value)?)?;
        acc.checked_mul(&radix)?.checked_add(&value)
    })
}

/// 拆出末尾校验位字符（取自原始输入，先于去连字符与大写转换）
fn split_checksum(input: &str) -> Option<(&str, char)> {
    let mut chars = input.chars();
    let check = chars.next_back()?;
    Some((chars.as_str(), check))
}

/// 去掉 `-` 并转大写
fn clean(input: &str) -> impl Iterator<Item = char> + '_ {
    input
        .chars()
        .filter(|&c| c != '-')
        .map(|c| c.to_ascii_uppercase())
}

/// 仅接受 ASCII 字符
fn ascii(c: char) -> Option<u8> {
    u8::try_from(c).ok().filter(u8::is_ascii)
}
