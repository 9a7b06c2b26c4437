//! 字符集定义
//!
//! Crockford Base32: 10 个数字 + 22 个字母，排除易混淆的 I/L/O 以及 U。
//! 解码时 I/L 视为 1，O 视为 0，大小写不敏感。

/// 编码字符集，索引即数值 (0-31)
pub const ENCODE_SYMBOLS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// 校验位扩展字符，对应数值 32-36
pub const CHECKSUM_SYMBOLS: &[u8; 5] = b"*~$=U";

/// 校验位模数
pub const CHECKSUM_MODULUS: u8 = 37;

/// 无效字符占位符，仅出现在 `normalize` 的输出中
pub const INVALID_SYMBOL: u8 = b'?';

const NONE: u8 = 0xFF;

/// 字符 → 数值 (0-31)，含小写与 I/L/O 同义字符
static DECODE_TABLE: [u8; 256] = build_decode_table(false);

/// 字符 → 数值 (0-36)，仅用于末尾校验位
static CHECKSUM_DECODE_TABLE: [u8; 256] = build_decode_table(true);

const fn build_decode_table(with_checksum: bool) -> [u8; 256] {
    let mut table = [NONE; 256];

    let mut i = 0;
    while i < ENCODE_SYMBOLS.len() {
        let c = ENCODE_SYMBOLS[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }

    // 同义字符
    table[b'I' as usize] = 1;
    table[b'i' as usize] = 1;
    table[b'L' as usize] = 1;
    table[b'l' as usize] = 1;
    table[b'O' as usize] = 0;
    table[b'o' as usize] = 0;

    if with_checksum {
        let mut j = 0;
        while j < CHECKSUM_SYMBOLS.len() {
            let c = CHECKSUM_SYMBOLS[j];
            let value = (ENCODE_SYMBOLS.len() + j) as u8;
            table[c as usize] = value;
            table[c.to_ascii_lowercase() as usize] = value;
            j += 1;
        }
    }

    table
}

/// 字符转数值 (0-31)，无效字符返回 None
#[inline]
#[must_use]
pub fn char_to_value(c: u8) -> Option<u8> {
    match DECODE_TABLE[usize::from(c)] {
        NONE => None,
        v => Some(v),
    }
}

/// 校验位字符转数值 (0-36)，无效字符返回 None
#[inline]
#[must_use]
pub fn checksum_char_to_value(c: u8) -> Option<u8> {
    match CHECKSUM_DECODE_TABLE[usize::from(c)] {
        NONE => None,
        v => Some(v),
    }
}

/// 数值转字符 (0-31)
#[inline]
#[must_use]
pub fn value_to_char(v: u8) -> Option<u8> {
    ENCODE_SYMBOLS.get(usize::from(v)).copied()
}

/// 校验位数值转字符 (0-36)
#[inline]
#[must_use]
pub fn checksum_value_to_char(v: u8) -> Option<u8> {
    value_to_char(v).or_else(|| {
        usize::from(v)
            .checked_sub(ENCODE_SYMBOLS.len())
            .and_then(|i| CHECKSUM_SYMBOLS.get(i).copied())
    })
}

/// 验证字符是否可解码（含同义字符，不含校验位扩展字符）
#[inline]
#[must_use]
pub fn is_valid_char(c: u8) -> bool {
    char_to_value(c).is_some()
}
