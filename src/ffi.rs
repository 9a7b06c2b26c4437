//! C FFI 导出
//!
//! 提供 C ABI 接口供 C/Swift/其他语言调用，数值类型固定为 `u64`

// FFI 模块需要 unsafe 代码
#![allow(unsafe_code)]

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::codec;
use crate::options::{DecodeOptions, EncodeOptions};

/// FFI 错误码
#[repr(i32)]
pub enum CrockfordError {
    Success = 0,
    NullPointer = -1,
    InvalidUtf8 = -2,
    MalformedInput = -3,
    BufferTooSmall = -4,
}

/// 将 `text` 连同结尾 0 写入 `out`，容量不足时不写入
unsafe fn write_c_str(text: &str, out: *mut c_char, out_cap: usize) -> i32 {
    if text.len() >= out_cap {
        return CrockfordError::BufferTooSmall as i32;
    }
    ptr::copy_nonoverlapping(text.as_ptr(), out.cast::<u8>(), text.len());
    *out.add(text.len()) = 0; // null terminator
    CrockfordError::Success as i32
}

/// 读取 C 字符串为 UTF-8 `&str`
unsafe fn read_c_str<'a>(input: *const c_char) -> Result<&'a str, i32> {
    CStr::from_ptr(input)
        .to_str()
        .map_err(|_| CrockfordError::InvalidUtf8 as i32)
}

/// 编码整数
///
/// `length` 为 0 表示不补零，`split` 为 0 表示不分组。
///
/// # Safety
/// - `out` 必须指向至少 `out_cap` 字节的缓冲区
#[no_mangle]
pub unsafe extern "C" fn crockford_encode(
    number: u64,
    length: usize,
    split: usize,
    checksum: bool,
    out: *mut c_char,
    out_cap: usize,
) -> i32 {
    if out.is_null() {
        return CrockfordError::NullPointer as i32;
    }
    // 输出至少 length 个字符，加结尾 0 必然放不下
    if length >= out_cap {
        return CrockfordError::BufferTooSmall as i32;
    }

    let mut opts = EncodeOptions::new()
        .with_split(split)
        .with_checksum(checksum);
    if length > 0 {
        opts = opts.with_length(length);
    }

    match codec::encode(number, &opts) {
        Ok(encoded) => write_c_str(&encoded, out, out_cap),
        Err(_) => CrockfordError::MalformedInput as i32,
    }
}

/// 解码字符串
///
/// # Safety
/// - `input` 必须是有效的 C 字符串
/// - `out` 必须是有效指针
#[no_mangle]
pub unsafe extern "C" fn crockford_decode(
    input: *const c_char,
    checksum: bool,
    out: *mut u64,
) -> i32 {
    if input.is_null() || out.is_null() {
        return CrockfordError::NullPointer as i32;
    }

    let input_str = match read_c_str(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let opts = DecodeOptions::new().with_checksum(checksum);
    match codec::decode::<u64>(input_str, &opts) {
        Some(value) => {
            *out = value;
            CrockfordError::Success as i32
        }
        None => CrockfordError::MalformedInput as i32,
    }
}

/// 规范化字符串，非法字符替换为 `?`
///
/// # Safety
/// - `input` 必须是有效的 C 字符串
/// - `out` 必须指向至少 `out_cap` 字节的缓冲区
#[no_mangle]
pub unsafe extern "C" fn crockford_normalize(
    input: *const c_char,
    checksum: bool,
    out: *mut c_char,
    out_cap: usize,
) -> i32 {
    if input.is_null() || out.is_null() {
        return CrockfordError::NullPointer as i32;
    }

    let input_str = match read_c_str(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let opts = DecodeOptions::new().with_checksum(checksum);
    write_c_str(&codec::normalize(input_str, &opts), out, out_cap)
}

/// 验证字符串是否可解码
///
/// # Safety
/// - `input` 必须是有效的 C 字符串
#[no_mangle]
pub unsafe extern "C" fn crockford_is_valid(input: *const c_char, checksum: bool) -> bool {
    if input.is_null() {
        return false;
    }

    match read_c_str(input) {
        Ok(s) => codec::is_valid(s, &DecodeOptions::new().with_checksum(checksum)),
        Err(_) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn buf_to_string(buf: &[c_char]) -> String {
        let bytes: Vec<u8> = buf.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let mut buf = [0 as c_char; 32];
        let code = unsafe { crockford_encode(1234, 5, 2, false, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, CrockfordError::Success as i32);
        assert_eq!(buf_to_string(&buf), "0-01-6J");

        let input = CString::new("0-01-6j").unwrap();
        let mut value = 0u64;
        let code = unsafe { crockford_decode(input.as_ptr(), false, &mut value) };
        assert_eq!(code, CrockfordError::Success as i32);
        assert_eq!(value, 1234);
    }

    #[test]
    fn test_checksum() {
        let mut buf = [0 as c_char; 32];
        let code = unsafe { crockford_encode(1234, 0, 0, true, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, CrockfordError::Success as i32);
        assert_eq!(buf_to_string(&buf), "16JD");

        let bad = CString::new("16JE").unwrap();
        let mut value = 0u64;
        let code = unsafe { crockford_decode(bad.as_ptr(), true, &mut value) };
        assert_eq!(code, CrockfordError::MalformedInput as i32);
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0 as c_char; 3];
        let code = unsafe { crockford_encode(1234, 0, 0, false, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, CrockfordError::BufferTooSmall as i32);
    }

    #[test]
    fn test_huge_length_does_not_allocate() {
        let mut buf = [0 as c_char; 32];
        let code =
            unsafe { crockford_encode(1, usize::MAX, 0, false, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, CrockfordError::BufferTooSmall as i32);

        let code = unsafe { crockford_encode(1, 32, 4, true, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, CrockfordError::BufferTooSmall as i32);
    }

    #[test]
    fn test_normalize_and_valid() {
        let input = CString::new("BU-123").unwrap();
        let mut buf = [0 as c_char; 16];
        let code = unsafe { crockford_normalize(input.as_ptr(), false, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, CrockfordError::Success as i32);
        assert_eq!(buf_to_string(&buf), "B?123");

        assert!(!unsafe { crockford_is_valid(input.as_ptr(), false) });
        let ok = CString::new("hello-world").unwrap();
        assert!(unsafe { crockford_is_valid(ok.as_ptr(), false) });
    }

    #[test]
    fn test_null_pointers() {
        let mut value = 0u64;
        let code = unsafe { crockford_decode(ptr::null(), false, &mut value) };
        assert_eq!(code, CrockfordError::NullPointer as i32);
        assert!(!unsafe { crockford_is_valid(ptr::null(), false) });
    }
}
