//! バイト列 → ゼロ幅文字列
//!
//! ```text
//! byte 0x74 = 0b01_11_01_00
//!   (>> 6) & 0x3 = 1 → U+200C
//!   (>> 4) & 0x3 = 3 → U+2060
//!   (>> 2) & 0x3 = 1 → U+200C
//!   (>> 0) & 0x3 = 0 → U+200B
//! ```

use alloc::string::String;

use crate::alphabet::ALPHABET;
use crate::SYMBOLS_PER_BYTE;

/// 各シンボルの UTF-8 バイト長（U+200B..U+2060 はすべて 3 バイト）
const SYMBOL_UTF8_LEN: usize = 3;

/// バイト列または文字列をゼロ幅文字列にエンコードする
///
/// `&str` / `String` は UTF-8 バイト列として扱うので、
/// `encode("test") == encode(b"test")` が常に成り立つ。
/// 失敗しない（全域関数）。
///
/// # 例
/// ```
/// let encoded = zwsp_codec::encode(&[0xffu8]);
/// assert_eq!(encoded, "\u{2060}\u{2060}\u{2060}\u{2060}");
/// assert_eq!(zwsp_codec::encode(""), "");
/// ```
pub fn encode<T>(input: &T) -> String
where
    T: AsRef<[u8]> + ?Sized,
{
    let mut encoded = String::new();
    encode_into(input.as_ref(), &mut encoded);
    encoded
}

/// 既存の `String` の末尾にエンコード結果を追記する
pub fn encode_into(bytes: &[u8], out: &mut String) {
    out.reserve(utf8_len(bytes.len()));
    for &byte in bytes {
        out.push(ALPHABET.symbol(byte >> 6));
        out.push(ALPHABET.symbol(byte >> 4));
        out.push(ALPHABET.symbol(byte >> 2));
        out.push(ALPHABET.symbol(byte));
    }
}

/// `byte_len` バイトをエンコードしたときの UTF-8 バイト長
fn utf8_len(byte_len: usize) -> usize {
    encoded_len(byte_len).saturating_mul(SYMBOL_UTF8_LEN)
}

/// `byte_len` バイトをエンコードしたときの文字数（シンボル数）
pub const fn encoded_len(byte_len: usize) -> usize {
    byte_len.saturating_mul(SYMBOLS_PER_BYTE)
}
