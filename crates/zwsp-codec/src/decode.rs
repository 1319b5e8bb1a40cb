//! ゼロ幅文字列 → バイト列
//!
//! ## 3 段パイプライン
//! ```text
//! 1. symbols → crumbs  : 長さ検査 + シンボル検査（唯一の検証点）
//! 2. crumbs  → nibbles : (high << 2) | low
//! 3. nibbles → bytes   : (high << 4) | low
//! ```
//!
//! 段 2・3 は段 1 を通過したデータだけを受け取るため失敗しない。

use alloc::vec::Vec;

use crate::alphabet::ALPHABET;
use crate::error::FormatError;
use crate::SYMBOLS_PER_BYTE;

/// ゼロ幅文字列をデコードして元のバイト列を返す
///
/// 長さ検査をシンボル検査より先に行うため、長さもシンボルも不正な入力は
/// 常に `FormatError::InvalidLength` になる。
/// 部分的なバイト列は返さない（全か無か）。
///
/// # エラー
/// - `FormatError::InvalidLength`: 文字数が 4 の倍数ではない
/// - `FormatError::InvalidSymbol`: アルファベット外の文字を含む（最初の 1 つを報告）
///
/// # 例
/// ```
/// use zwsp_codec::{decode, FormatError};
///
/// assert_eq!(decode("\u{200b}\u{200c}\u{200d}\u{2060}"), Ok(vec![0x1b]));
/// assert_eq!(decode("test"), Err(FormatError::InvalidSymbol { code_point: 0x74, position: 0 }));
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, FormatError> {
    let crumbs = decode_crumbs(encoded)?;
    let nibbles = nibbles_from_crumbs(&crumbs);
    Ok(bytes_from_nibbles(&nibbles))
}

/// 文字列が `decode` に成功する形式かどうか（バッファを確保しない）
pub fn is_encoded(encoded: &str) -> bool {
    let mut len = 0usize;
    for c in encoded.chars() {
        if !ALPHABET.contains(c) {
            return false;
        }
        len += 1;
    }
    len % SYMBOLS_PER_BYTE == 0
}

/// 段 1: 各シンボルを 2 ビット値（crumb）に変換する
fn decode_crumbs(encoded: &str) -> Result<Vec<u8>, FormatError> {
    let len = encoded.chars().count();
    if len % SYMBOLS_PER_BYTE != 0 {
        return Err(FormatError::InvalidLength { len });
    }

    let mut crumbs = Vec::with_capacity(len);
    for (position, c) in encoded.chars().enumerate() {
        let value = ALPHABET.value_of(c).ok_or(FormatError::InvalidSymbol {
            code_point: c as u32,
            position,
        })?;
        crumbs.push(value);
    }

    Ok(crumbs)
}

/// 段 2: crumb 2 つ → nibble 1 つ
fn nibbles_from_crumbs(crumbs: &[u8]) -> Vec<u8> {
    crumbs
        .chunks_exact(2)
        .map(|pair| (pair[0] << 2) | pair[1])
        .collect()
}

/// 段 3: nibble 2 つ → byte 1 つ
fn bytes_from_nibbles(nibbles: &[u8]) -> Vec<u8> {
    nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect()
}
