//! # zwsp-codec
//!
//! ゼロ幅文字（不可視文字）による可逆バイナリエンコーディング
//!
//! 任意のバイト列を 4 種類のゼロ幅コードポイントだけで構成された文字列に変換し、
//! バイト単位で完全に復元する。空文字列に見えるテキストにペイロードを隠す用途。
//! `no_std` + `alloc` 環境（WASM を含む）で動作する。
//!
//! ## Wire Format
//!
//! ```text
//! アルファベット（値 = 配列上の位置）:
//!   0 = U+200B ZERO WIDTH SPACE
//!   1 = U+200C ZERO WIDTH NON-JOINER
//!   2 = U+200D ZERO WIDTH JOINER
//!   3 = U+2060 WORD JOINER
//!
//! 1 バイト → 4 シンボル（上位 2 ビットから順に）:
//!   byte = [b7 b6][b5 b4][b3 b2][b1 b0]
//!            ↓      ↓      ↓      ↓
//!          sym0   sym1   sym2   sym3
//! ```
//!
//! アルファベットの順序がそのまま wire format なので、変更すると
//! 既存のエンコード済みデータと互換性がなくなる。
//!
//! ## 例
//!
//! ```
//! let encoded = zwsp_codec::encode("test");
//! assert_eq!(encoded.chars().count(), 16);
//! assert_eq!(encoded, zwsp_codec::encode(b"test"));
//!
//! let decoded = zwsp_codec::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"test");
//! ```

#![no_std]
extern crate alloc;

mod alphabet;
mod decode;
mod encode;
mod error;

pub use alphabet::{
    Alphabet, ALPHABET, WORD_JOINER, ZERO_WIDTH_JOINER, ZERO_WIDTH_NON_JOINER, ZERO_WIDTH_SPACE,
};
#[cfg(feature = "serde")]
pub use alphabet::{AlphabetInfo, SymbolInfo};
pub use decode::{decode, is_encoded};
pub use encode::{encode, encode_into, encoded_len};
pub use error::FormatError;

/// 1 バイトあたりのシンボル数（2 ビット × 4 = 8 ビット）
pub const SYMBOLS_PER_BYTE: usize = 4;

/// 1 シンボルが運ぶビット数
pub const BITS_PER_SYMBOL: u32 = 2;
