//! ゼロ幅文字アルファベット
//!
//! ## 値とコードポイントの対応（固定）
//! ```text
//! value | code point | name
//! ------+------------+---------------------------
//!   0   |  U+200B    | ZERO WIDTH SPACE
//!   1   |  U+200C    | ZERO WIDTH NON-JOINER
//!   2   |  U+200D    | ZERO WIDTH JOINER
//!   3   |  U+2060    | WORD JOINER
//! ```
//!
//! 双方向の参照（値 → シンボル は配列、シンボル → 値 は `match`）は
//! どちらもコンパイル時定数なので、初期化も同期も不要。

/// U+200B ZERO WIDTH SPACE（値 0）
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';
/// U+200C ZERO WIDTH NON-JOINER（値 1）
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200c}';
/// U+200D ZERO WIDTH JOINER（値 2）
pub const ZERO_WIDTH_JOINER: char = '\u{200d}';
/// U+2060 WORD JOINER（値 3）
pub const WORD_JOINER: char = '\u{2060}';

/// プロセス全体で共有する唯一のアルファベット
pub const ALPHABET: Alphabet = Alphabet::new();

/// 4 シンボルの固定アルファベット
///
/// 各シンボルは配列上の位置（0〜3）を値として持つ。
/// この順序が wire format そのもの。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; 4],
}

impl Alphabet {
    const fn new() -> Self {
        Alphabet {
            symbols: [
                ZERO_WIDTH_SPACE,
                ZERO_WIDTH_NON_JOINER,
                ZERO_WIDTH_JOINER,
                WORD_JOINER,
            ],
        }
    }

    /// 2 ビット値（crumb）に対応するシンボルを返す
    ///
    /// 上位ビットは無視される（`value & 0x3`）。
    #[inline]
    pub const fn symbol(&self, value: u8) -> char {
        self.symbols[(value & 0x3) as usize]
    }

    /// シンボルに対応する 2 ビット値を返す（アルファベット外なら `None`）
    #[inline]
    pub const fn value_of(&self, symbol: char) -> Option<u8> {
        match symbol {
            ZERO_WIDTH_SPACE => Some(0),
            ZERO_WIDTH_NON_JOINER => Some(1),
            ZERO_WIDTH_JOINER => Some(2),
            WORD_JOINER => Some(3),
            _ => None,
        }
    }

    pub const fn contains(&self, symbol: char) -> bool {
        self.value_of(symbol).is_some()
    }

    /// 値の順に並んだ 4 シンボル
    pub const fn symbols(&self) -> &[char; 4] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        ALPHABET
    }
}

/// 1 シンボルの公開情報（JSON 出力用）
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub value: u8,
    pub code_point: u32,
    pub name: &'static str,
}

/// アルファベット全体の公開情報
///
/// 他の実装と互換性を取るにはこの順序・値をそのまま使う必要がある。
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetInfo {
    pub symbols: [SymbolInfo; 4],
    pub bits_per_symbol: u32,
    pub symbols_per_byte: usize,
}

#[cfg(feature = "serde")]
impl Alphabet {
    /// アルファベットの説明を構築する
    pub fn info(&self) -> AlphabetInfo {
        const NAMES: [&str; 4] = [
            "ZERO WIDTH SPACE",
            "ZERO WIDTH NON-JOINER",
            "ZERO WIDTH JOINER",
            "WORD JOINER",
        ];
        let entry = |value: u8| SymbolInfo {
            value,
            code_point: self.symbol(value) as u32,
            name: NAMES[value as usize],
        };
        AlphabetInfo {
            symbols: [entry(0), entry(1), entry(2), entry(3)],
            bits_per_symbol: crate::BITS_PER_SYMBOL,
            symbols_per_byte: crate::SYMBOLS_PER_BYTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        assert_eq!(
            ALPHABET.symbols(),
            &['\u{200b}', '\u{200c}', '\u{200d}', '\u{2060}']
        );
    }

    #[test]
    fn test_value_symbol_bijection() {
        for value in 0u8..4 {
            let symbol = ALPHABET.symbol(value);
            assert_eq!(ALPHABET.value_of(symbol), Some(value));
        }
    }

    #[test]
    fn test_symbol_masks_high_bits() {
        assert_eq!(ALPHABET.symbol(0b1111_0110), ZERO_WIDTH_JOINER);
    }

    #[test]
    fn test_value_of_rejects_other_characters() {
        for c in ['t', ' ', '\u{feff}', '\u{200e}', '\u{2061}', '\0', '😀'] {
            assert_eq!(ALPHABET.value_of(c), None, "{:?} はアルファベット外", c);
            assert!(!ALPHABET.contains(c));
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let s = ALPHABET.symbols();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(s[i], s[j]);
            }
        }
    }

    #[test]
    fn test_default_is_the_shared_alphabet() {
        assert_eq!(Alphabet::default(), ALPHABET);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_info_lists_code_points_in_order() {
        let info = ALPHABET.info();
        let code_points: [u32; 4] = core::array::from_fn(|i| info.symbols[i].code_point);
        assert_eq!(code_points, [0x200b, 0x200c, 0x200d, 0x2060]);
        assert_eq!(info.symbols[3].name, "WORD JOINER");
        assert_eq!(info.symbols_per_byte, 4);
    }
}
