//! デコードエラー型

/// ゼロ幅文字列のフォーマットエラー
///
/// デコード対象がこのコーデックの `encode` 出力ではない（または破損・切り詰められた）
/// ことを示す。入力を変えない限りリトライしても結果は変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 文字数が 4 の倍数ではない（シンボル検査より先に判定する）
    InvalidLength {
        /// 入力の文字数（Unicode スカラー値の個数）
        len: usize,
    },
    /// アルファベット外の文字を検出
    InvalidSymbol {
        /// 検出した文字のコードポイント
        code_point: u32,
        /// 入力中の位置（文字単位、0 始まり）
        position: usize,
    },
}

impl FormatError {
    /// 長さ違反かどうか
    pub fn is_length_violation(&self) -> bool {
        matches!(self, FormatError::InvalidLength { .. })
    }

    /// 不正シンボルかどうか
    pub fn is_invalid_symbol(&self) -> bool {
        matches!(self, FormatError::InvalidSymbol { .. })
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::InvalidLength { len } => write!(
                f,
                "Unexpected odd length of string (must be divisible by 4, got {})",
                len
            ),
            FormatError::InvalidSymbol { code_point, position } => {
                write!(f, "Invalid ZWSP value 0x{:x} at position {}!", code_point, position)
            }
        }
    }
}

impl core::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_invalid_length() {
        let err = FormatError::InvalidLength { len: 2 };
        assert_eq!(
            err.to_string(),
            "Unexpected odd length of string (must be divisible by 4, got 2)"
        );
        assert!(err.is_length_violation());
        assert!(!err.is_invalid_symbol());
    }

    #[test]
    fn test_display_invalid_symbol_hex() {
        let err = FormatError::InvalidSymbol { code_point: 0x74, position: 0 };
        assert_eq!(err.to_string(), "Invalid ZWSP value 0x74 at position 0!");
        assert!(err.is_invalid_symbol());
    }
}
