//! encodeZwsp / decodeZwsp wasm-bindgen エクスポート
//!
//! JS の値を Rust 側の入力（`EncodeSource`）に正規化し、`zwsp-codec` を呼び出す。
//! デコード失敗は `name = "ZwspDecodeError"` の JS `Error` として投げる。

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use zwsp_codec::{FormatError, ALPHABET};

extern crate alloc;

/// デコード失敗時に投げる JS `Error` の `name`
pub const DECODE_ERROR_NAME: &str = "ZwspDecodeError";

#[wasm_bindgen]
extern "C" {
    /// `encodeZwsp` の引数型（TypeScript 上は `Uint8Array | string`）
    ///
    /// Node.js の `Buffer` は `Uint8Array` のサブクラスなのでそのまま渡せる。
    #[wasm_bindgen(typescript_type = "Uint8Array | string")]
    pub type ZwspInput;
}

/// エンコード対象の正規化済み入力
///
/// 文字列は UTF-8 バイト列として扱うので、どちらの形でも同じ出力になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeSource<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl AsRef<[u8]> for EncodeSource<'_> {
    fn as_ref(&self) -> &[u8] {
        match self {
            EncodeSource::Text(text) => text.as_bytes(),
            EncodeSource::Bytes(bytes) => bytes,
        }
    }
}

impl EncodeSource<'_> {
    /// ゼロ幅文字列にエンコードする（失敗しない）
    pub fn encode(&self) -> String {
        zwsp_codec::encode(self)
    }
}

/// バイト列または文字列をゼロ幅文字列にエンコードする
///
/// # 引数
/// - `buffer`: `Uint8Array`（`Buffer` を含む）または `string`
///
/// # エラー
/// - `TypeError`: `Uint8Array` でも `string` でもない値
///
/// # 例（TypeScript）
/// ```typescript
/// encodeZwsp('test') === '\u200c\u2060\u200c\u200b\u200c\u200d\u200c\u200c\u200c\u2060\u200b\u2060\u200c\u2060\u200c\u200b'; // -> true
/// ```
#[wasm_bindgen(js_name = "encodeZwsp")]
pub fn encode_zwsp(buffer: &ZwspInput) -> Result<String, JsValue> {
    if let Some(text) = buffer.as_string() {
        return Ok(EncodeSource::Text(&text).encode());
    }

    if buffer.is_instance_of::<Uint8Array>() {
        let bytes = Uint8Array::new(buffer).to_vec();
        return Ok(EncodeSource::Bytes(&bytes).encode());
    }

    Err(js_sys::TypeError::new("encodeZwsp expects a Uint8Array or a string").into())
}

/// ゼロ幅文字列をデコードして元のバイト列を返す
///
/// 文字列表現が必要な場合は呼び出し側で `TextDecoder` 等を使う。
///
/// # エラー
/// - `ZwspDecodeError`: 文字数が 4 の倍数ではない、またはアルファベット外の文字を含む
#[wasm_bindgen(js_name = "decodeZwsp")]
pub fn decode_zwsp(encoded: &str) -> Result<Vec<u8>, JsValue> {
    zwsp_codec::decode(encoded).map_err(|e| {
        log_rejection(&e);
        decode_error(&e).into()
    })
}

/// 入力が `decodeZwsp` に成功する形式か（例外を投げずに確認する）
#[wasm_bindgen(js_name = "isZwsp")]
pub fn is_zwsp(encoded: &str) -> bool {
    zwsp_codec::is_encoded(encoded)
}

/// アルファベット（コードポイント・名前・値）を JSON 文字列で返す
///
/// # 戻り値
/// ```json
/// {
///   "symbols": [
///     { "value": 0, "codePoint": 8203, "name": "ZERO WIDTH SPACE" },
///     ...
///   ],
///   "bitsPerSymbol": 2,
///   "symbolsPerByte": 4
/// }
/// ```
#[wasm_bindgen(js_name = "alphabetInfo")]
pub fn alphabet_info() -> String {
    alphabet_info_json()
}

/// `alphabetInfo` の本体（native からも呼び出せる）
pub fn alphabet_info_json() -> String {
    serde_json::to_string(&ALPHABET.info()).expect("AlphabetInfo serialization should not fail")
}

/// `FormatError` → `ZwspDecodeError`
fn decode_error(err: &FormatError) -> js_sys::Error {
    let error = js_sys::Error::new(&err.to_string());
    error.set_name(DECODE_ERROR_NAME);
    error
}

/// デコード失敗を console.debug に出す
fn log_rejection(err: &FormatError) {
    #[cfg(all(feature = "console_log", target_arch = "wasm32"))]
    web_sys::console::debug_1(&JsValue::from_str(&alloc::format!("decodeZwsp: {}", err)));

    #[cfg(not(all(feature = "console_log", target_arch = "wasm32")))]
    let _ = err;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_bytes_sources_agree() {
        let text = EncodeSource::Text("test");
        let bytes = EncodeSource::Bytes(b"test");
        assert_eq!(text.encode(), bytes.encode());
        assert_eq!(text.as_ref(), bytes.as_ref());
    }

    #[test]
    fn test_empty_sources() {
        assert_eq!(EncodeSource::Text("").encode(), "");
        assert_eq!(EncodeSource::Bytes(&[]).encode(), "");
    }

    #[test]
    fn test_alphabet_info_json() {
        let json = alphabet_info_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let code_points: Vec<u64> = value["symbols"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["codePoint"].as_u64().unwrap())
            .collect();
        assert_eq!(code_points, [0x200b, 0x200c, 0x200d, 0x2060]);
        assert_eq!(value["symbols"][1]["name"], "ZERO WIDTH NON-JOINER");
        assert_eq!(value["bitsPerSymbol"], 2);
        assert_eq!(value["symbolsPerByte"], 4);
    }
}
