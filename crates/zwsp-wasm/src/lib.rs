//! # zwsp-wasm
//!
//! wasm-bindgen エクスポート：Node.js / ブラウザから呼び出す公開 API。
//!
//! ## 使用方法（TypeScript）
//!
//! ```typescript
//! import { encodeZwsp, decodeZwsp, initPanicHook } from './zwsp-wasm-pkg/zwsp_wasm';
//!
//! // パニック時のスタックトレースを有効化（開発時）
//! initPanicHook();
//!
//! // Buffer / Uint8Array でも string でも同じ結果
//! const hidden = encodeZwsp('test');
//! hidden === encodeZwsp(Buffer.from('test')); // -> true
//!
//! // 元のバイト列に戻す（文字列が必要なら呼び出し側で UTF-8 デコード）
//! const bytes = decodeZwsp(hidden);
//! new TextDecoder().decode(bytes); // -> "test"
//!
//! try {
//!     decodeZwsp('test');
//! } catch (e) {
//!     e.name; // -> "ZwspDecodeError"
//! }
//! ```

use wasm_bindgen::prelude::*;

pub mod codec;

pub use codec::{alphabet_info_json, EncodeSource, ZwspInput, DECODE_ERROR_NAME};

/// パニック時にブラウザコンソールにスタックトレースを出力する
///
/// 開発時に呼び出すこと。本番ビルドでは feature flag で無効化可能。
#[wasm_bindgen(js_name = "initPanicHook")]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
