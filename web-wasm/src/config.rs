//! 埋め込み設定の読み込み

use medcert_common::EditorConfig;

const EMBEDDED_CONFIG: &str = include_str!("../certificate.config.json");

/// 埋め込みJSONから設定を読む。壊れていればデフォルトを使う
pub fn load() -> EditorConfig {
    match EditorConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("設定の読み込みに失敗、デフォルトを使用: {}", e);
            EditorConfig::default()
        }
    }
}
