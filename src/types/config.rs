use thiserror::Error;

/// 設定関連のエラー型
/// 環境変数や設定値の検証など設定に関するエラーを定義
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// 環境変数が見つからない
    #[error("環境変数が見つかりません: {name}")]
    MissingEnvironmentVariable { name: String },

    /// 設定値が不正
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },
}

impl ConfigError {
    /// 環境変数不足エラーを作成
    pub fn missing_env_var<N: Into<String>>(name: N) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub const ENV_STORE_URL: &str = "ARTICLE_STORE_URL";
pub const ENV_STORE_KEY: &str = "ARTICLE_STORE_KEY";
pub const ENV_STORE_TABLE: &str = "ARTICLE_STORE_TABLE";
pub const ENV_STORE_TIMEOUT: &str = "ARTICLE_STORE_TIMEOUT_SECS";
pub const ENV_STORE_FILE: &str = "ARTICLE_STORE_FILE";
pub const ENV_LOG_LEVEL: &str = "BLOG_LOG_LEVEL";

pub const DEFAULT_TABLE: &str = "articles";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 記事の取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    /// ホスティングされたRESTテーブル
    Rest { base_url: String, api_key: String },
    /// ローカルのJSONファイル
    File { path: String },
}

/// 記事ストアの接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub source: StoreSource,
    pub table: String,
    /// 未設定の場合はタイムアウトなし（クライアント既定値に従う）
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// 環境変数から設定を読み込む
    /// .envファイルの読み込みは呼び出し側で行う
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の取得関数から設定を組み立てる
    ///
    /// `ARTICLE_STORE_FILE` が設定されていればファイルストアを優先する。
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let table = non_blank(ENV_STORE_TABLE).unwrap_or_else(|| DEFAULT_TABLE.to_string());

        let timeout_secs = match non_blank(ENV_STORE_TIMEOUT) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        let source = match non_blank(ENV_STORE_FILE) {
            Some(path) => StoreSource::File { path },
            None => {
                let base_url = non_blank(ENV_STORE_URL)
                    .ok_or_else(|| ConfigError::missing_env_var(ENV_STORE_URL))?;
                if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                    return Err(ConfigError::invalid_value(format!(
                        "{}はhttp(s)のURLである必要があります: {}",
                        ENV_STORE_URL, base_url
                    )));
                }
                let api_key = non_blank(ENV_STORE_KEY)
                    .ok_or_else(|| ConfigError::missing_env_var(ENV_STORE_KEY))?;
                StoreSource::Rest {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    api_key,
                }
            }
        };

        Ok(Self {
            source,
            table,
            timeout_secs,
        })
    }
}

fn parse_timeout(raw: &str) -> ConfigResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::invalid_value(format!(
            "{}は正の整数である必要があります: {}",
            ENV_STORE_TIMEOUT, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_rest_config_with_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_STORE_URL, "https://example.supabase.co/"),
            (ENV_STORE_KEY, "anon-key"),
        ]))
        .unwrap();

        assert_eq!(
            config.source,
            StoreSource::Rest {
                base_url: "https://example.supabase.co".to_string(),
                api_key: "anon-key".to_string(),
            }
        );
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_file_source_takes_precedence() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_STORE_FILE, "mock/articles.json"),
            (ENV_STORE_URL, "https://example.supabase.co"),
            (ENV_STORE_TABLE, "posts"),
        ]))
        .unwrap();

        assert_eq!(
            config.source,
            StoreSource::File {
                path: "mock/articles.json".to_string()
            }
        );
        assert_eq!(config.table, "posts");
    }

    #[test]
    fn test_missing_key_is_reported() {
        let result = StoreConfig::from_lookup(lookup_from(&[(
            ENV_STORE_URL,
            "https://example.supabase.co",
        )]));
        assert_eq!(result, Err(ConfigError::missing_env_var(ENV_STORE_KEY)));
    }

    #[test]
    fn test_missing_url_is_reported() {
        let result = StoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::missing_env_var(ENV_STORE_URL)));
    }

    #[test]
    fn test_invalid_timeout_and_url() {
        let zero = StoreConfig::from_lookup(lookup_from(&[
            (ENV_STORE_FILE, "a.json"),
            (ENV_STORE_TIMEOUT, "0"),
        ]));
        assert!(matches!(zero, Err(ConfigError::InvalidValue { .. })));

        let not_http = StoreConfig::from_lookup(lookup_from(&[
            (ENV_STORE_URL, "example.supabase.co"),
            (ENV_STORE_KEY, "k"),
        ]));
        assert!(matches!(not_http, Err(ConfigError::InvalidValue { .. })));

        let ok = StoreConfig::from_lookup(lookup_from(&[
            (ENV_STORE_FILE, "a.json"),
            (ENV_STORE_TIMEOUT, " 15 "),
        ]))
        .unwrap();
        assert_eq!(ok.timeout_secs, Some(15));
    }
}
