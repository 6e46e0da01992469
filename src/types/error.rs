use thiserror::Error;

/// 記事ストアへのクエリ失敗を表すエラー型
///
/// ローダーから見ると種類は「クエリ失敗」の一つだけで、
/// 各バリアントは原因（通信・認可・応答形式・ファイル）を記録するためにある。
#[derive(Error, Debug)]
pub enum StoreError {
    /// リクエスト送信または応答受信に失敗
    #[error("記事ストアへのリクエストに失敗: {table} - {source}")]
    Request {
        table: String,
        #[source]
        source: reqwest::Error,
    },

    /// ストアが成功以外のステータスを返した（認可エラーを含む）
    #[error("記事ストアがエラーを返しました: {table} - HTTP {status}: {body}")]
    Status {
        table: String,
        status: u16,
        body: String,
    },

    /// 応答が記事レコードの配列として解釈できない
    #[error("記事ストアの応答を解析できません: {context} - {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// ファイルストアの読み込みに失敗
    #[error("記事ファイルの読み込みに失敗: {path} - {source}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// テスト用ストアなどが返す任意のエラー
    #[error("記事ストアエラー: {message}")]
    Other { message: String },
}

impl StoreError {
    /// 通信エラーを作成
    pub fn request<T: Into<String>>(table: T, source: reqwest::Error) -> Self {
        Self::Request {
            table: table.into(),
            source,
        }
    }

    /// ステータスエラーを作成
    pub fn status<T: Into<String>, B: Into<String>>(table: T, status: u16, body: B) -> Self {
        Self::Status {
            table: table.into(),
            status,
            body: body.into(),
        }
    }

    /// 応答解析エラーを作成
    pub fn decode<C: Into<String>>(context: C, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// ファイル読み込みエラーを作成
    pub fn file_system<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// 任意メッセージのエラーを作成
    pub fn other<M: Into<String>>(message: M) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// 記事ストアのResult型エイリアス
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = StoreError::status("articles", 401, "JWT expired");
        let message = err.to_string();
        assert!(message.contains("articles"));
        assert!(message.contains("401"));
        assert!(message.contains("JWT expired"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = StoreError::decode("articles", source);
        assert!(std::error::Error::source(&err).is_some());
    }
}
