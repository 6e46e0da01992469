use crate::types::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;

/// ファイルパスからBufReaderを作成する
pub fn load_file(file_path: &str) -> StoreResult<BufReader<File>> {
    let file = File::open(file_path).map_err(|e| StoreError::file_system(file_path, e))?;
    Ok(BufReader::new(file))
}

/// JSONファイルをSerdeでDeserializeできる型として読み込む
pub fn load_json_from_file<T: DeserializeOwned>(file_path: &str) -> StoreResult<T> {
    let buf_reader = load_file(file_path)?;
    serde_json::from_reader(buf_reader).map_err(|e| StoreError::decode(file_path, e))
}
