// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use csv::{Terminator, WriterBuilder};
use thiserror::Error;

use crate::domain::models::contact::ContactRow;

/// 导出文件名
pub const CONTACTS_FILENAME: &str = "contacts.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finalize csv: {0}")]
    Buffer(String),
}

/// 将联系人序列化为 CSV
///
/// 总是写出表头 `name,phone,email,website`，即使没有任何行。
pub fn contacts_to_csv(rows: &[ContactRow]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(ContactRow::HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}
