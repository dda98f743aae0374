//! 料件儲位模型

use serde::{Deserialize, Serialize};

/// 料件儲位記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    /// 物料ID
    pub item_id: String,

    /// 儲位
    pub location: Option<String>,

    /// 儲位代碼
    pub storage_code: Option<String>,

    /// 建議供應商
    pub preferred_vendor: Option<String>,
}

impl LocationRecord {
    /// 創建新的儲位記錄
    pub fn new(item_id: String) -> Self {
        Self {
            item_id,
            location: None,
            storage_code: None,
            preferred_vendor: None,
        }
    }

    /// 建構器模式：設置儲位
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// 建構器模式：設置儲位代碼
    pub fn with_storage_code(mut self, storage_code: String) -> Self {
        self.storage_code = Some(storage_code);
        self
    }

    /// 建構器模式：設置建議供應商
    pub fn with_preferred_vendor(mut self, preferred_vendor: String) -> Self {
        self.preferred_vendor = Some(preferred_vendor);
        self
    }
}
