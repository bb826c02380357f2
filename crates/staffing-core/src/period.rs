//! 時段模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 規劃時段（某日期的某個小時）
///
/// 以 (date, hour) 作為唯一有序鍵，匯入後不再變更。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    /// 日期
    pub date: NaiveDate,

    /// 小時（0-23）
    pub hour: u8,
}

impl Period {
    /// 創建新的時段
    pub fn new(date: NaiveDate, hour: u8) -> Self {
        Self { date, hour }
    }

    /// 檢查小時是否在合法範圍內（0-23）
    pub fn has_valid_hour(&self) -> bool {
        self.hour <= 23
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:00", self.date, self.hour)
    }
}
