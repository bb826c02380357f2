//! 規劃配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanningError, Result};

/// 求解模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverMode {
    /// 先嘗試整數求解，失敗時退回鬆弛路徑
    Integer,

    /// 只走線性鬆弛加保守進位
    LinearFallbackOnly,
}

/// 人力上限
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffingCap {
    /// 全域上限（套用到每個時段）
    Global(u32),

    /// 每時段上限（長度須與規劃範圍一致）
    PerPeriod(Vec<u32>),
}

impl StaffingCap {
    /// 取得第 index 個時段的上限
    pub fn for_index(&self, index: usize) -> Option<u32> {
        match self {
            StaffingCap::Global(cap) => Some(*cap),
            StaffingCap::PerPeriod(caps) => caps.get(index).copied(),
        }
    }
}

/// 排班規劃參數配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// 人均服務率（每人每時段可服務的需求單位，必須為正）
    pub productivity_rate: Decimal,

    /// 服務緩衝比例（>= 0，預設 0）
    pub buffer_fraction: Decimal,

    /// 人力上限（可選）
    pub staffing_cap: Option<StaffingCap>,

    /// 超編罰則（每超額人時的額外成本，>= 0，預設 0）
    pub overstaff_penalty: Decimal,

    /// 求解模式
    pub solver_mode: SolverMode,
}

impl PlanningConfig {
    /// 創建新的規劃配置
    pub fn new(productivity_rate: Decimal) -> Self {
        Self {
            productivity_rate,
            buffer_fraction: Decimal::ZERO,
            staffing_cap: None,
            overstaff_penalty: Decimal::ZERO,
            solver_mode: SolverMode::Integer,
        }
    }

    /// 建構器模式：設置服務緩衝比例
    pub fn with_buffer_fraction(mut self, buffer_fraction: Decimal) -> Self {
        self.buffer_fraction = buffer_fraction;
        self
    }

    /// 建構器模式：設置全域人力上限
    pub fn with_global_cap(mut self, cap: u32) -> Self {
        self.staffing_cap = Some(StaffingCap::Global(cap));
        self
    }

    /// 建構器模式：設置每時段人力上限
    pub fn with_period_caps(mut self, caps: Vec<u32>) -> Self {
        self.staffing_cap = Some(StaffingCap::PerPeriod(caps));
        self
    }

    /// 建構器模式：設置超編罰則
    pub fn with_overstaff_penalty(mut self, penalty: Decimal) -> Self {
        self.overstaff_penalty = penalty;
        self
    }

    /// 建構器模式：設置求解模式
    pub fn with_solver_mode(mut self, mode: SolverMode) -> Self {
        self.solver_mode = mode;
        self
    }

    /// 驗證配置
    ///
    /// `horizon_len` 用於核對每時段上限的長度。
    /// 配置錯誤立即回報，不進入任何計算。
    pub fn validate(&self, horizon_len: usize) -> Result<()> {
        if self.productivity_rate <= Decimal::ZERO {
            return Err(PlanningError::Configuration(format!(
                "人均服務率必須為正值: {}",
                self.productivity_rate
            )));
        }

        if self.buffer_fraction < Decimal::ZERO {
            return Err(PlanningError::Configuration(format!(
                "服務緩衝比例不可為負值: {}",
                self.buffer_fraction
            )));
        }

        if self.overstaff_penalty < Decimal::ZERO {
            return Err(PlanningError::Configuration(format!(
                "超編罰則不可為負值: {}",
                self.overstaff_penalty
            )));
        }

        if let Some(StaffingCap::PerPeriod(caps)) = &self.staffing_cap {
            if caps.len() != horizon_len {
                return Err(PlanningError::Configuration(format!(
                    "每時段上限數量 {} 與時段數 {} 不符",
                    caps.len(),
                    horizon_len
                )));
            }
        }

        Ok(())
    }
}
