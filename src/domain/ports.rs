use crate::domain::model::{ConversionJob, MethodOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 一種 SVG -> PNG 的轉換方式
///
/// 預期內的失敗 (找不到程式、非零退出碼、逾時) 以 `MethodOutcome::Failed` 回傳；
/// 其他錯誤以 `Err` 回傳，會中止整批轉換。
#[async_trait]
pub trait ConversionMethod: Send + Sync {
    /// 在轉換鏈中的角色，例如 "image_tool"
    fn name(&self) -> &str;

    /// 實際呼叫的外部程式；預設與 name 相同
    fn program(&self) -> &str {
        self.name()
    }

    async fn attempt(&self, job: &ConversionJob) -> Result<MethodOutcome>;
}
