use crate::domain::{Member, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員名簿ポート
///
/// 会員IDをキーとする会員の保存先を抽象化する。
#[async_trait]
pub trait Directory: Send + Sync {
    /// 会員を保存する
    ///
    /// 同じIDの会員が既にあれば上書きする（後勝ち）。
    async fn add(&self, member: Member) -> Result<()>;

    /// IDで会員を取得する
    async fn get(&self, member_id: &MemberId) -> Result<Option<Member>>;
}
