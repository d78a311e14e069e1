use serde::{Deserialize, Serialize};
use std::fmt;

/// 1日あたりの延滞料金
pub const LATE_FEE_PER_DAY: i64 = 2;

/// 延滞料金の通貨記号
pub const CURRENCY_SYMBOL: &str = "₹";

/// 書籍ID - カタログ内で一意のキー
///
/// 利用者が入力した文字列をそのまま保持する（正規化しない）。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 会員ID - 会員名簿内で一意のキー
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 延滞日数
///
/// 検証は行わない。0や負の値もそのまま受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateDays(i32);

impl LateDays {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 延滞料金（通貨単位の整数）
///
/// 負の延滞日数からは負の料金が計算される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFee(i64);

impl LateFee {
    /// 延滞日数から料金を計算する（日数 × 2）
    pub fn for_late_days(days: LateDays) -> Self {
        Self(i64::from(days.value()) * LATE_FEE_PER_DAY)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LateFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_keeps_raw_input() {
        let id = BookId::new(" B1 ");
        assert_eq!(id.to_string(), " B1 ");
    }

    #[test]
    fn test_member_id_equality() {
        assert_eq!(MemberId::new("M1"), MemberId::new("M1"));
        assert_ne!(MemberId::new("M1"), MemberId::new("m1"));
    }

    // TDD: LateFee のテスト
    #[test]
    fn test_late_fee_is_two_per_day() {
        assert_eq!(LateFee::for_late_days(LateDays::new(5)).value(), 10);
        assert_eq!(LateFee::for_late_days(LateDays::new(3)).value(), 6);
    }

    #[test]
    fn test_late_fee_zero_days() {
        assert_eq!(LateFee::for_late_days(LateDays::new(0)).value(), 0);
    }

    #[test]
    fn test_late_fee_negative_days_is_not_rejected() {
        assert_eq!(LateFee::for_late_days(LateDays::new(-4)).value(), -8);
    }

    #[test]
    fn test_late_fee_does_not_overflow_at_extremes() {
        let fee = LateFee::for_late_days(LateDays::new(i32::MAX));
        assert_eq!(fee.value(), i64::from(i32::MAX) * 2);
    }

    #[test]
    fn test_late_fee_display_has_currency() {
        assert_eq!(LateFee::for_late_days(LateDays::new(3)).to_string(), "₹6");
    }
}
