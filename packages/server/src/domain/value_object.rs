//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a room name in characters
pub const ROOM_NAME_MAX_LENGTH: usize = 255;

/// Server-generated room identifier.
///
/// Assigned exactly once by the persistence gateway when a room is first
/// stored, and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(i64);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::RoomIdNotPositive` for zero or negative values,
    /// which the store never assigns.
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        if value <= 0 {
            return Err(ValueObjectError::RoomIdNotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room name value object.
///
/// Any string up to 255 characters, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomName(String);

impl RoomName {
    /// Create a new RoomName.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::RoomNameTooLong` above 255 characters.
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let len = name.chars().count();
        if len > ROOM_NAME_MAX_LENGTH {
            return Err(ValueObjectError::RoomNameTooLong {
                max: ROOM_NAME_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: 正の値から RoomId を作成できる
        // when (操作):
        let result = RoomId::new(42);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), 42);
    }

    #[test]
    fn test_room_id_accepts_max_value() {
        // テスト項目: i64 の最大値も RoomId として扱える
        // when (操作):
        let result = RoomId::new(i64::MAX);

        // then (期待する結果):
        assert_eq!(result.unwrap().value(), i64::MAX);
    }

    #[test]
    fn test_room_id_zero_or_negative_fails() {
        // テスト項目: 0 以下の RoomId は作成できない
        // then (期待する結果):
        assert_eq!(RoomId::new(0), Err(ValueObjectError::RoomIdNotPositive(0)));
        assert_eq!(
            RoomId::try_from(-7),
            Err(ValueObjectError::RoomIdNotPositive(-7))
        );
    }

    #[test]
    fn test_room_name_new_success() {
        // テスト項目: 有効なルーム名を作成できる
        // given (前提条件):
        let name = "AAAAA".to_string();

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "AAAAA");
    }

    #[test]
    fn test_room_name_empty_is_allowed() {
        // テスト項目: 空文字のルーム名は null ではないので許可される
        // when (操作):
        let result = RoomName::new(String::new());

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_room_name_too_long_fails() {
        // テスト項目: 256 文字以上のルーム名は作成できない
        // given (前提条件):
        let name = "a".repeat(256);

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomNameTooLong {
                max: 255,
                actual: 256
            }
        );
    }

    #[test]
    fn test_room_name_length_counts_characters() {
        // テスト項目: 長さはバイト数ではなく文字数で数える
        // given (前提条件):
        let name = "会".repeat(255);

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
