//! 인증 코드 종류

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// 인증 코드 종류
///
/// 보호된 엔드포인트마다 하나의 종류가 지정되며,
/// 종류에 따라 제출 파라미터 이름과 발급 형식이 달라집니다.
///
/// | 종류 | 기본 파라미터 | 용도 |
/// |------|---------------|------|
/// | `Image` | `imageCode` | 폼 로그인 (캡차 이미지) |
/// | `Sms` | `smsCode` | 휴대폰 로그인 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// 이미지(캡차) 인증 코드
    Image,
    /// SMS 인증 코드
    Sms,
}

impl CodeKind {
    /// 모든 코드 종류
    pub const ALL: [CodeKind; 2] = [CodeKind::Image, CodeKind::Sms];

    /// URL 경로와 저장소 키에 쓰이는 소문자 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Image => "image",
            CodeKind::Sms => "sms",
        }
    }

    /// 설정으로 덮어쓰지 않았을 때의 제출 파라미터 이름
    pub fn default_parameter_name(&self) -> &'static str {
        match self {
            CodeKind::Image => "imageCode",
            CodeKind::Sms => "smsCode",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Image => write!(f, "Image"),
            CodeKind::Sms => write!(f, "SMS"),
        }
    }
}

impl FromStr for CodeKind {
    type Err = String;

    /// 대소문자를 구분하지 않고 `image` / `sms`를 파싱합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" => Ok(CodeKind::Image),
            "sms" => Ok(CodeKind::Sms),
            _ => Err(format!("Unsupported verification code kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_kind_from_string() {
        assert_eq!("image".parse::<CodeKind>().unwrap(), CodeKind::Image);
        assert_eq!("SMS".parse::<CodeKind>().unwrap(), CodeKind::Sms);
        assert!("email".parse::<CodeKind>().is_err());
    }

    #[test]
    fn test_code_kind_as_str_roundtrip() {
        for kind in CodeKind::ALL {
            assert_eq!(kind.as_str().parse::<CodeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_default_parameter_names() {
        assert_eq!(CodeKind::Image.default_parameter_name(), "imageCode");
        assert_eq!(CodeKind::Sms.default_parameter_name(), "smsCode");
    }

    #[test]
    fn test_code_kind_serialization() {
        let json = serde_json::to_string(&CodeKind::Sms).unwrap();
        assert_eq!(json, "\"sms\"");
    }
}
