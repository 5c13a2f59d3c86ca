//! 인증 코드 발급 및 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// `GET /code/{kind}` 쿼리 파라미터
///
/// SMS 코드 발급에는 `mobile`이 필요합니다. 이미지 코드는 파라미터가 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct IssueCodeQuery {
    /// 코드를 받을 휴대폰 번호
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 8, max = 20, message = "휴대폰 번호는 8-20자 사이여야 합니다"))]
    pub mobile: Option<String>,
}

/// 폼 로그인 요청
///
/// 이미지 코드 필드(`imageCode`)는 게이트가 먼저 소비하므로 여기서는 다루지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FormSignInRequest {
    #[validate(length(min = 1, message = "사용자명은 필수입니다"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 휴대폰 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MobileSignInRequest {
    #[validate(length(min = 8, max = 20, message = "휴대폰 번호는 8-20자 사이여야 합니다"))]
    pub mobile: String,
}
