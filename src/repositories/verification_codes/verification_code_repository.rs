//! 인증 코드 저장소 인터페이스

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::verification::{CodeKind, VerificationCode};

/// (세션, 코드 종류) 단위로 발급된 코드를 보관하는 저장소
///
/// 두 세션은 서로의 코드에 접근하지 않습니다.
/// 같은 세션 안에서의 동시 소비는 [`remove_if_matches`](Self::remove_if_matches)의
/// 원자성으로 직렬화됩니다.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// 코드를 저장합니다. 같은 (세션, 종류)의 기존 코드는 교체됩니다.
    async fn save(&self, session_key: &str, kind: CodeKind, code: &VerificationCode) -> AppResult<()>;

    /// 저장된 코드를 조회합니다.
    async fn get(&self, session_key: &str, kind: CodeKind) -> AppResult<Option<VerificationCode>>;

    /// 저장된 코드를 삭제합니다. 없으면 아무 일도 하지 않습니다.
    async fn remove(&self, session_key: &str, kind: CodeKind) -> AppResult<()>;

    /// 저장된 코드 문자열이 `expected`와 정확히 같을 때만 삭제합니다.
    ///
    /// 조회와 삭제는 하나의 원자적 연산입니다.
    /// 동시에 호출된 여러 요청 중 `true`를 받는 것은 최대 하나입니다.
    async fn remove_if_matches(&self, session_key: &str, kind: CodeKind, expected: &str) -> AppResult<bool>;
}
