//! 발급된 코드를 사용자에게 전달하는 채널
//!
//! 실제 SMS 게이트웨이나 캡차 이미지 렌더러는 [`CodeSender`]를 구현해
//! `VerificationCodeService::new`에 주입합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::verification::CodeKind;

#[async_trait]
pub trait CodeSender: Send + Sync {
    /// 코드를 전달합니다.
    ///
    /// `recipient`는 SMS의 경우 휴대폰 번호이고, 이미지 코드에는 없습니다.
    async fn send(&self, kind: CodeKind, recipient: Option<&str>, code: &str) -> AppResult<()>;
}

/// 코드를 로그로만 출력하는 개발용 발송기
pub struct LogCodeSender;

#[async_trait]
impl CodeSender for LogCodeSender {
    async fn send(&self, kind: CodeKind, recipient: Option<&str>, code: &str) -> AppResult<()> {
        match recipient {
            Some(recipient) => log::info!("📨 {} 인증 코드 발송 → {}: {}", kind, recipient, code),
            None => log::info!("🖼️ {} 인증 코드 생성: {}", kind, code),
        }
        Ok(())
    }
}
