//! 인증 코드 발급 및 검증 서비스
//!
//! 게이트의 판정 로직과 코드 발급을 한 곳에서 담당합니다.
//! HTTP에 대해서는 알지 않으며, 요청은 [`CodeRequest`]로만 읽습니다.
//!
//! ## 검증 순서
//!
//! ```text
//! 세션 없음 / 저장된 코드 없음 ──▶ MissingStoredCode
//! 제출 값 공백                  ──▶ EmptySubmittedCode   (코드 유지)
//! 만료                          ──▶ ExpiredCode          (코드 삭제)
//! 불일치                        ──▶ CodeMismatch         (코드 유지)
//! 일치                          ──▶ Ok                   (코드 삭제)
//! ```

use std::sync::Arc;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use crate::config::VerificationConfig;
use crate::core::errors::{AppError, AppResult, VerificationError};
use crate::core::registry::ServiceLocator;
use crate::domain::verification::{CodeKind, CodeRequest, VerificationCode};
use crate::repositories::verification_codes::{RedisVerificationCodeRepository, VerificationCodeRepository};
use crate::utils::string_utils::{is_blank, validate_required_string};
use super::code_generator::generate_numeric_code;
use super::code_sender::{CodeSender, LogCodeSender};

static VERIFICATION_CODE_SERVICE_INSTANCE: OnceCell<Arc<VerificationCodeService>> = OnceCell::new();

/// 인증 코드 서비스
///
/// # Examples
///
/// ```rust,ignore
/// let service = VerificationCodeService::new(
///     Arc::new(InMemoryVerificationCodeRepository::new()),
///     Arc::new(VerificationConfig::default()),
///     Arc::new(LogCodeSender),
/// );
///
/// let issued = service.issue("session-1", CodeKind::Image, None).await?;
/// let request = GateRequest::new("/authentication/form")
///     .with_session("session-1")
///     .with_parameter("imageCode", &issued.code);
///
/// service.validate(&request, CodeKind::Image).await?;
/// ```
pub struct VerificationCodeService {
    repository: Arc<dyn VerificationCodeRepository>,
    config: Arc<VerificationConfig>,
    sender: Arc<dyn CodeSender>,
}

impl VerificationCodeService {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// `ServiceLocator`의 [`VerificationConfig`]와 Redis 저장소, 로그 발송기로 구성됩니다.
    pub fn instance() -> Arc<Self> {
        VERIFICATION_CODE_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    RedisVerificationCodeRepository::instance(),
                    ServiceLocator::get::<VerificationConfig>(),
                    Arc::new(LogCodeSender),
                ))
            })
            .clone()
    }

    pub fn new(
        repository: Arc<dyn VerificationCodeRepository>,
        config: Arc<VerificationConfig>,
        sender: Arc<dyn CodeSender>,
    ) -> Self {
        Self {
            repository,
            config,
            sender,
        }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// 요청에 담긴 코드를 현재 시각 기준으로 검증합니다.
    ///
    /// 성공하면 저장된 코드는 소비되어 다시 사용할 수 없습니다.
    pub async fn validate<R>(&self, request: &R, kind: CodeKind) -> Result<(), VerificationError>
    where
        R: CodeRequest + Sync + ?Sized,
    {
        self.validate_at(request, kind, Utc::now()).await
    }

    /// 주어진 시각 기준으로 검증합니다.
    pub async fn validate_at<R>(
        &self,
        request: &R,
        kind: CodeKind,
        now: DateTime<Utc>,
    ) -> Result<(), VerificationError>
    where
        R: CodeRequest + Sync + ?Sized,
    {
        let Some(session_key) = request.session_key() else {
            return Err(VerificationError::MissingStoredCode(kind));
        };

        let stored = self
            .repository
            .get(session_key, kind)
            .await
            .map_err(store_failure)?
            .ok_or(VerificationError::MissingStoredCode(kind))?;

        let submitted = request.parameter(self.config.parameter_name(kind));
        if is_blank(submitted) {
            return Err(VerificationError::EmptySubmittedCode(kind));
        }
        let submitted = submitted.unwrap_or_default();

        if stored.is_expired_at(now) {
            self.repository
                .remove(session_key, kind)
                .await
                .map_err(store_failure)?;
            return Err(VerificationError::ExpiredCode(kind));
        }

        if !stored.matches(submitted) {
            return Err(VerificationError::CodeMismatch(kind));
        }

        // 다른 요청이 먼저 소비했다면 삭제에 실패함
        let consumed = self
            .repository
            .remove_if_matches(session_key, kind, &stored.code)
            .await
            .map_err(store_failure)?;

        if !consumed {
            return Err(VerificationError::MissingStoredCode(kind));
        }

        log::debug!("{} 인증 코드 검증 성공", kind);
        Ok(())
    }

    /// 새 코드를 발급해 저장하고 발송합니다.
    ///
    /// 같은 (세션, 종류)에 이전 코드가 있으면 교체됩니다.
    /// SMS 코드는 수신 번호(`recipient`)가 필요합니다.
    pub async fn issue(
        &self,
        session_key: &str,
        kind: CodeKind,
        recipient: Option<&str>,
    ) -> AppResult<VerificationCode> {
        let recipient = match kind {
            CodeKind::Sms => Some(validate_required_string(recipient.unwrap_or_default(), "mobile")?),
            CodeKind::Image => None,
        };

        let settings = self.config.settings(kind);
        let code = VerificationCode::new(
            generate_numeric_code(settings.length),
            settings.expire_in_seconds,
        );

        self.repository.save(session_key, kind, &code).await?;

        // 전달되지 않은 코드는 남겨 두지 않음
        if let Err(error) = self.sender.send(kind, recipient.as_deref(), &code.code).await {
            log::error!("{} 인증 코드 발송 실패: {}", kind, error);
            self.repository.remove(session_key, kind).await?;
            return Err(match error {
                AppError::ExternalServiceError(_) => error,
                other => AppError::ExternalServiceError(other.to_string()),
            });
        }

        log::info!("{} 인증 코드 발급 - 유효 시간: {}초", kind, settings.expire_in_seconds);
        Ok(code)
    }
}

fn store_failure(error: AppError) -> VerificationError {
    log::error!("인증 코드 저장소 오류: {}", error);
    VerificationError::from(error)
}

/// 서비스 레지스트리 생성자 함수
fn verification_code_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(VerificationCodeService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "verification_code_service",
        constructor: verification_code_service_constructor,
    }
}
