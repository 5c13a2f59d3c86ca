//! Redis 기반 인증 코드 저장소
//!
//! ## 키 구조
//!
//! ```text
//! verification_code:{kind}:{sha256(session)}  →  {"code": "7421", "expires_at": "..."}
//! ```
//!
//! 세션 식별자는 그대로 키에 노출하지 않고 SHA-256 해시로 바꿔 사용합니다.
//! TTL은 코드의 남은 유효 시간에 유예 시간을 더한 값이라
//! 게이트는 Redis가 키를 지우기 전에 만료를 먼저 관찰합니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};
use crate::caching::redis::RedisClient;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::verification::{CodeKind, VerificationCode};
use super::VerificationCodeRepository;

const KEY_PREFIX: &str = "verification_code";

/// 만료 후 Redis가 키를 지우기까지의 유예 시간 (초)
const EXPIRY_GRACE_SECONDS: u64 = 300;

static REDIS_VERIFICATION_CODE_REPOSITORY_INSTANCE: OnceCell<Arc<RedisVerificationCodeRepository>> = OnceCell::new();

pub struct RedisVerificationCodeRepository {
    redis: Arc<RedisClient>,
}

impl RedisVerificationCodeRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출 시 `ServiceLocator`에 등록된 [`RedisClient`]로 인스턴스를 생성합니다.
    pub fn instance() -> Arc<Self> {
        REDIS_VERIFICATION_CODE_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<RedisClient>())))
            .clone()
    }

    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    /// Redis 키를 생성합니다.
    fn key(session_key: &str, kind: CodeKind) -> String {
        let digest = Sha256::digest(session_key.as_bytes());
        let hashed: String = digest.iter().map(|byte| format!("{:02x}", byte)).collect();
        format!("{}:{}:{}", KEY_PREFIX, kind.as_str(), hashed)
    }

    fn ttl_seconds(code: &VerificationCode) -> u64 {
        code.remaining_seconds(Utc::now()) as u64 + EXPIRY_GRACE_SECONDS
    }
}

fn redis_error(error: redis::RedisError) -> AppError {
    AppError::RedisError(error.to_string())
}

#[async_trait]
impl VerificationCodeRepository for RedisVerificationCodeRepository {
    async fn save(&self, session_key: &str, kind: CodeKind, code: &VerificationCode) -> AppResult<()> {
        let key = Self::key(session_key, kind);
        let ttl = Self::ttl_seconds(code);

        self.redis
            .set_with_expiry(&key, code, ttl)
            .await
            .map_err(redis_error)?;

        log::debug!("{} 인증 코드 저장 - ttl: {}초", kind, ttl);
        Ok(())
    }

    async fn get(&self, session_key: &str, kind: CodeKind) -> AppResult<Option<VerificationCode>> {
        self.redis
            .get::<VerificationCode>(&Self::key(session_key, kind))
            .await
            .map_err(redis_error)
    }

    async fn remove(&self, session_key: &str, kind: CodeKind) -> AppResult<()> {
        self.redis
            .del(&Self::key(session_key, kind))
            .await
            .map_err(redis_error)
    }

    async fn remove_if_matches(&self, session_key: &str, kind: CodeKind, expected: &str) -> AppResult<bool> {
        self.redis
            .del_if_field_equals(&Self::key(session_key, kind), "code", expected)
            .await
            .map_err(redis_error)
    }
}

/// 서비스 레지스트리 생성자 함수
fn redis_verification_code_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(RedisVerificationCodeRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "redis_verification_code_repository",
        constructor: redis_verification_code_repository_constructor,
    }
}
