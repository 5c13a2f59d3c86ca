//! 프로세스 내부 메모리 기반 인증 코드 저장소
//!
//! 테스트와 단일 노드 개발 환경 전용입니다. 운영 환경에서는 Redis 저장소를 사용합니다.
//! 제출되지 않고 만료된 항목은 다음 `save` 때 정리됩니다.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use chrono::Utc;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::verification::{CodeKind, VerificationCode};
use super::VerificationCodeRepository;

type Entries = HashMap<(String, CodeKind), VerificationCode>;

#[derive(Default)]
pub struct InMemoryVerificationCodeRepository {
    entries: Mutex<Entries>,
}

impl InMemoryVerificationCodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 항목 수
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|_| AppError::InternalError("verification code store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VerificationCodeRepository for InMemoryVerificationCodeRepository {
    async fn save(&self, session_key: &str, kind: CodeKind, code: &VerificationCode) -> AppResult<()> {
        let mut entries = self.lock()?;
        let now = Utc::now();
        entries.retain(|_, stored| !stored.is_expired_at(now));
        entries.insert((session_key.to_string(), kind), code.clone());
        Ok(())
    }

    async fn get(&self, session_key: &str, kind: CodeKind) -> AppResult<Option<VerificationCode>> {
        Ok(self.lock()?.get(&(session_key.to_string(), kind)).cloned())
    }

    async fn remove(&self, session_key: &str, kind: CodeKind) -> AppResult<()> {
        self.lock()?.remove(&(session_key.to_string(), kind));
        Ok(())
    }

    async fn remove_if_matches(&self, session_key: &str, kind: CodeKind, expected: &str) -> AppResult<bool> {
        let mut entries = self.lock()?;
        let key = (session_key.to_string(), kind);

        match entries.get(&key) {
            Some(stored) if stored.code == expected => {
                entries.remove(&key);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[actix_web::test]
    async fn test_save_and_get_are_partitioned_by_session_and_kind() {
        let repo = InMemoryVerificationCodeRepository::new();
        let code = VerificationCode::new("7421", 60);

        repo.save("session-a", CodeKind::Image, &code).await.unwrap();

        assert_eq!(repo.get("session-a", CodeKind::Image).await.unwrap(), Some(code));
        assert_eq!(repo.get("session-a", CodeKind::Sms).await.unwrap(), None);
        assert_eq!(repo.get("session-b", CodeKind::Image).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_save_replaces_previous_code() {
        let repo = InMemoryVerificationCodeRepository::new();

        repo.save("s", CodeKind::Sms, &VerificationCode::new("111111", 60)).await.unwrap();
        repo.save("s", CodeKind::Sms, &VerificationCode::new("222222", 60)).await.unwrap();

        let stored = repo.get("s", CodeKind::Sms).await.unwrap().unwrap();
        assert_eq!(stored.code, "222222");
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_remove_is_idempotent() {
        let repo = InMemoryVerificationCodeRepository::new();
        repo.save("s", CodeKind::Image, &VerificationCode::new("7421", 60)).await.unwrap();

        repo.remove("s", CodeKind::Image).await.unwrap();
        repo.remove("s", CodeKind::Image).await.unwrap();

        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_remove_if_matches_consumes_once() {
        let repo = InMemoryVerificationCodeRepository::new();
        repo.save("s", CodeKind::Image, &VerificationCode::new("7421", 60)).await.unwrap();

        assert!(!repo.remove_if_matches("s", CodeKind::Image, "0000").await.unwrap());
        assert!(repo.remove_if_matches("s", CodeKind::Image, "7421").await.unwrap());
        assert!(!repo.remove_if_matches("s", CodeKind::Image, "7421").await.unwrap());
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_save_purges_expired_entries() {
        let repo = InMemoryVerificationCodeRepository::new();
        let stale = VerificationCode::expiring_at("7421", Utc::now() - Duration::seconds(1));
        repo.save("abandoned", CodeKind::Image, &stale).await.unwrap();

        repo.save("s", CodeKind::Image, &VerificationCode::new("1234", 60)).await.unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("abandoned", CodeKind::Image).await.unwrap(), None);
    }
}
