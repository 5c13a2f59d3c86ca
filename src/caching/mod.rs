//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 인증 코드 저장 공간을 제공합니다.
//!
//! # 주요 기능
//!
//! - 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 및 스크립트 기반 조건부 삭제
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("verification_code:image:ab12", &code, 360).await?;
//!
//! let stored: Option<VerificationCode> = cache.get("verification_code:image:ab12").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
