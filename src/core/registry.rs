//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 게이트 서비스의 싱글톤 컴포넌트를 관리합니다.
//! Spring Framework의 ApplicationContext와 유사하게,
//! 인프라 컴포넌트(`RedisClient`, `VerificationConfig`)는 시작 시점에 직접 등록하고
//! 리포지토리/서비스는 `inventory`로 수집된 생성자를 통해 한 번에 초기화합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ inventory::submit! → RepositoryRegistration / ServiceRegistration 수집
//!
//! 2. 런타임 초기화
//!    ├─ ServiceLocator::set() → 인프라 컴포넌트 등록
//!    └─ ServiceLocator::initialize_all() → 리포지토리 → 서비스 순으로 생성
//!
//! 3. 사용
//!    └─ VerificationCodeService::instance() → 캐시된 Arc 반환
//! ```
//!
//! ## 예제
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(RedisClient::new().await?));
//! ServiceLocator::set(Arc::new(VerificationConfig::from_env()));
//! ServiceLocator::initialize_all().await?;
//!
//! let service = VerificationCodeService::instance();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;

/// 서비스 등록 정보
///
/// `inventory::submit!`으로 제출되어 컴파일 타임에 수집됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (로그 출력용)
    pub name: &'static str,
    /// 싱글톤 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// ServiceRegistration과 동일한 구조지만, 서비스보다 먼저 초기화됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (로그 출력용)
    pub name: &'static str,
    /// 싱글톤 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 싱글톤 의존성 주입 컨테이너
///
/// `TypeId`를 키로 타입당 하나의 `Arc` 인스턴스를 보관합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 해당 타입이 `set()`으로 등록되지 않았으면 패닉합니다.
    /// 인프라 컴포넌트 누락은 시작 시점의 설정 오류이므로 조기에 실패합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Register it with ServiceLocator::set() before use",
                std::any::type_name::<T>()
            )
        })
    }

    /// 등록된 인스턴스를 가져오되, 없으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", type_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 수집된 모든 리포지토리와 서비스를 생성합니다.
    ///
    /// 리포지토리를 먼저 만들고 서비스를 나중에 만들어
    /// 서비스 생성자가 리포지토리 싱글톤을 참조할 수 있게 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("🔄 Initializing service registry");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            log::info!("  ✓ repository {}", registration.name);
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            log::info!("  ✓ service {}", registration.name);
            service_count += 1;
        }

        log::info!(
            "✅ Registry ready: {} repositories, {} services",
            repo_count,
            service_count
        );
        Ok(())
    }

    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MarkerConfig {
        value: u32,
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        ServiceLocator::set(Arc::new(MarkerConfig { value: 7 }));

        let config = ServiceLocator::get::<MarkerConfig>();
        assert_eq!(config.value, 7);
    }

    #[test]
    fn test_try_get_unregistered_type() {
        struct NeverRegistered;

        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("verification_gate::caching::redis::RedisClient"),
            "RedisClient"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Plain"), "Plain");
    }
}
