//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 프로세스 시작 시 한 번 연결하고, 생성된 핸들을 리포지토리에 주입합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use blogger_backend::config::DatabaseConfig;
//! use blogger_backend::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::name()).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에서 컬렉션을 얻기 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    /// 서버에 닿지 않으면 여기서 에러를 반환하므로, 부팅 단계에서 바로 실패합니다.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("blogger_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
