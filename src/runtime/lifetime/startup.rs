use crate::errors::Result;
use crate::schema;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 校验模式目录，关系声明不一致时逐条记录
fn verify_schema_catalog() {
    match schema::check_consistency() {
        Ok(()) => debug!(
            "Schema catalog verified: {} resources",
            schema::resources().len()
        ),
        Err(violations) => {
            for violation in &violations {
                error!("Schema catalog violation: {}", violation);
            }
        }
    }

    match schema::reference_order() {
        Some(order) => debug!("Reference order: {}", order.join(" -> ")),
        None => warn!("Schema catalog contains a reference cycle"),
    }
}

/// 准备服务器启动的上下文
/// 包括模式目录校验、存储连接与迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    verify_schema_catalog();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}
