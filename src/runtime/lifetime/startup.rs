use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::catalog::{self, Catalog};
use crate::config::AppConfig;
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Everything a mode needs after startup
pub struct StartupContext {
    pub catalog: Catalog,
    /// 必须存活到进程结束，否则缓冲的日志会丢失
    _log_guard: Option<WorkerGuard>,
}

/// 启动预处理
///
/// 1. 加载配置（文件 + 环境变量）
/// 2. 安装 panic hook
/// 3. 初始化日志
/// 4. 加载链接目录（失败时为空目录）
///
/// `catalog_override` (the `--catalog` flag) wins over `catalog.path`.
pub fn prepare_startup(
    config_path: Option<&str>,
    catalog_override: Option<&str>,
    mode: RunMode,
) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();

    let config = match config_path {
        // 显式指定的配置文件必须能读取
        Some(path) => AppConfig::try_load(Some(path))
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => AppConfig::load(None),
    };

    install_panic_hook(mode);

    let log_guard =
        init_logging(&config.logging, mode).context("Failed to initialize logging")?;
    debug!("Configuration loaded: {:?}", config);

    let catalog_path = catalog_override.or(config.catalog.path.as_deref());
    let source = catalog::source_for(catalog_path);
    let catalog = catalog::load_catalog(source.as_ref());

    info!(
        "Startup finished in {:.2?} ({} categories)",
        start_time.elapsed(),
        catalog.len()
    );

    Ok(StartupContext {
        catalog,
        _log_guard: log_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_config_stops_startup() {
        let result = prepare_startup(
            Some("/definitely/not/here/searchdeck.toml"),
            None,
            RunMode::Cli,
        );
        let err = result.err().map(|e| format!("{:#}", e)).unwrap_or_default();
        assert!(err.contains("Failed to load configuration"), "{}", err);
    }
}
