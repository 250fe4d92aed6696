/// SD2 Engine - Singleton manager for engine subsystems
///
/// Holds the global logger and an optional shared `TextureManager`.
/// Cameras are NOT stored here; the game layer owns them.

use std::sync::{OnceLock, RwLock, Arc, Mutex, MutexGuard};
use std::time::SystemTime;
use glam::UVec2;
use crate::error::Result;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::texture::TextureManager;

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

struct EngineState {
    texture_manager: RwLock<Option<Arc<Mutex<TextureManager>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            texture_manager: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use sd2_engine::sd2::Engine;
/// use sd2_engine::glam::UVec2;
///
/// Engine::initialize()?;
/// Engine::create_texture_manager(UVec2::new(1280, 720))?;
///
/// let textures = Engine::texture_manager()?;
/// // ...
///
/// Engine::shutdown();
/// # Ok::<(), sd2_engine::sd2::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Initialize the engine
    ///
    /// Must be called once before creating any subsystem. Calling it again
    /// is harmless.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        crate::engine_debug!("sd2::Engine", "Engine initialized");
        Ok(())
    }

    /// Destroy all singletons. The logger is kept.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut tm) = state.texture_manager.write() {
                *tm = None;
            }
        }
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| crate::engine_err!("sd2::Engine", InitializationFailed,
                "Engine not initialized. Call Engine::initialize() first."))
    }

    // ===== TEXTURE MANAGER API =====

    /// Create and register the texture manager singleton
    ///
    /// # Errors
    ///
    /// - the engine is not initialized
    /// - a texture manager already exists
    pub fn create_texture_manager(backbuffer_size: UVec2) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.texture_manager.write()
            .map_err(|_| crate::engine_err!("sd2::Engine", BackendError,
                "TextureManager lock poisoned"))?;

        if lock.is_some() {
            crate::engine_bail!("sd2::Engine", InitializationFailed,
                "TextureManager already exists. Call Engine::destroy_texture_manager() first.");
        }

        *lock = Some(Arc::new(Mutex::new(TextureManager::new(backbuffer_size))));

        crate::engine_info!("sd2::Engine", "TextureManager created ({}x{} backbuffer)",
            backbuffer_size.x, backbuffer_size.y);

        Ok(())
    }

    /// Get the texture manager singleton
    ///
    /// # Errors
    ///
    /// - the engine is not initialized
    /// - the texture manager has not been created
    pub fn texture_manager() -> Result<Arc<Mutex<TextureManager>>> {
        let state = Self::state()?;

        let lock = state.texture_manager.read()
            .map_err(|_| crate::engine_err!("sd2::Engine", BackendError,
                "TextureManager lock poisoned"))?;

        lock.clone()
            .ok_or_else(|| crate::engine_err!("sd2::Engine", InitializationFailed,
                "TextureManager not created. Call Engine::create_texture_manager() first."))
    }

    /// Destroy the texture manager singleton
    ///
    /// Handles already obtained stay valid until dropped.
    pub fn destroy_texture_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.texture_manager.write()
            .map_err(|_| crate::engine_err!("sd2::Engine", BackendError,
                "TextureManager lock poisoned"))?;

        *lock = None;

        crate::engine_info!("sd2::Engine", "TextureManager destroyed");

        Ok(())
    }

    /// Lock a texture manager handle obtained from `texture_manager()`
    ///
    /// # Errors
    ///
    /// `BackendError` if a previous holder panicked while holding the lock
    pub fn lock_texture_manager(
        texture_manager: &Arc<Mutex<TextureManager>>,
    ) -> Result<MutexGuard<'_, TextureManager>> {
        texture_manager.lock()
            .map_err(|_| crate::engine_err!("sd2::Engine", BackendError,
                "TextureManager lock poisoned"))
    }

    // ===== LOGGING API =====

    /// Replace the logger (file logger, test capture, ...)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to `DefaultLogger`
    pub fn reset_logger() {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log without file:line. Used by `engine_info!`, `engine_warn!`, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line. Used by `engine_error!`, `engine_err!`, `engine_bail!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
