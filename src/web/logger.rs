use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Default log location; override with the GATEWAY_LOG env var.
const LOG_PATH: &str = "logs/launch_gateway.log";

pub struct Logger {
    file: Mutex<Option<File>>,
}

impl Logger {
    pub fn new(log_path: &str) -> Self {
        // Create the logs directory if it doesn't exist
        if let Some(parent) = Path::new(log_path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .ok();

        if file.is_none() {
            eprintln!("Could not open log file {log_path}; file logging disabled");
        }

        Logger {
            file: Mutex::new(file),
        }
    }

    pub fn log(&self, level: &str, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let log_line = format!("[{timestamp}] [{level}] {message}\n");

        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(log_line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log("DEBUG", message);
    }

    pub fn info(&self, message: &str) {
        self.log("INFO", message);
    }

    pub fn warn(&self, message: &str) {
        self.log("WARN", message);
    }

    pub fn error(&self, message: &str) {
        self.log("ERROR", message);
    }
}

// Global logger instance
lazy_static::lazy_static! {
    pub static ref LOGGER: Logger = {
        let path = std::env::var("GATEWAY_LOG").unwrap_or_else(|_| LOG_PATH.to_string());
        Logger::new(&path)
    };
}

// Convenience macros
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::web::logger::LOGGER.debug(&format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::web::logger::LOGGER.info(&format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::web::logger::LOGGER.warn(&format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::web::logger::LOGGER.error(&format!($($arg)*));
    };
}
