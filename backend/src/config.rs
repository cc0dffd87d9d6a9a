use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveTime;
use tracing::{info, warn};

use crate::domain::{AttendancePolicy, LeavePolicy, MarkingWindow};

/// Runtime settings, read from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub cors_origin: String,
    pub static_dir: PathBuf,
    pub attendance: AttendancePolicy,
    pub leave: LeavePolicy,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to defaults
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let window = MarkingWindow::new(
            load_time(&lookup, "MARKING_WINDOW_START", "06:00")?,
            load_time(&lookup, "MARKING_WINDOW_END", "10:00")?,
        )?;

        Ok(Self {
            host: try_load(&lookup, "DUTY_ROSTER_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "DUTY_ROSTER_PORT", "3000")?,
            database_url: try_load(&lookup, "DATABASE_URL", "sqlite:duty_roster.db")?,
            cors_origin: try_load(&lookup, "CORS_ORIGIN", "http://localhost:8080")?,
            static_dir: try_load(&lookup, "STATIC_DIR", "../frontend/dist")?,
            attendance: AttendancePolicy {
                window,
                auto_lock_after_deadline: try_load(&lookup, "AUTO_LOCK_AFTER_DEADLINE", "true")?,
            },
            leave: LeavePolicy {
                require_approval: try_load(&lookup, "REQUIRE_LEAVE_APPROVAL", "true")?,
                max_leave_days: try_load(&lookup, "MAX_LEAVE_DAYS", "10")?,
                advance_notice_days: try_load(&lookup, "ADVANCE_NOTICE_DAYS", "7")?,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            database_url: "sqlite:duty_roster.db".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            static_dir: PathBuf::from("../frontend/dist"),
            attendance: AttendancePolicy::default(),
            leave: LeavePolicy::default(),
        }
    }
}

fn var<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = var(lookup, key, default);
    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Invalid {key} value {raw:?}: {e}")
    })
}

/// Times are wall-clock `HH:MM`
fn load_time<F>(lookup: &F, key: &str, default: &str) -> Result<NaiveTime>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = var(lookup, key, default);
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .with_context(|| format!("Invalid {key} value {raw:?}, expected HH:MM"))
}
