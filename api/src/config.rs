use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Timezone in which "today" is read for age calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceTimezone {
    /// The host's local date
    #[default]
    Local,
    Utc,
}

impl std::str::FromStr for ReferenceTimezone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(ReferenceTimezone::Local),
            "utc" => Ok(ReferenceTimezone::Utc),
            _ => Err(format!("Unknown reference timezone: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub reference_timezone: ReferenceTimezone,
    /// Reject birth dates after today instead of reporting a negative age
    pub reject_future_birth_dates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            reference_timezone: ReferenceTimezone::Local,
            reject_future_birth_dates: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unset variables take their default; unparseable ones are logged and
    /// also take their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: parse_var(&lookup, "HOST", defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port),
            reference_timezone: parse_var(
                &lookup,
                "REFERENCE_TIMEZONE",
                defaults.reference_timezone,
            ),
            reject_future_birth_dates: lookup("REJECT_FUTURE_BIRTH_DATES")
                .map(|v| {
                    parse_bool(
                        "REJECT_FUTURE_BIRTH_DATES",
                        &v,
                        defaults.reject_future_birth_dates,
                    )
                })
                .unwrap_or(defaults.reject_future_birth_dates),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}, using {:?}", raw, key, default);
            default
        }),
        None => default,
    }
}

fn parse_bool(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }
    }
}
