//! Command implementations for the clean-air CLI.
//!
//! Provides subcommands for planning routes, querying pollution, and
//! managing saved routes against the route planning backend.

use clap::Subcommand;

pub mod bookmarks;
pub mod plan;
pub mod status;

/// Environment variable consulted when `--api-base` is not given. The web
/// apps read the same name from a `window` global.
pub const API_BASE_ENV: &str = "CLEAN_AIR_API_BASE";

#[derive(Subcommand)]
pub enum Command {
    /// Check backend health
    Health {
        /// Backend API base URL (default: CLEAN_AIR_API_BASE env, then localhost)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Calculate candidate routes between two catalog places
    Calculate {
        /// Source place name or address from the catalog
        #[arg(short = 'f', long)]
        from: String,

        /// Destination place name or address from the catalog
        #[arg(short = 't', long)]
        to: String,

        /// Print the raw response as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Backend API base URL (default: CLEAN_AIR_API_BASE env, then localhost)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Query current pollution at a coordinate
    Pollution {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lng: f64,

        /// Backend API base URL (default: CLEAN_AIR_API_BASE env, then localhost)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// List saved routes for a user
    Saved {
        /// User identity token
        #[arg(short = 'u', long)]
        user: String,

        /// Backend API base URL (default: CLEAN_AIR_API_BASE env, then localhost)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Delete a saved route by id
    DeleteSaved {
        /// Saved route id as listed by `saved`
        #[arg(long)]
        id: String,

        /// Backend API base URL (default: CLEAN_AIR_API_BASE env, then localhost)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// List pollution alerts for a user
    Alerts {
        /// User identity token
        #[arg(short = 'u', long)]
        user: String,

        /// Backend API base URL (default: CLEAN_AIR_API_BASE env, then localhost)
        #[arg(long)]
        api_base: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Health { api_base } => status::run_health(resolve_api_base(api_base)).await,
        Command::Calculate {
            from,
            to,
            json,
            api_base,
        } => plan::run_calculate(&from, &to, json, resolve_api_base(api_base)).await,
        Command::Pollution { lat, lng, api_base } => {
            status::run_pollution(lat, lng, resolve_api_base(api_base)).await
        }
        Command::Saved { user, api_base } => {
            bookmarks::run_saved(&user, resolve_api_base(api_base)).await
        }
        Command::DeleteSaved { id, api_base } => {
            bookmarks::run_delete(&id, resolve_api_base(api_base)).await
        }
        Command::Alerts { user, api_base } => {
            bookmarks::run_alerts(&user, resolve_api_base(api_base)).await
        }
    }
}

/// Pick the backend base URL from the `--api-base` flag, then the
/// environment, then the compiled-in default.
pub fn resolve_api_base(flag: Option<String>) -> String {
    pick_api_base(flag, std::env::var(API_BASE_ENV).ok())
}

fn pick_api_base(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .unwrap_or_else(|| car_core::api::DEFAULT_API_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::pick_api_base;

    #[test]
    fn test_flag_beats_environment() {
        let base = pick_api_base(
            Some("http://flag:1/api".to_string()),
            Some("http://env:2/api".to_string()),
        );
        assert_eq!(base, "http://flag:1/api");
    }

    #[test]
    fn test_environment_beats_default() {
        let base = pick_api_base(None, Some("http://env:2/api".to_string()));
        assert_eq!(base, "http://env:2/api");
    }

    #[test]
    fn test_default_when_nothing_is_set() {
        assert_eq!(pick_api_base(None, None), car_core::api::DEFAULT_API_BASE);
    }
}
