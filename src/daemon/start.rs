use std::sync::Arc;

use crate::config::config::Config;
use crate::error::PlanError;
use crate::planner::{LocalPlanner, PlanGenerator};
use crate::remote::client::RemoteClient;

pub fn print_banner(config: &Config) {
    let ascii_art = format!(
        r#"
   __  ____                  __  _
  /  |/  (_)__ ________ _/ /_(_)__  ___
 / /|_/ / / _ `/ __/ _ `/ __/ / _ \/ _ \
/_/  /_/_/\_, /_/  \_,_/\__/_/\___/_//_/ Planner
         /___/

migration-planner v{}
"#,
        config.get_version()
    );

    println!("{}", ascii_art);
}

/// Pick the plan generator the config asks for.
/// The local planner is used unless remote generation is enabled.
pub fn build_generator(config: &Config) -> Result<Arc<dyn PlanGenerator>, PlanError> {
    match config.active_remote() {
        Some(remote) => {
            if remote.api_key.is_empty() {
                tracing::warn!("Remote planner enabled without an API key");
            }
            tracing::info!("Using remote planner: {}", remote.url);
            Ok(Arc::new(RemoteClient::new(remote)?))
        }
        None => Ok(Arc::new(LocalPlanner)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::RemoteConfig;

    #[test]
    fn test_local_by_default() {
        let generator = build_generator(&Config::default()).unwrap();
        assert_eq!(generator.name(), "local");
    }

    #[test]
    fn test_disabled_remote_stays_local() {
        let config = Config {
            remote: Some(RemoteConfig::default()),
            ..Config::default()
        };
        assert_eq!(build_generator(&config).unwrap().name(), "local");
    }

    #[test]
    fn test_enabled_remote() {
        let config = Config {
            remote: Some(RemoteConfig {
                enabled: true,
                ..RemoteConfig::default()
            }),
            ..Config::default()
        };
        assert_eq!(build_generator(&config).unwrap().name(), "remote");
    }
}
