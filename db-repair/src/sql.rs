//! Setup SQL for the WordPress database
//!
//! Renders the provisioning script and pipes it into the mysql client inside
//! the database container via a temp file.

use anyhow::{Context, Result};
use common::{shell, CommandOutput, StackConfig};
use tokio::fs;

/// Render the provisioning script.
///
/// Every statement is guarded so a second run is a no-op: the database and
/// both user scopes end up present exactly once no matter how often this runs.
pub fn setup_script(config: &StackConfig) -> String {
    format!(
        r#"
CREATE DATABASE IF NOT EXISTS {db} CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci;
CREATE USER IF NOT EXISTS '{user}'@'%' IDENTIFIED BY '{pass}';
GRANT ALL PRIVILEGES ON {db}.* TO '{user}'@'%';
CREATE USER IF NOT EXISTS '{user}'@'localhost' IDENTIFIED BY '{pass}';
GRANT ALL PRIVILEGES ON {db}.* TO '{user}'@'localhost';
FLUSH PRIVILEGES;
"#,
        db = config.db_name,
        user = config.db_user,
        pass = config.db_password,
    )
}

/// Write the script to the configured temp file and pipe it into the database
/// container's mysql client.
///
/// The temp file is overwritten on every run and left behind afterwards.
pub async fn apply_setup_script(config: &StackConfig) -> Result<CommandOutput> {
    fs::write(&config.sql_file, setup_script(config))
        .await
        .context(format!("Failed to write {}", config.sql_file))?;

    Ok(shell(&format!(
        "docker exec -i {} mysql < {}",
        config.mariadb_container, config.sql_file
    ))
    .await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_guarded_for_reruns() {
        let sql = setup_script(&StackConfig::from_env());
        assert!(sql.contains("CREATE DATABASE IF NOT EXISTS wordpress"));
        assert!(sql.contains("CREATE USER IF NOT EXISTS 'nkannan'@'%'"));
        assert!(sql.contains("CREATE USER IF NOT EXISTS 'nkannan'@'localhost'"));
        assert!(sql.contains("FLUSH PRIVILEGES;"));
    }

    #[test]
    fn script_grants_both_host_scopes() {
        let sql = setup_script(&StackConfig::from_env());
        assert!(sql.contains("GRANT ALL PRIVILEGES ON wordpress.* TO 'nkannan'@'%'"));
        assert!(sql.contains("GRANT ALL PRIVILEGES ON wordpress.* TO 'nkannan'@'localhost'"));
    }
}
