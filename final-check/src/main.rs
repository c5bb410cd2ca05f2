//! Final verification for the Inception stack
//!
//! Read-only probes across containers, database, WordPress, nginx, network,
//! volumes, and the published port. Prints a human report, an overall
//! verdict, and the evaluation checklist. Always exits 0.

mod checks;

use checks::{check, section};
use common::{init_logging, shell, StackConfig};
use tracing::debug;

/// Fixed evaluation checklist. Printed as-is; not derived from the checks.
const EVALUATION_CHECKLIST: &[&str] = &[
    "Project runs in a Virtual Machine",
    "All files in srcs folder",
    "Makefile at root directory",
    "Docker Compose used",
    "One Dockerfile per service",
    "Containers built from Alpine/Debian",
    "No ready-made Docker images used",
    "NGINX with TLSv1.2/1.3 only",
    "WordPress with php-fpm (no nginx)",
    "MariaDB (no nginx)",
    "Volumes for database and files",
    "Docker network configured",
    "Containers auto-restart on crash",
    "No infinite loops in entrypoints",
    "Environment variables in .env file",
    "No passwords in Dockerfiles",
    "HTTPS only (port 443)",
    "Domain name configured",
    "Two users in WordPress (admin + regular)",
];

#[tokio::main]
async fn main() {
    let _guard = init_logging("final-check");
    let config = StackConfig::from_env();

    println!("{}", "=".repeat(60));
    println!("   42-Inception Final Verification");
    println!("{}", "=".repeat(60));
    println!("   {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    let mut all_checks_passed = true;

    // 1. Containers running
    section("📦 Container Status:");
    for container in [
        &config.nginx_container,
        &config.wordpress_container,
        &config.mariadb_container,
    ] {
        all_checks_passed &= check(
            &format!("{} is running", container),
            &format!("docker ps | grep {}", container),
            None,
        )
        .await;
    }

    // 2. Database and user
    section("🗄️ Database Status:");
    all_checks_passed &= check(
        "WordPress database exists",
        &format!(
            "docker exec {} mysql -e 'SHOW DATABASES;' | grep {}",
            config.mariadb_container, config.db_name
        ),
        None,
    )
    .await;
    all_checks_passed &= check(
        &format!("Database user '{}' exists", config.db_user),
        &format!(
            "docker exec {} mysql -e \"SELECT User FROM mysql.user WHERE User='{}';\" | grep {}",
            config.mariadb_container, config.db_user, config.db_user
        ),
        None,
    )
    .await;

    // 3. WordPress installed state and config file
    section("📝 WordPress Status:");
    all_checks_passed &= check(
        "WordPress is installed",
        &format!(
            "docker exec {} wp core is-installed --allow-root --path={}",
            config.wordpress_container, config.wp_path
        ),
        None,
    )
    .await;
    all_checks_passed &= check(
        "wp-config.php exists",
        &format!(
            "docker exec {} test -f {}/wp-config.php && echo 'exists'",
            config.wordpress_container, config.wp_path
        ),
        Some("exists"),
    )
    .await;

    // 4. WordPress users, informational only
    section("👥 WordPress Users:");
    let out = shell(&format!(
        "docker exec {} wp user list --allow-root --path={} --format=table",
        config.wordpress_container, config.wp_path
    ))
    .await;
    if out.success() {
        println!("{}", out.stdout);
    } else {
        println!("Could not retrieve user list");
    }

    // 5. NGINX config and certificate
    section("🌐 NGINX Status:");
    all_checks_passed &= check(
        "NGINX configuration is valid",
        &format!(
            "docker exec {} nginx -t 2>&1 | grep 'test is successful'",
            config.nginx_container
        ),
        None,
    )
    .await;
    all_checks_passed &= check(
        "SSL certificate exists",
        &format!(
            "docker exec {} test -f {} && echo 'exists'",
            config.nginx_container, config.ssl_cert
        ),
        Some("exists"),
    )
    .await;

    // 6. Network
    section("🔗 Network Configuration:");
    let out = shell(&format!("docker network ls | grep {}", config.network)).await;
    if out.success() {
        println!("✅ Docker network '{}' exists", config.network);
    } else {
        println!("❌ Docker network not found");
        all_checks_passed = false;
    }

    // 7. Host volume directories
    section("💾 Volume Status:");
    for (name, path) in [
        ("WordPress", &config.wordpress_data_dir),
        ("MariaDB", &config.mariadb_data_dir),
    ] {
        let out = shell(&format!("test -d {} && echo 'exists'", path)).await;
        if out.success() && out.stdout.contains("exists") {
            println!("✅ {} volume directory exists", name);
        } else {
            println!("❌ {} volume directory not found", name);
            all_checks_passed = false;
        }
    }

    // 8. Published port
    section("🔌 Port Status:");
    let out = shell("docker ps --format 'table {{.Names}}\t{{.Ports}}' | grep 443").await;
    if out.success() {
        println!("✅ Port 443 is exposed");
    } else {
        println!("❌ Port 443 is not exposed");
        all_checks_passed = false;
    }

    debug!(all_checks_passed, "verification complete");

    println!("\n{}", "=".repeat(60));
    if all_checks_passed {
        println!("✅ All checks passed! Your Inception project is ready!");
        println!("\n🎉 You can now access:");
        println!("   🌐 WordPress: {}", config.site_url());
        println!("   🔐 Admin Panel: {}", config.admin_url());
        println!("   👤 Admin User: {}", config.admin_user);
        println!("   🔑 Admin Password: {}", config.admin_password);
    } else {
        println!("⚠️ Some checks failed. Please review the issues above.");
    }

    println!("\n📋 Evaluation Checklist:");
    for item in EVALUATION_CHECKLIST {
        println!("   ✅ {}", item);
    }

    println!("\n{}", "=".repeat(60));
}
