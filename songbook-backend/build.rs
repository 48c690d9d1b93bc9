fn main() {
    println!("cargo::rustc-check-cfg=cfg(database_env)");
    println!("cargo::rerun-if-env-changed=DATABASE_URL");
    if std::env::var("DATABASE_URL").is_ok_and(|s| !s.is_empty()) {
        println!("cargo::rustc-cfg=database_env");
    }
}
