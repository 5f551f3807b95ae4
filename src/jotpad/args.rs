use clap::Parser;

/// Returns the version string, including git hash and commit date for dev
/// builds. Format: "0.4.1" for releases, "0.4.1@abc1234 2024-01-15 14:30"
/// when built from a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "jotpad",
    bin_name = "jotpad",
    version = get_version(),
    about = "A small interactive notepad for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Maximum number of notes; when omitted, jotpad prompts for it
    #[arg(long, value_name = "N")]
    pub capacity: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
