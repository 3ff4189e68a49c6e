use clap::Parser;
use clap_verbosity_flag::Verbosity;

/// The production backend. Overridable for local runs against the mock
/// server.
pub const DEFAULT_BASE_URL: &str = "https://blog-backend-three-psi.vercel.app/api";

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal dashboard for managing blog posts", long_about = None)]
pub struct Args {
    /// Base URL of the blog backend.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[command(flatten)]
    pub verbose: Verbosity,
}
