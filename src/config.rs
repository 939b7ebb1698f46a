//! Command-line configuration for the server binary.
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "supplement-store")]
#[command(about = "HTTP service for brands and the supplements they sell")]
pub struct ServerConfig {
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind: String,

    /// Capacity of each collection's request channel.
    #[arg(long, default_value = "32")]
    pub channel_capacity: usize,

    #[arg(long, help = "Do not seed empty collections at startup")]
    pub skip_seed: bool,

    #[arg(long, help = "Log at debug level unless RUST_LOG is set")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::parse_from(["supplement-store"]);
        assert_eq!(config.bind, "0.0.0.0:5000");
        assert_eq!(config.channel_capacity, 32);
        assert!(!config.skip_seed);
        assert!(!config.verbose);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::parse_from([
            "supplement-store",
            "--bind",
            "127.0.0.1:8080",
            "--channel-capacity",
            "4",
            "--skip-seed",
        ]);
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.channel_capacity, 4);
        assert!(config.skip_seed);
    }
}
