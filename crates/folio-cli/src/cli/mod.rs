use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - sitemap generation and SEO verification")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./folio.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write sitemap.xml, blog-sitemap.xml and robots.txt into the build output.
    Sitemap(SitemapArgs),
    /// Audit the built site and exit non-zero on any failed check.
    Verify(VerifyArgs),
}

/// Overrides shared by both commands.
#[derive(Clone, Debug, Default, Args)]
pub struct SiteArgs {
    /// Build output directory (overrides `paths.dist`)
    #[arg(long)]
    pub dist: Option<PathBuf>,
    /// Site base URL (overrides `SITE_URL` and `site.url`)
    #[arg(long)]
    pub site_url: Option<String>,
}

/// Arguments for `folio sitemap`.
#[derive(Clone, Debug, Args)]
pub struct SitemapArgs {
    #[command(flatten)]
    pub site: SiteArgs,
    /// Print the summary without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `folio verify`.
#[derive(Clone, Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_commands_use_defaults() {
        let cli = Cli::try_parse_from(["folio", "verify"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.quiet);
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert!(args.site.dist.is_none());
        assert!(args.site.site_url.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "sitemap", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Sitemap(_)));
    }

    #[test]
    fn sitemap_overrides_parse() {
        let cli = Cli::try_parse_from([
            "folio",
            "--verbose",
            "sitemap",
            "--dist",
            "public",
            "--site-url",
            "https://staging.example.com",
            "--dry-run",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        let Commands::Sitemap(args) = cli.command else {
            panic!("expected sitemap");
        };
        assert!(args.dry_run);
        assert_eq!(args.site.dist.as_deref(), Some(Path::new("public")));
        assert_eq!(
            args.site.site_url.as_deref(),
            Some("https://staging.example.com")
        );
    }

    #[test]
    fn dry_run_is_sitemap_only() {
        assert!(Cli::try_parse_from(["folio", "verify", "--dry-run"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "table", "verify"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["folio", "--config", "/tmp/folio.toml", "verify"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/folio.toml")));
    }
}
