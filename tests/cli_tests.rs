use std::path::{Path, PathBuf};
use clap::Parser;
use webhook_notifier::config::config_manager::ConfigManager;
use webhook_notifier::enums::commands::Commands;
use webhook_notifier::structs::cli::Cli;

#[test]
fn no_subcommand_sends_the_test_message() {
    let cli = Cli::try_parse_from(["webhook-notifier"]).unwrap();

    assert!(cli.config.is_none());
    assert_eq!(
        cli.command_or_default(),
        Commands::Send {
            content: "Test".to_string(),
            no_rate_limit_retry: false,
        }
    );
}

#[test]
fn config_flag_and_send_options_are_parsed() {
    let cli = Cli::try_parse_from(["webhook-notifier", "-c", "x.toml", "send", "--no-rate-limit-retry"]).unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    assert_eq!(
        cli.command_or_default(),
        Commands::Send {
            content: "Test".to_string(),
            no_rate_limit_retry: true,
        }
    );
}

#[test]
fn config_flag_is_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from(["webhook-notifier", "send", "-m", "deployed", "--config", "y.toml"]).unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("y.toml")));
    assert_eq!(
        cli.command_or_default(),
        Commands::Send {
            content: "deployed".to_string(),
            no_rate_limit_retry: false,
        }
    );
}

#[test]
fn init_and_validate_subcommands_parse() {
    let init = Cli::try_parse_from(["webhook-notifier", "init"]).unwrap();
    let validate = Cli::try_parse_from(["webhook-notifier", "validate"]).unwrap();

    assert_eq!(init.command_or_default(), Commands::Init);
    assert_eq!(validate.command_or_default(), Commands::Validate);
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["webhook-notifier", "deliver"]).is_err());
}

#[test]
fn default_config_lives_under_webhook_notifier_dir() {
    let path = ConfigManager::default_config_path();

    assert!(path.ends_with(Path::new("webhook-notifier").join("config.toml")));
}

#[test]
fn explicit_config_path_overrides_default() {
    let explicit = PathBuf::from("/tmp/other.toml");

    assert_eq!(ConfigManager::resolve_path(Some(&explicit)), explicit);
    assert_eq!(ConfigManager::resolve_path(None), ConfigManager::default_config_path());
}
