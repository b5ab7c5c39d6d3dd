use crate::core::auth::DEFAULT_MAX_PIN_ATTEMPTS;
use crate::core::dispatcher::DEFAULT_CURRENCY;
use crate::core::pin;
use crate::core::SessionConfig;
use crate::types::{Amount, DepositMode, DEFAULT_PIN};
use clap::Parser;

/// Interactive ATM terminal simulator
#[derive(Parser, Debug)]
#[command(name = "atm")]
#[command(about = "Interactive ATM terminal simulator", long_about = None)]
pub struct CliArgs {
    /// PIN the account starts with
    #[arg(
        long = "pin",
        value_name = "PIN",
        default_value = DEFAULT_PIN,
        value_parser = parse_pin,
        help = "Initial account PIN (at least four digits)"
    )]
    pub pin: String,

    /// Balance the account starts with
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value_t = 0,
        help = "Opening account balance"
    )]
    pub initial_balance: Amount,

    /// Wrong PINs allowed before lockout
    #[arg(
        long = "max-pin-attempts",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_PIN_ATTEMPTS,
        help = "Incorrect PIN entries allowed before lockout (default: 3)"
    )]
    pub max_pin_attempts: u32,

    /// Clear the failed-attempt counter after each successful login
    #[arg(long = "reset-attempts-on-success")]
    pub reset_attempts_on_success: bool,

    /// How a deposit changes the balance
    #[arg(
        long = "deposit-mode",
        value_name = "MODE",
        default_value = "overwrite",
        help = "Deposit semantics: 'overwrite' sets the balance, 'accumulate' adds to it"
    )]
    pub deposit_mode: DepositMode,

    /// Bound on consecutive invalid entries at the PIN and command prompts
    #[arg(
        long = "max-retries",
        value_name = "COUNT",
        help = "Consecutive malformed PINs or unknown commands tolerated (default: unlimited)"
    )]
    pub max_retries: Option<u32>,

    /// Currency symbol shown with balances
    #[arg(long = "currency", value_name = "SYMBOL", default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            pin: self.pin.clone(),
            initial_balance: self.initial_balance,
            max_pin_attempts: self.max_pin_attempts,
            reset_attempts_on_success: self.reset_attempts_on_success,
            deposit_mode: self.deposit_mode,
            max_retries: self.max_retries,
            currency: self.currency.clone(),
        }
        .validated()
    }
}

fn parse_pin(value: &str) -> Result<String, String> {
    if pin::is_well_formed(value) {
        Ok(value.to_string())
    } else {
        Err(format!("'{}' is not a PIN of at least four digits", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_session_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.to_session_config(), SessionConfig::default());
    }

    #[rstest]
    #[case::overwrite(&["program", "--deposit-mode", "overwrite"], DepositMode::Overwrite)]
    #[case::accumulate(&["program", "--deposit-mode", "accumulate"], DepositMode::Accumulate)]
    #[case::default_mode(&["program"], DepositMode::Overwrite)]
    fn test_deposit_mode_parsing(#[case] args: &[&str], #[case] expected: DepositMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.deposit_mode, expected);
    }

    #[test]
    fn test_all_options() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--pin",
            "1234",
            "--initial-balance",
            "500",
            "--max-pin-attempts",
            "5",
            "--reset-attempts-on-success",
            "--max-retries",
            "2",
            "--currency",
            "$",
        ])
        .unwrap();
        let config = parsed.to_session_config();

        assert_eq!(config.pin, "1234");
        assert_eq!(config.initial_balance, 500);
        assert_eq!(config.max_pin_attempts, 5);
        assert!(config.reset_attempts_on_success);
        assert_eq!(config.max_retries, Some(2));
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_zero_attempts_falls_back_to_default() {
        let parsed = CliArgs::try_parse_from(["program", "--max-pin-attempts", "0"]).unwrap();
        assert_eq!(
            parsed.to_session_config().max_pin_attempts,
            DEFAULT_MAX_PIN_ATTEMPTS
        );
    }

    #[rstest]
    #[case::short_pin(&["program", "--pin", "12"])]
    #[case::non_numeric_pin(&["program", "--pin", "abcd"])]
    #[case::negative_balance(&["program", "--initial-balance", "-5"])]
    #[case::invalid_mode(&["program", "--deposit-mode", "double"])]
    #[case::unknown_flag(&["program", "--verbose-mode"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
