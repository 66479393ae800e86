use std::env;
use std::process::ExitCode;

use log::{error, info};

use plum_checkers::game_state::checkers_rules::RuleSet;
use plum_checkers::protocol::session::run_stdio_loop;

const RULES_ENV_VAR: &str = "PLUM_CHECKERS_RULES";

fn main() -> ExitCode {
    env_logger::init();

    let rules = match env::var(RULES_ENV_VAR) {
        Ok(name) => match name.parse::<RuleSet>() {
            Ok(rules) => rules,
            Err(err) => {
                error!("{RULES_ENV_VAR}: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => RuleSet::default(),
    };
    info!("starting checkers session ({rules} rules)");

    match run_stdio_loop(rules) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("session i/o failed: {err}");
            ExitCode::FAILURE
        }
    }
}
