use httpwait_core::RawInputs;
use httpwait_exec::ReqwestHttpClient;

use crate::actions::GithubActionsReporter;
use crate::exit_codes;
use crate::output::{print_result, PollSummary};
use crate::OutputArgs;

pub async fn poll_cmd(inputs: RawInputs, output: OutputArgs) -> i32 {
    let reporter = GithubActionsReporter::from_env(output.quiet);

    let http = match ReqwestHttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            reporter.fail(&e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let outcome = match httpwait_exec::run(&inputs, &http, &reporter).await {
        Ok(o) => o,
        Err(e) => {
            reporter.fail(&e.to_string());
            return exit_codes::VALIDATION_FAILED;
        }
    };

    if let Some(e) = reporter.take_write_error() {
        reporter.fail(&format!("failed to write outputs: {e}"));
        return exit_codes::RUNTIME_ERROR;
    }

    print_result(output.format, &PollSummary::from(&outcome.result));

    match outcome.verdict {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            reporter.fail(&e.to_string());
            exit_codes::RUN_FAILED
        }
    }
}
