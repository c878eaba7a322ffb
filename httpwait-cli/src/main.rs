use clap::Parser;

mod actions;
mod args;
mod cmd;
mod exit_codes;
mod logging;
mod output;

pub use args::*;

#[derive(Debug, Parser)]
#[command(
    name = "httpwait",
    version,
    about = "Poll an HTTP endpoint until it answers with the expected status"
)]
struct Cli {
    #[command(flatten)]
    request: RequestArgs,
    #[command(flatten)]
    timing: TimingArgs,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let inputs = raw_inputs(cli.request, cli.timing);
    let exit_code = rt.block_on(cmd::poll::poll_cmd(inputs, cli.output));
    std::process::exit(exit_code);
}
