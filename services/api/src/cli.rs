use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use two_iron::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "two-iron-api",
    about = "Score 2-iron readiness questionnaires and serve the submission API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a questionnaire answers file without sending any email
    Score(ScoreArgs),
    /// Walk the questionnaire wizard with a canned golfer profile
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoProfile;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["two-iron-api"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_answers_file_and_explain_flag() {
        let cli = Cli::try_parse_from([
            "two-iron-api",
            "score",
            "--answers",
            "golfer.json",
            "--explain",
        ])
        .expect("parse");
        let Some(Command::Score(args)) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.answers.to_str(), Some("golfer.json"));
        assert!(args.explain);
    }

    #[test]
    fn demo_profile_defaults_to_seasoned() {
        let cli = Cli::try_parse_from(["two-iron-api", "demo"]).expect("parse");
        let Some(Command::Demo(args)) = cli.command else {
            panic!("expected demo command");
        };
        assert_eq!(args.profile, DemoProfile::Seasoned);

        let cli = Cli::try_parse_from(["two-iron-api", "demo", "--profile", "beginner"])
            .expect("parse");
        let Some(Command::Demo(args)) = cli.command else {
            panic!("expected demo command");
        };
        assert_eq!(args.profile, DemoProfile::Beginner);
    }
}
