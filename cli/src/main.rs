//! `httpclient [GET|POST] URL`: one request over a raw socket.
//!
//! The outgoing request and the raw response are logged at `info` to
//! stdout, followed by the status code and body.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use rawhttp_core::{ClientError, HttpClient, HttpResponse};

#[derive(Debug, Parser)]
#[command(name = "httpclient")]
#[command(about = "Minimal HTTP/1.1 client speaking over a raw TCP socket")]
#[command(version)]
pub struct Cli {
    /// Either `URL`, or `METHOD URL`. Only `POST` posts; anything else gets.
    #[arg(value_name = "[METHOD] URL", num_args = 1..=2, required = true)]
    words: Vec<String>,

    /// Form field sent with a POST, repeatable, in order.
    #[arg(short, long = "data", value_name = "KEY=VALUE", value_parser = parse_pair)]
    data: Vec<(String, String)>,

    /// Only log warnings; skip the request/response dumps.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// The command word, `GET` when only a URL was given.
    pub fn method(&self) -> &str {
        match self.words.as_slice() {
            [method, _] => method.as_str(),
            _ => "GET",
        }
    }

    pub fn url(&self) -> &str {
        self.words.last().map(String::as_str).unwrap_or_default()
    }

    fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    pub fn run(&self) -> Result<HttpResponse, ClientError> {
        HttpClient::new().command(self.url(), self.method(), &self.data)
    }
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in `{s}`")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

/// Print the status code and body to `out`, or the error to `err`, and
/// pick the exit code.
fn report(result: Result<HttpResponse, ClientError>, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match result {
        Ok(response) => {
            if writeln!(out, "{}\n{}", response.status, response.body).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = writeln!(err, "httpclient: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .target(env_logger::Target::Stdout)
        .init();

    report(cli.run(), &mut io::stdout().lock(), &mut io::stderr().lock())
}
