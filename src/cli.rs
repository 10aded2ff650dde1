// src/cli.rs
use std::{error::Error, thread::JoinHandle};

use crate::{
    config::options::{AppOptions, BrowserOptions},
    model::FetchResult,
    session::SessionManager,
    sink::{HttpImageLoader, Presentation, ResultSink, Thumbnail},
};

const HELP: &str = "\
Usage: cli --platform <facebook|instagram|twitter> --id <username|profile-url>
           [--count <tweets>] [--sessions <n>]

  -p, --platform   platform to fetch from
  -i, --id         handle (Instagram/Twitter) or full profile URL (Facebook)
  -c, --count      tweets to read (Twitter only, default 5)
  -n, --sessions   concurrent sessions running the same request (default 1)
  -h, --help       this text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub platform: String,
    pub identifier: String,
    pub count: Option<usize>,
    pub sessions: String,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            platform: s!(),
            identifier: s!(),
            count: None,
            sessions: s!("1"),
            help: false,
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-p" | "--platform" => out.platform = args.next().ok_or("Missing value for --platform")?,
            "-i" | "--id" => out.identifier = args.next().ok_or("Missing value for --id")?,
            "-c" | "--count" => {
                let v: usize = args.next().ok_or("Missing value for --count")?.parse()?;
                if v == 0 { return Err("--count must be at least 1".into()); }
                out.count = Some(v);
            }
            "-n" | "--sessions" => out.sessions = args.next().ok_or("Missing value for --sessions")?,
            "-h" | "--help" => out.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    if !out.help && (out.platform.is_empty() || out.identifier.is_empty()) {
        return Err("Specify --platform and --id (see --help)".into());
    }
    Ok(out)
}

/// Prints each presented result as one block.
pub struct ConsoleSink {
    index: usize,
    loader: HttpImageLoader,
}

impl ConsoleSink {
    pub fn new(index: usize, browser: &BrowserOptions) -> Result<Self, Box<dyn Error>> {
        Ok(Self { index, loader: HttpImageLoader::new(browser)? })
    }
}

pub fn picture_line(t: &Thumbnail) -> String {
    match t {
        Thumbnail::Image(img) => format!("[picture: {}x{} thumbnail]", img.width(), img.height()),
        other => format!("[picture: {}]", other.label().unwrap_or_default()),
    }
}

impl ResultSink for ConsoleSink {
    fn present(&mut self, result: FetchResult) {
        let p = Presentation::build(&result, &self.loader);
        // One println per block: stdout's lock keeps blocks whole.
        println!("=== Session {} ===\n{}\n{}\n", self.index, p.text, picture_line(&p.thumbnail));
    }
}

pub fn run(args: CliArgs, opts: AppOptions) -> Result<(), Box<dyn Error>> {
    if args.help {
        println!("{HELP}");
        return Ok(());
    }

    let mut manager = SessionManager::live(&opts);

    // Sink construction can fail (TLS setup); surface it instead of panicking in the closure.
    let mut sink_err: Option<Box<dyn Error>> = None;
    let mut sessions = manager.create_sessions(&args.sessions, |index| -> Box<dyn ResultSink> {
        match ConsoleSink::new(index, &opts.browser) {
            Ok(s) => Box::new(s),
            Err(e) => {
                sink_err.get_or_insert(e);
                Box::new(NullSink)
            }
        }
    })?;
    if let Some(e) = sink_err {
        return Err(e);
    }

    let handles: Vec<JoinHandle<()>> = sessions
        .iter_mut()
        .map(|s| {
            s.set_platform(args.platform.clone());
            s.set_identifier(args.identifier.clone());
            s.set_count(args.count);
            s.trigger_fetch()
        })
        .collect::<Result<_, _>>()?;

    for h in handles {
        if h.join().is_err() {
            loge!("CLI: a fetch thread panicked");
        }
    }

    for (platform, result) in manager.snapshot() {
        logf!("CLI: aggregate {platform} ok={} elapsed={:.2}", result.is_ok(), result.elapsed());
    }
    Ok(())
}

struct NullSink;

impl ResultSink for NullSink {
    fn present(&mut self, _result: FetchResult) {}
}
